use rand::Rng;

use super::agent;
use super::config::GameConfig;
use super::direction::Direction;
use super::grid::{CellState, Grid};
use super::state::{Controller, GameState, Position, Snake};

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    /// A snake ran off the board
    Wall,
    /// A snake ran into a body cell
    Collision,
    /// The agent found no surviving move
    Trapped,
    /// No empty cell left to respawn food on
    BoardFull,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the session is over
    pub terminated: bool,
    /// Set when this tick ended the session
    pub cause: Option<GameOverCause>,
    /// Whether any snake ate food this tick
    pub ate_food: bool,
}

impl StepResult {
    fn ended(cause: GameOverCause, ate_food: bool) -> Self {
        Self {
            terminated: true,
            cause: Some(cause),
            ate_food,
        }
    }
}

/// The step engine: advances sessions tick by tick and owns the
/// food-spawn randomness.
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh session from the configured roster
    pub fn reset(&mut self) -> GameState {
        let size = self.config.grid_size as i32;
        let count = self.config.players.len() as i32;

        let snakes: Vec<Snake> = self
            .config
            .players
            .iter()
            .enumerate()
            .map(|(i, &controller)| {
                let (head, direction) = if count == 1 {
                    (Position::new(size / 2, size / 2), Direction::Right)
                } else {
                    // Rosters of two or more start on separate rows.
                    let y = size * (i as i32 + 1) / (count + 1);
                    let direction = match controller {
                        Controller::Agent => Direction::Down,
                        Controller::Human => Direction::Right,
                    };
                    (Position::new(size / 2, y), direction)
                };
                Snake::new(head, direction, self.config.initial_snake_length, controller)
            })
            .collect();

        let mut grid = Grid::new(self.config.grid_size);
        for snake in &snakes {
            for &segment in &snake.body {
                grid.set(segment, CellState::Snake);
            }
        }

        match self.spawn_food(&grid) {
            Some(food) => {
                grid.set(food, CellState::Food);
                GameState::new(grid, snakes, food)
            }
            None => {
                // Degenerate board with no room for food: born dead.
                let mut state = GameState::new(grid, snakes, Position::new(0, 0));
                state.game_over = true;
                state
            }
        }
    }

    /// Advance every snake by one cell, in roster order. A tick after game
    /// over is a no-op; the first fatal event aborts the tick, leaving the
    /// remaining snakes where they were.
    pub fn step(&mut self, state: &mut GameState) -> StepResult {
        if state.game_over {
            return StepResult {
                terminated: true,
                cause: None,
                ate_food: false,
            };
        }

        state.ticks += 1;
        let mut ate_food = false;

        for i in 0..state.snakes.len() {
            let head = state.snakes[i].head();
            let tail = state.snakes[i].tail();

            if state.snakes[i].controller == Controller::Agent {
                match agent::decide(&state.snakes[i], &state.grid, state.food) {
                    Some(direction) => state.snakes[i].direction = direction,
                    None => {
                        state.game_over = true;
                        return StepResult::ended(GameOverCause::Trapped, ate_food);
                    }
                }
            }

            let new_head = head.moved_in_direction(state.snakes[i].direction);

            // Vacate the tail before validating the new head, so a snake
            // may step into the cell its tail is leaving this tick.
            state.grid.set(tail, CellState::Empty);

            if !state.grid.contains(new_head) {
                state.game_over = true;
                return StepResult::ended(GameOverCause::Wall, ate_food);
            }

            if state.grid.get(new_head) == CellState::Snake {
                state.game_over = true;
                return StepResult::ended(GameOverCause::Collision, ate_food);
            }

            let grew = new_head == state.food;
            state.snakes[i].move_snake(grew);

            for &segment in &state.snakes[i].body {
                state.grid.set(segment, CellState::Snake);
            }

            if grew {
                state.snakes[i].score += 1;
                ate_food = true;

                // The eaten cell is the new head and was just re-stamped,
                // so the spawner cannot hand the same cell back.
                match self.spawn_food(&state.grid) {
                    Some(food) => state.food = food,
                    None => {
                        state.game_over = true;
                        return StepResult::ended(GameOverCause::BoardFull, ate_food);
                    }
                }
            }
        }

        // Stamp food last: a cell another snake vacated this tick may have
        // become the new food cell.
        state.grid.set(state.food, CellState::Food);

        StepResult {
            terminated: false,
            cause: None,
            ate_food,
        }
    }

    /// Pick a uniformly random empty cell, or `None` on a full board
    fn spawn_food(&mut self, grid: &Grid) -> Option<Position> {
        if !grid.has_empty() {
            return None;
        }

        let size = grid.size();
        loop {
            let x = self.rng.gen_range(0..size) as i32;
            let y = self.rng.gen_range(0..size) as i32;
            let pos = Position::new(x, y);

            if grid.get(pos) == CellState::Empty {
                return Some(pos);
            }
        }
    }
}
