use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::grid::Grid;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Manhattan distance to another position
    pub fn distance_to(&self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Who steers a snake between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Controller {
    Human,
    Agent,
}

/// A snake on the board
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
    /// Who drives this snake
    pub controller: Controller,
    /// Food eaten this session
    pub score: u32,
}

impl Snake {
    /// Create a new snake with given head position, direction and length,
    /// laying the body out contiguously behind the head
    pub fn new(head: Position, direction: Direction, length: usize, controller: Controller) -> Self {
        let mut body = vec![head];

        let (dx, dy) = direction.delta();
        let (back_dx, back_dy) = (-dx, -dy);

        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(back_dx, back_dy));
        }

        Self {
            body,
            direction,
            controller,
            score: 0,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        *self.body.last().unwrap()
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Redirect the snake. Requests that would reverse it onto its own
    /// neck are ignored; the latest accepted request wins.
    pub fn steer(&mut self, requested: Direction) {
        if !self.direction.is_opposite(requested) {
            self.direction = requested;
        }
    }

    /// Move snake in current direction, growing if should_grow is true
    pub fn move_snake(&mut self, should_grow: bool) {
        let new_head = self.head().moved_in_direction(self.direction);
        self.body.insert(0, new_head);

        if !should_grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Complete session state: the grid, every snake, the food cell and the
/// one-way game-over flag. Once `game_over` is set, ticking is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: Grid,
    pub snakes: Vec<Snake>,
    pub food: Position,
    pub ticks: u32,
    pub game_over: bool,
}

impl GameState {
    /// Create a new session state
    pub fn new(grid: Grid, snakes: Vec<Snake>, food: Position) -> Self {
        Self {
            grid,
            snakes,
            food,
            ticks: 0,
            game_over: false,
        }
    }

    /// The human-driven snake, if the roster has one
    pub fn human_mut(&mut self) -> Option<&mut Snake> {
        self.snakes
            .iter_mut()
            .find(|snake| snake.controller == Controller::Human)
    }

    /// Route a direction request to the human snake; no-op without one
    pub fn steer_human(&mut self, requested: Direction) {
        if let Some(snake) = self.human_mut() {
            snake.steer(requested);
        }
    }

    /// Highest score across all snakes
    pub fn best_score(&self) -> u32 {
        self.snakes.iter().map(|snake| snake.score).max().unwrap_or(0)
    }
}
