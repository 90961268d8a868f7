//! Greedy direction picker for agent-driven snakes.
//!
//! One-ply lookahead only: the agent never plans a path, it just refuses
//! immediately fatal moves, walks toward the food by Manhattan distance and
//! breaks ties toward candidates with more open neighbor cells. Long games
//! can and do end with the agent trapping itself.

use super::direction::Direction;
use super::grid::{CellState, Grid};
use super::state::{Position, Snake};

/// Pick the next direction for `snake`, or `None` when every candidate
/// move is fatal.
///
/// The safety filter runs against the snake's body as it stands before the
/// tick moves it, head excluded, so cells the tail is about to vacate still
/// count as occupied here even though the engine would allow the move.
pub fn decide(snake: &Snake, grid: &Grid, food: Position) -> Option<Direction> {
    let head = snake.head();

    let is_safe = |pos: Position| grid.contains(pos) && !snake.collides_with_body(pos);

    // Local openness: how many neighbors of a candidate are both safe and
    // currently empty. Crude one-cell flood fill, enough to avoid obvious
    // dead ends.
    let openness = |pos: Position| -> usize {
        Direction::ALL
            .iter()
            .filter(|direction| {
                let neighbor = pos.moved_in_direction(**direction);
                is_safe(neighbor) && grid.get(neighbor) == CellState::Empty
            })
            .count()
    };

    let mut candidates: Vec<(Direction, Position, usize)> = Direction::ALL
        .iter()
        .map(|&direction| {
            let pos = head.moved_in_direction(direction);
            (direction, pos, openness(pos))
        })
        .collect();

    candidates.retain(|&(_, pos, _)| is_safe(pos));
    if candidates.is_empty() {
        return None;
    }

    // Stable sort: full ties keep the Up/Right/Down/Left enumeration order.
    candidates.sort_by(|a, b| {
        a.1.distance_to(food)
            .cmp(&b.1.distance_to(food))
            .then(b.2.cmp(&a.2))
    });

    Some(candidates[0].0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::Controller;

    fn stamped_grid(size: usize, snake: &Snake, food: Position) -> Grid {
        let mut grid = Grid::new(size);
        for &segment in &snake.body {
            grid.set(segment, CellState::Snake);
        }
        grid.set(food, CellState::Food);
        grid
    }

    #[test]
    fn test_heads_straight_toward_food() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3, Controller::Agent);
        let food = Position::new(8, 5);
        let grid = stamped_grid(10, &snake, food);

        assert_eq!(decide(&snake, &grid, food), Some(Direction::Right));
    }

    #[test]
    fn test_never_picks_fatal_candidate() {
        // Head against the right wall; the only food-ward moves are fatal
        // (wall to the right, own body to the left).
        let snake = Snake::new(Position::new(9, 5), Direction::Right, 3, Controller::Agent);
        let food = Position::new(9, 9);
        let grid = stamped_grid(10, &snake, food);

        assert_eq!(decide(&snake, &grid, food), Some(Direction::Down));
    }

    #[test]
    fn test_trapped_returns_none() {
        // Head boxed into the corner by its own body.
        let snake = Snake {
            body: vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 1),
                Position::new(1, 0),
            ],
            direction: Direction::Right,
            controller: Controller::Agent,
            score: 0,
        };
        let food = Position::new(5, 5);
        let grid = stamped_grid(10, &snake, food);

        assert_eq!(decide(&snake, &grid, food), None);
    }

    #[test]
    fn test_full_tie_keeps_enumeration_order() {
        // Food diagonally down-right: Right and Down are both distance 1
        // with equal openness, so the earlier-enumerated Right wins.
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3, Controller::Agent);
        let food = Position::new(6, 6);
        let grid = stamped_grid(10, &snake, food);

        assert_eq!(decide(&snake, &grid, food), Some(Direction::Right));
    }

    #[test]
    fn test_openness_breaks_distance_ties() {
        // Right and Down are both distance 1 from the food, but the body
        // coils around the cell to the right, leaving it fewer escape
        // routes than the cell below.
        let snake = Snake {
            body: vec![
                Position::new(5, 5),
                Position::new(5, 4),
                Position::new(6, 4),
                Position::new(7, 4),
                Position::new(7, 5),
            ],
            direction: Direction::Down,
            controller: Controller::Agent,
            score: 0,
        };
        let food = Position::new(6, 6);
        let grid = stamped_grid(10, &snake, food);

        assert_eq!(decide(&snake, &grid, food), Some(Direction::Down));
    }

    #[test]
    fn test_tail_cell_is_not_treated_as_safe() {
        // The safety filter tests every segment but the head, and the tail
        // is a segment: even though the engine vacates it this tick, the
        // agent refuses to steer onto it. Here Left lands on the tail and
        // Right is the only candidate left.
        let snake = Snake {
            body: vec![
                Position::new(1, 0),
                Position::new(1, 1),
                Position::new(0, 1),
                Position::new(0, 0),
            ],
            direction: Direction::Up,
            controller: Controller::Agent,
            score: 0,
        };
        let food = Position::new(0, 3);
        let grid = stamped_grid(10, &snake, food);

        assert_eq!(decide(&snake, &grid, food), Some(Direction::Right));
    }
}
