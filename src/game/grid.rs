use super::state::Position;

/// What currently occupies a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Snake,
    Food,
}

/// Square matrix of cell states, addressed by `Position`.
///
/// The grid is the authoritative collision surface: the step engine stamps
/// every snake segment into it and reads it back when testing a new head
/// position, so one lookup covers self-collision and collision with any
/// other snake.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid of `size` x `size` empty cells
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellState::Empty; size * size],
        }
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if a position is within the grid bounds
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.size as i32 && pos.y >= 0 && pos.y < self.size as i32
    }

    /// State of the cell at `pos`. Callers must bounds-check first.
    pub fn get(&self, pos: Position) -> CellState {
        self.cells[self.index(pos)]
    }

    /// Overwrite the cell at `pos`. Callers must bounds-check first.
    pub fn set(&mut self, pos: Position, state: CellState) {
        let index = self.index(pos);
        self.cells[index] = state;
    }

    /// True while at least one cell is unoccupied
    pub fn has_empty(&self) -> bool {
        self.cells.iter().any(|cell| *cell == CellState::Empty)
    }

    /// Number of unoccupied cells
    pub fn empty_cells(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == CellState::Empty)
            .count()
    }

    fn index(&self, pos: Position) -> usize {
        debug_assert!(self.contains(pos));
        pos.y as usize * self.size + pos.x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(10);
        assert_eq!(grid.size(), 10);
        assert_eq!(grid.empty_cells(), 100);
        assert_eq!(grid.get(Position::new(0, 0)), CellState::Empty);
        assert_eq!(grid.get(Position::new(9, 9)), CellState::Empty);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(10);
        grid.set(Position::new(3, 7), CellState::Snake);
        grid.set(Position::new(5, 5), CellState::Food);

        assert_eq!(grid.get(Position::new(3, 7)), CellState::Snake);
        assert_eq!(grid.get(Position::new(5, 5)), CellState::Food);
        assert_eq!(grid.get(Position::new(7, 3)), CellState::Empty);
        assert_eq!(grid.empty_cells(), 98);
    }

    #[test]
    fn test_bounds() {
        let grid = Grid::new(10);
        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(9, 9)));
        assert!(!grid.contains(Position::new(-1, 0)));
        assert!(!grid.contains(Position::new(0, -1)));
        assert!(!grid.contains(Position::new(10, 0)));
        assert!(!grid.contains(Position::new(0, 10)));
    }

    #[test]
    fn test_has_empty() {
        let mut grid = Grid::new(2);
        assert!(grid.has_empty());

        for x in 0..2 {
            for y in 0..2 {
                grid.set(Position::new(x, y), CellState::Snake);
            }
        }
        assert!(!grid.has_empty());
        assert_eq!(grid.empty_cells(), 0);

        grid.set(Position::new(1, 1), CellState::Empty);
        assert!(grid.has_empty());
    }
}
