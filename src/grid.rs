use crate::error::EngineError;
use crate::{CONNECT, HEIGHT, WIDTH};

/// The contents of a single board cell
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    /// Returns the opposing side, or `None` for `Empty`
    pub fn opponent(self) -> Option<Cell> {
        match self {
            Cell::PlayerOne => Some(Cell::PlayerTwo),
            Cell::PlayerTwo => Some(Cell::PlayerOne),
            Cell::Empty => None,
        }
    }
}

/// The shared game grid
///
/// Row 0 is the top of the board; a piece dropped into a column settles
/// into the lowest empty row of that column.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Grid {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    // scratch-space mutation reserved for the search engine
    pub(crate) fn set(&mut self, row: usize, column: usize, cell: Cell) {
        self.cells[row][column] = cell;
    }

    /// Returns the columns a piece may be dropped into, in ascending order
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..WIDTH)
            .filter(|&column| self.cells[0][column].is_empty())
            .collect()
    }

    /// Returns the row a piece dropped into `column` will settle into
    pub fn drop_row(&self, column: usize) -> Result<usize, EngineError> {
        if column >= WIDTH {
            return Err(EngineError::InvalidColumn(column));
        }
        (0..HEIGHT)
            .rev()
            .find(|&row| self.cells[row][column].is_empty())
            .ok_or(EngineError::ColumnFull(column))
    }

    /// Drops a piece of `side` into `column`, returning the row it settled into
    pub fn play(&mut self, column: usize, side: Cell) -> Result<usize, EngineError> {
        if side.is_empty() {
            return Err(EngineError::EmptySide);
        }
        let row = self.drop_row(column)?;
        self.cells[row][column] = side;
        Ok(row)
    }

    pub fn is_full(&self) -> bool {
        self.legal_columns().is_empty()
    }

    /// Clears every cell back to the starting state
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; WIDTH]; HEIGHT];
    }

    /// Checks whether the piece just placed at (`row`, `column`) completes
    /// a line of four for `side`
    ///
    /// The cell must already hold `side`; calling this on any other cell is
    /// a contract violation and fails rather than silently returning false.
    pub fn wins(&self, row: usize, column: usize, side: Cell) -> Result<bool, EngineError> {
        if row >= HEIGHT || column >= WIDTH {
            return Err(EngineError::OutOfBounds { row, column });
        }
        if side.is_empty() {
            return Err(EngineError::EmptySide);
        }
        if self.cells[row][column] != side {
            return Err(EngineError::SideMismatch { row, column });
        }

        // the "\" diagonal is walked from the top-left end of the line
        let back = row.min(column);
        let diagonal = std::iter::successors(Some((row - back, column - back)), |&(r, c)| {
            if r + 1 < HEIGHT && c + 1 < WIDTH {
                Some((r + 1, c + 1))
            } else {
                None
            }
        });

        // the "/" diagonal is walked from the top-right end of the line
        let back = row.min(WIDTH - 1 - column);
        let anti_diagonal = std::iter::successors(Some((row - back, column + back)), |&(r, c)| {
            if r + 1 < HEIGHT && c > 0 {
                Some((r + 1, c - 1))
            } else {
                None
            }
        });

        Ok(self.has_run(side, (0..WIDTH).map(|c| (row, c)))
            || self.has_run(side, (0..HEIGHT).map(|r| (r, column)))
            || self.has_run(side, diagonal)
            || self.has_run(side, anti_diagonal))
    }

    // scans one full line for a run of CONNECT consecutive `side` cells
    fn has_run(&self, side: Cell, line: impl Iterator<Item = (usize, usize)>) -> bool {
        let mut run = 0;
        for (row, column) in line {
            if self.cells[row][column] == side {
                run += 1;
                if run == CONNECT {
                    return true;
                }
            } else {
                run = 0;
            }
        }
        false
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pieces_settle_at_the_bottom() {
        let mut grid = Grid::new();

        let row = grid.play(3, Cell::PlayerOne).unwrap();
        assert_eq!(row, HEIGHT - 1);
        assert_eq!(grid.get(HEIGHT - 1, 3), Cell::PlayerOne);

        let row = grid.play(3, Cell::PlayerTwo).unwrap();
        assert_eq!(row, HEIGHT - 2);
        assert_eq!(grid.get(HEIGHT - 2, 3), Cell::PlayerTwo);
    }

    #[test]
    fn full_column_rejects_further_drops() {
        let mut grid = Grid::new();
        for _ in 0..HEIGHT {
            grid.play(0, Cell::PlayerOne).unwrap();
        }

        assert_eq!(grid.drop_row(0), Err(EngineError::ColumnFull(0)));
        assert_eq!(grid.play(0, Cell::PlayerTwo), Err(EngineError::ColumnFull(0)));
    }

    #[test]
    fn out_of_range_column_is_rejected() {
        let grid = Grid::new();
        assert_eq!(grid.drop_row(WIDTH), Err(EngineError::InvalidColumn(WIDTH)));
    }

    #[test]
    fn empty_side_cannot_be_played() {
        let mut grid = Grid::new();
        assert_eq!(grid.play(0, Cell::Empty), Err(EngineError::EmptySide));
    }

    #[test]
    fn legal_columns_are_ascending() {
        let mut grid = Grid::new();
        assert_eq!(grid.legal_columns(), (0..WIDTH).collect::<Vec<_>>());

        for _ in 0..HEIGHT {
            grid.play(3, Cell::PlayerOne).unwrap();
        }
        assert_eq!(grid.legal_columns(), vec![0, 1, 2, 4, 5, 6]);
    }

    #[test]
    fn full_board_has_no_legal_columns() {
        let mut grid = Grid::new();
        for column in 0..WIDTH {
            for piece in 0..HEIGHT {
                let side = if (column + piece) % 2 == 0 {
                    Cell::PlayerOne
                } else {
                    Cell::PlayerTwo
                };
                grid.play(column, side).unwrap();
            }
        }
        assert!(grid.is_full());
        assert!(grid.legal_columns().is_empty());
    }

    #[test]
    fn reset_clears_the_board() {
        let mut grid = Grid::new();
        grid.play(2, Cell::PlayerOne).unwrap();
        grid.play(2, Cell::PlayerTwo).unwrap();

        grid.reset();
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn horizontal_win_on_the_bottom_row() {
        let mut grid = Grid::new();
        for column in 0..CONNECT {
            grid.play(column, Cell::PlayerOne).unwrap();
        }

        // every cell of the run sees the same line
        assert!(grid.wins(HEIGHT - 1, 3, Cell::PlayerOne).unwrap());
        assert!(grid.wins(HEIGHT - 1, 0, Cell::PlayerOne).unwrap());
    }

    #[test]
    fn three_in_a_row_is_not_a_win() {
        let mut grid = Grid::new();
        for column in 0..3 {
            grid.play(column, Cell::PlayerOne).unwrap();
        }
        assert!(!grid.wins(HEIGHT - 1, 1, Cell::PlayerOne).unwrap());
    }

    #[test]
    fn vertical_win_in_a_column() {
        let mut grid = Grid::new();
        let mut row = 0;
        for _ in 0..CONNECT {
            row = grid.play(6, Cell::PlayerTwo).unwrap();
        }
        assert!(grid.wins(row, 6, Cell::PlayerTwo).unwrap());
    }

    #[test]
    fn rising_diagonal_win_from_the_corner() {
        let mut grid = Grid::new();
        // supports under the / line (5,0) (4,1) (3,2) (2,3)
        grid.play(0, Cell::PlayerOne).unwrap();
        grid.play(1, Cell::PlayerTwo).unwrap();
        grid.play(1, Cell::PlayerOne).unwrap();
        grid.play(2, Cell::PlayerTwo).unwrap();
        grid.play(2, Cell::PlayerTwo).unwrap();
        grid.play(2, Cell::PlayerOne).unwrap();
        grid.play(3, Cell::PlayerTwo).unwrap();
        grid.play(3, Cell::PlayerTwo).unwrap();
        grid.play(3, Cell::PlayerTwo).unwrap();
        let row = grid.play(3, Cell::PlayerOne).unwrap();

        assert_eq!(row, 2);
        assert!(grid.wins(row, 3, Cell::PlayerOne).unwrap());
        assert!(grid.wins(5, 0, Cell::PlayerOne).unwrap());
    }

    #[test]
    fn falling_diagonal_win_at_the_right_edge() {
        let mut grid = Grid::new();
        // supports under the \ line (2,3) (3,4) (4,5) (5,6)
        grid.play(6, Cell::PlayerOne).unwrap();
        grid.play(5, Cell::PlayerTwo).unwrap();
        grid.play(5, Cell::PlayerOne).unwrap();
        grid.play(4, Cell::PlayerTwo).unwrap();
        grid.play(4, Cell::PlayerTwo).unwrap();
        grid.play(4, Cell::PlayerOne).unwrap();
        grid.play(3, Cell::PlayerTwo).unwrap();
        grid.play(3, Cell::PlayerTwo).unwrap();
        grid.play(3, Cell::PlayerTwo).unwrap();
        let row = grid.play(3, Cell::PlayerOne).unwrap();

        assert_eq!(row, 2);
        assert!(grid.wins(row, 3, Cell::PlayerOne).unwrap());
    }

    #[test]
    fn mid_board_diagonal_win() {
        let mut grid = Grid::new();
        // / line through the middle: (5,2) (4,3) (3,4) (2,5)
        grid.play(2, Cell::PlayerTwo).unwrap();
        grid.play(3, Cell::PlayerOne).unwrap();
        grid.play(3, Cell::PlayerTwo).unwrap();
        grid.play(4, Cell::PlayerOne).unwrap();
        grid.play(4, Cell::PlayerOne).unwrap();
        grid.play(4, Cell::PlayerTwo).unwrap();
        grid.play(5, Cell::PlayerOne).unwrap();
        grid.play(5, Cell::PlayerOne).unwrap();
        grid.play(5, Cell::PlayerOne).unwrap();
        let row = grid.play(5, Cell::PlayerTwo).unwrap();

        assert_eq!(row, 2);
        assert!(grid.wins(row, 5, Cell::PlayerTwo).unwrap());
        assert!(grid.wins(5, 2, Cell::PlayerTwo).unwrap());
    }

    #[test]
    fn wins_rejects_a_mismatched_cell() {
        let mut grid = Grid::new();
        grid.play(0, Cell::PlayerOne).unwrap();

        // empty cell
        assert_eq!(
            grid.wins(0, 0, Cell::PlayerOne),
            Err(EngineError::SideMismatch { row: 0, column: 0 })
        );
        // cell held by the other side
        assert_eq!(
            grid.wins(HEIGHT - 1, 0, Cell::PlayerTwo),
            Err(EngineError::SideMismatch {
                row: HEIGHT - 1,
                column: 0
            })
        );
        // empty is not a side
        assert_eq!(grid.wins(HEIGHT - 1, 0, Cell::Empty), Err(EngineError::EmptySide));
        // out of range coordinates
        assert_eq!(
            grid.wins(HEIGHT, 0, Cell::PlayerOne),
            Err(EngineError::OutOfBounds {
                row: HEIGHT,
                column: 0
            })
        );
    }
}
