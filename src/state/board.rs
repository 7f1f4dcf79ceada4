//! Board occupancy and win detection.
//!
//! The board answers two queries: where a dropped piece lands in a column,
//! and whether a seat currently holds four in a row. Cells hold
//! `Option<Seat>`; each row is allocated independently, so mutating one row
//! never touches another.

use std::fmt;

use super::player::Seat;

/// Run length required to win.
pub const WIN_LENGTH: usize = 4;

/// Board errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Column index outside `[0, width)`, a caller contract violation.
    ColumnOutOfRange { column: usize, width: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnOutOfRange { column, width } => {
                write!(f, "column {} is outside the board (width {})", column, width)
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Occupancy grid. Row 0 is the top; row `height - 1` is the bottom.
///
/// Dimensions are fixed for the lifetime of a game and must be at least
/// [`WIN_LENGTH`] in both directions for the win geometry to make sense;
/// `GameConfig::validate` enforces this before a board is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Vec<Option<Seat>>>,
}

impl Board {
    /// Create an empty board.
    pub fn new(width: usize, height: usize) -> Self {
        let cells = (0..height).map(|_| vec![None; width]).collect();
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Occupancy of the cell at `(row, column)`. Coordinates must be in
    /// bounds.
    pub fn cell(&self, row: usize, column: usize) -> Option<Seat> {
        self.cells[row][column]
    }

    /// Lowest empty row in `column`, or `None` if the column is full.
    ///
    /// Scans from the bottom row upward. A full column is a normal outcome,
    /// not an error; an out-of-range column is a contract violation from the
    /// click boundary.
    pub fn landing_row(&self, column: usize) -> Result<Option<usize>, BoardError> {
        if column >= self.width {
            return Err(BoardError::ColumnOutOfRange {
                column,
                width: self.width,
            });
        }

        Ok((0..self.height)
            .rev()
            .find(|&row| self.cells[row][column].is_none()))
    }

    /// Write `seat` into `(row, column)`.
    ///
    /// The caller must have obtained `row` from [`Board::landing_row`] in
    /// the same turn; no re-validation happens here.
    pub fn place(&mut self, row: usize, column: usize, seat: Seat) {
        self.cells[row][column] = Some(seat);
    }

    /// Check whether `seat` holds four in a row anywhere on the board.
    ///
    /// Row-major scan; every cell anchors four candidate windows
    /// (horizontal, vertical, and both diagonals). Returns on the first
    /// window whose four coordinates are all in bounds and all held by
    /// `seat`.
    pub fn has_four_in_a_row(&self, seat: Seat) -> bool {
        for y in 0..self.height {
            for x in 0..self.width {
                let (y, x) = (y as isize, x as isize);

                let horiz = [(y, x), (y, x + 1), (y, x + 2), (y, x + 3)];
                let vert = [(y, x), (y + 1, x), (y + 2, x), (y + 3, x)];
                let diag_dr = [(y, x), (y + 1, x + 1), (y + 2, x + 2), (y + 3, x + 3)];
                let diag_dl = [(y, x), (y + 1, x - 1), (y + 2, x - 2), (y + 3, x - 3)];

                if self.window_held(seat, horiz)
                    || self.window_held(seat, vert)
                    || self.window_held(seat, diag_dr)
                    || self.window_held(seat, diag_dl)
                {
                    return true;
                }
            }
        }

        false
    }

    /// All four window cells in bounds and held by `seat`.
    fn window_held(&self, seat: Seat, window: [(isize, isize); 4]) -> bool {
        window.iter().all(|&(row, col)| {
            row >= 0
                && (row as usize) < self.height
                && col >= 0
                && (col as usize) < self.width
                && self.cells[row as usize][col as usize] == Some(seat)
        })
    }

    /// Tie condition: every cell in the top row is occupied. Under gravity
    /// placement a full top row implies a full grid.
    pub fn is_top_row_full(&self) -> bool {
        self.cells[0].iter().all(|cell| cell.is_some())
    }

    /// Convert the grid to JSON: rows of seat names or null.
    pub fn to_json(&self) -> serde_json::Value {
        let rows: Vec<serde_json::Value> = self
            .cells
            .iter()
            .map(|row| {
                let cells: Vec<serde_json::Value> = row
                    .iter()
                    .map(|cell| match cell {
                        Some(seat) => serde_json::json!(seat.as_str()),
                        None => serde_json::Value::Null,
                    })
                    .collect();
                serde_json::Value::Array(cells)
            })
            .collect();
        serde_json::Value::Array(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(7, 6);
        assert_eq!(board.width(), 7);
        assert_eq!(board.height(), 6);

        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(board.cell(row, col), None);
            }
        }
    }

    #[test]
    fn test_rows_are_independent() {
        let mut board = Board::new(7, 6);
        board.place(5, 0, Seat::First);

        for row in 0..5 {
            for col in 0..7 {
                assert_eq!(board.cell(row, col), None);
            }
        }
        for col in 1..7 {
            assert_eq!(board.cell(5, col), None);
        }
        assert_eq!(board.cell(5, 0), Some(Seat::First));
    }

    #[test]
    fn test_landing_row_descends_as_column_fills() {
        let mut board = Board::new(7, 6);
        assert_eq!(board.landing_row(0), Ok(Some(5)));

        board.place(5, 0, Seat::First);
        assert_eq!(board.landing_row(0), Ok(Some(4)));
    }

    #[test]
    fn test_landing_row_full_column() {
        let mut board = Board::new(7, 6);
        for row in 0..6 {
            board.place(row, 1, Seat::First);
        }

        assert_eq!(board.landing_row(1), Ok(None));
    }

    #[test]
    fn test_landing_row_out_of_range() {
        let board = Board::new(7, 6);
        assert_eq!(
            board.landing_row(7),
            Err(BoardError::ColumnOutOfRange {
                column: 7,
                width: 7
            })
        );
    }

    #[test]
    fn test_no_win_on_empty_board() {
        let board = Board::new(7, 6);
        assert!(!board.has_four_in_a_row(Seat::First));
        assert!(!board.has_four_in_a_row(Seat::Second));
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new(7, 6);
        for col in 1..5 {
            board.place(0, col, Seat::First);
        }

        assert!(board.has_four_in_a_row(Seat::First));
        assert!(!board.has_four_in_a_row(Seat::Second));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new(7, 6);
        for row in 1..5 {
            board.place(row, 0, Seat::First);
        }

        assert!(board.has_four_in_a_row(Seat::First));
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let mut board = Board::new(7, 6);
        for i in 1..5 {
            board.place(i, i, Seat::First);
        }

        assert!(board.has_four_in_a_row(Seat::First));
    }

    #[test]
    fn test_diagonal_down_left_win() {
        let mut board = Board::new(7, 6);
        for i in 1..5 {
            board.place(i, 5 - i, Seat::Second);
        }

        assert!(board.has_four_in_a_row(Seat::Second));
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let mut board = Board::new(7, 6);
        for col in 0..3 {
            board.place(5, col, Seat::First);
        }

        assert!(!board.has_four_in_a_row(Seat::First));
    }

    #[test]
    fn test_top_row_full() {
        let mut board = Board::new(7, 6);
        assert!(!board.is_top_row_full());

        for col in 0..7 {
            board.place(0, col, Seat::First);
        }
        assert!(board.is_top_row_full());
    }

    #[test]
    fn test_to_json() {
        let mut board = Board::new(4, 4);
        board.place(3, 0, Seat::First);
        board.place(3, 1, Seat::Second);

        let json = board.to_json();
        assert_eq!(
            json,
            serde_json::json!([
                [null, null, null, null],
                [null, null, null, null],
                [null, null, null, null],
                ["first", "second", null, null],
            ])
        );
    }
}
