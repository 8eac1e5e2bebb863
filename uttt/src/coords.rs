//! Translation between the two ways of addressing a cell.
//!
//! Players name a cell by a 1-based sub-board number and a 1-based cell
//! number within that sub-board, both laid out like a phone keypad:
//!
//! ```text
//!  1 | 2 | 3
//!  4 | 5 | 6
//!  7 | 8 | 9
//! ```
//!
//! The engine works with 0-based `(row, col)` coordinates on the global
//! 9x9 grid.

use serde::{Deserialize, Serialize};

use crate::GRID_SIZE;

/// A cell on the global 9x9 grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Creates a position from a 0-based sub-board index and a 0-based cell
    /// index within it.
    pub fn from_indices(sub_index: usize, cell_index: usize) -> Option<Self> {
        if sub_index >= 9 || cell_index >= 9 {
            return None;
        }
        let (sub_row, sub_col) = (sub_index / 3, sub_index % 3);
        let (cell_row, cell_col) = (cell_index / 3, cell_index % 3);
        Some(Self {
            row: sub_row * 3 + cell_row,
            col: sub_col * 3 + cell_col,
        })
    }

    pub fn sub_index(self) -> usize {
        sub_index_of(self.row, self.col)
    }

    pub fn local(self) -> (usize, usize) {
        local_coords_of(self.row, self.col)
    }

    /// The 0-based index of the cell within its sub-board.
    pub fn cell_index(self) -> usize {
        let (row, col) = self.local();
        row * 3 + col
    }

    /// The 1-based `(sub-board number, cell number)` pair that players use.
    pub fn numbers(self) -> (usize, usize) {
        (self.sub_index() + 1, self.cell_index() + 1)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (sub_board, cell) = self.numbers();
        write!(f, "sub-board {}, cell {}", sub_board, cell)
    }
}

/// Converts a 1-based sub-board number and cell number into global coordinates.
///
/// Returns `None` if either number is outside of `1..=9`.
///
/// ```
/// use uttt::{to_global, Position};
/// assert_eq!(to_global(5, 3), Some(Position::new(3, 5)));
/// assert_eq!(to_global(0, 3), None);
/// ```
pub fn to_global(sub_board_number: usize, cell_number: usize) -> Option<Position> {
    Position::from_indices(sub_board_number.checked_sub(1)?, cell_number.checked_sub(1)?)
}

/// The 0-based index of the sub-board containing a global cell.
pub fn sub_index_of(row: usize, col: usize) -> usize {
    (row / 3) * 3 + (col / 3)
}

/// The coordinates of a global cell within its sub-board.
pub fn local_coords_of(row: usize, col: usize) -> (usize, usize) {
    (row % 3, col % 3)
}
