mod meta_board;
mod sub_board;

pub use meta_board::*;
pub use sub_board::*;

/// Number of sub-boards, and number of cells in each of them.
pub const NUM_SUB_BOARDS: usize = 9;

/// Rows (and columns) of the global 9x9 grid.
pub const GRID_SIZE: usize = 9;
