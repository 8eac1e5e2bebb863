pub use board::*;
pub use cell_set::*;
pub use coords::*;
pub use engine::*;
pub use errors::*;
pub use player::*;
pub use report::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod bitset;
mod board;
mod cell_set;
mod coords;
mod engine;
mod errors;
mod player;
mod report;
mod visualization;
