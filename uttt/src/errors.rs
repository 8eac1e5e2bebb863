/// The error type for [`Engine::play()`](crate::Engine::play), i.e. for
/// a move that is not allowed in the current position.
///
/// Rejecting a move never changes the engine, so all of these are
/// recoverable: the caller can simply ask for another move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    OutOfBounds,
    CellOccupied,
    SubBoardClosed { sub_index: usize },
    WrongSubBoard { required: usize, played: usize },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::OutOfBounds => write!(f, "The move lies outside of the board"),
            IllegalMove::CellOccupied => write!(f, "The chosen cell is already occupied"),
            IllegalMove::SubBoardClosed { sub_index } => write!(
                f,
                "Sub-board {} is already completed",
                sub_index + 1
            ),
            IllegalMove::WrongSubBoard { required, played } => write!(
                f,
                "The move must be played in sub-board {}, not {}",
                required + 1,
                played + 1
            ),
        }
    }
}
