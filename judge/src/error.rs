/// Error type for a line of input that is not a command.
///
/// These never reach the engine; the player is simply asked again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Empty,
    WrongArity { found: usize },
    NotANumber { token: String },
    OutOfRange { number: usize },
}

impl std::error::Error for InputError {}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Empty => write!(f, "Please enter a move"),
            InputError::WrongArity { found } => write!(
                f,
                "Expected two numbers separated by a space, but got {} value(s)",
                found
            ),
            InputError::NotANumber { token } => write!(f, "'{}' is not a number", token),
            InputError::OutOfRange { number } => {
                write!(f, "{} is out of range, please enter numbers between 1 and 9", number)
            }
        }
    }
}
