use crate::error::InputError;

/// Something the player to move can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A 1-based sub-board number and cell number, both in `1..=9`.
    Move { sub_board: usize, cell: usize },
    Undo,
    Quit,
}

/// What to do between two games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Continue,
    UndoMatch,
    RedoMatch,
    Quit,
}

/// Parses one line typed by a player, e.g. `"5 3"` or `"undo"`.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim().to_lowercase();
    match line.as_str() {
        "" => return Err(InputError::Empty),
        "undo" | "u" => return Ok(Command::Undo),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [sub_board, cell] = tokens.as_slice() else {
        return Err(InputError::WrongArity {
            found: tokens.len(),
        });
    };
    Ok(Command::Move {
        sub_board: parse_number(sub_board)?,
        cell: parse_number(cell)?,
    })
}

fn parse_number(token: &str) -> Result<usize, InputError> {
    let number: usize = token.parse().map_err(|_| InputError::NotANumber {
        token: String::from(token),
    })?;
    if (1..=9).contains(&number) {
        Ok(number)
    } else {
        Err(InputError::OutOfRange { number })
    }
}

/// Parses the answer to the prompt shown after a game.
///
/// Anything that is not recognized counts as `None`, so the caller can ask again.
pub fn parse_session_command(line: &str) -> Option<SessionCommand> {
    match line.trim().to_lowercase().as_str() {
        "" | "n" | "next" => Some(SessionCommand::Continue),
        "undo" | "u" => Some(SessionCommand::UndoMatch),
        "redo" | "r" => Some(SessionCommand::RedoMatch),
        "quit" | "q" | "exit" => Some(SessionCommand::Quit),
        _ => None,
    }
}
