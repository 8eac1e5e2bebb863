use crate::{Engine, GameStatus};

/// Draws the 9x9 grid as text.
///
/// Empty cells show the number a player would type to play there, so the
/// picture doubles as a reference for the cell numbering.
pub fn visualize_board(engine: &Engine) -> String {
    let mut result = String::from("╭───────┬───────┬───────╮\n");
    for row_block in 0..3 {
        for row in 0..3 {
            result += "│";
            for col_block in 0..3 {
                let board = &engine.sub_boards()[row_block * 3 + col_block];
                for col in 0..3 {
                    let label = match board.get(row, col) {
                        Some(player) => player.symbol(),
                        None => char::from(b'1' + (row * 3 + col) as u8),
                    };
                    result.push(' ');
                    result.push(label);
                }
                result += " │";
            }
            result.push('\n');
        }
        if row_block < 2 {
            result += "├───────┼───────┼───────┤\n";
        }
    }
    result += "╰───────┴───────┴───────╯";
    result
}

/// One line describing whose turn it is and where they may play, or how
/// the game ended.
pub fn describe_status(engine: &Engine) -> String {
    match engine.status() {
        GameStatus::Won(player) => format!("Player {} wins the game", player),
        GameStatus::Drawn => String::from("The game is a draw"),
        GameStatus::InProgress => match engine.forced_board() {
            Some(idx) => format!(
                "Player {} to move in sub-board {}",
                engine.current_player(),
                idx + 1
            ),
            None => format!(
                "Player {} to move in any open sub-board",
                engine.current_player()
            ),
        },
    }
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", visualize_board(self), describe_status(self))
    }
}
