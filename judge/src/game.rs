use std::io::{BufRead, Write};

use tracing::{debug, info, warn};
use uttt::{
    describe_status, to_global, visualize_board, Engine, GameReport, GameResult, Seats,
};

use crate::input::{parse_command, Command};
use crate::recording::Recorder;

pub enum GameOutcome {
    Finished(GameReport),
    /// The players quit, or the input ended, before the game was decided.
    Abandoned,
}

/// Plays one game between two people taking turns at the same input.
///
/// Returns an error only on I/O failure, not when an illegal move or
/// malformed input is entered; those are explained and the player is
/// asked again.
pub fn play_game<R: BufRead, W: Write>(
    players: &Seats<String>,
    input: &mut R,
    output: &mut W,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<GameOutcome> {
    let mut engine = Engine::new();
    if let Some(rec) = recorder {
        rec.start_game(players);
    }
    writeln!(
        output,
        "Enter your move as: sub-board (1-9) and cell (1-9), or type 'undo'"
    )?;

    let mut line = String::new();
    loop {
        writeln!(output, "\n{}", visualize_board(&engine))?;

        if let Some(report) = engine.report(players.clone()) {
            match report.result {
                GameResult::Won { winner } => {
                    writeln!(output, "Player {} ({}) wins the game!", winner, players[winner])?
                }
                GameResult::Drawn => writeln!(output, "The game is a draw.")?,
            }
            info!(result = ?report.result, moves = engine.history().len(), "Game finished");
            if let Some(rec) = recorder {
                rec.write_game_recording(Some(report.result))?;
            }
            return Ok(GameOutcome::Finished(report));
        }

        let player = engine.current_player();
        writeln!(output, "{} ({}).", describe_status(&engine), players[player])?;
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("Input ended, abandoning the game");
            return abandon(recorder);
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "Invalid input: {}", err)?;
                continue;
            }
        };
        match command {
            Command::Quit => {
                info!("Game abandoned");
                return abandon(recorder);
            }
            Command::Undo => match engine.undo() {
                Some(record) => {
                    debug!(player = %record.player, position = %record.position(), "Undo");
                    if let Some(rec) = recorder {
                        rec.store_undo(&record);
                    }
                    writeln!(output, "Undid move by player {}", record.player)?;
                }
                None => writeln!(output, "No moves to undo.")?,
            },
            Command::Move { sub_board, cell } => {
                let Some(pos) = to_global(sub_board, cell) else {
                    writeln!(output, "Please enter numbers between 1 and 9.")?;
                    continue;
                };
                match engine.play(pos) {
                    Ok(outcome) => {
                        debug!(
                            player = %player,
                            sub_board,
                            cell,
                            won_sub_board = outcome.won_sub_board,
                            "Move"
                        );
                        if let Some(rec) = recorder {
                            rec.store_move(&outcome.record);
                        }
                    }
                    Err(err) => {
                        warn!(player = %player, sub_board, cell, %err, "Illegal move");
                        writeln!(output, "Invalid move: {}.", err)?;
                    }
                }
            }
        }
    }
}

fn abandon(recorder: &mut Option<Recorder>) -> anyhow::Result<GameOutcome> {
    if let Some(rec) = recorder {
        rec.write_game_recording(None)?;
    }
    Ok(GameOutcome::Abandoned)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Cursor;

    use uttt::Player;

    use super::*;

    /// X takes sub-boards 1, 2 and 3 while O keeps sending X back.
    pub(crate) const X_WINS: &str = concat!(
        "1 4\n4 1\n1 5\n5 1\n1 6\n6 2\n",
        "2 4\n4 2\n2 5\n5 2\n2 6\n6 3\n",
        "3 4\n4 3\n3 5\n5 3\n3 6\n",
    );

    fn players() -> Seats<String> {
        Seats::new(String::from("alice"), String::from("bob"))
    }

    fn run(script: &str) -> (GameOutcome, String) {
        let mut input = Cursor::new(script.as_bytes());
        let mut output = Vec::new();
        let outcome = play_game(&players(), &mut input, &mut output, &mut None).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn scripted_win() {
        let (outcome, text) = run(X_WINS);
        let GameOutcome::Finished(report) = outcome else {
            panic!("game was not finished");
        };
        assert_eq!(report.result, GameResult::Won { winner: Player::X });
        assert_eq!(report.winner_name(), Some("alice"));
        assert!(text.contains("Player X (alice) wins the game!"));
    }

    #[test]
    fn mistakes_are_explained_and_retried() {
        let (outcome, text) = run("hello\n0 3\nundo\n5 3\n4 1\n5 3\nquit\n");
        assert!(matches!(outcome, GameOutcome::Abandoned));
        assert!(text.contains("Invalid input: Expected two numbers"));
        assert!(text.contains("Invalid input: 0 is out of range"));
        assert!(text.contains("No moves to undo."));
        assert!(text.contains("Invalid move: The move must be played in sub-board 3, not 4."));
        assert!(text.contains("Invalid move: The chosen cell is already occupied."));
    }

    #[test]
    fn undo_gives_the_turn_back() {
        let (_, text) = run("5 3\nundo\n");
        assert!(text.contains("Undid move by player X"));
        let last_status = text
            .lines()
            .filter(|line| line.starts_with("Player"))
            .last()
            .unwrap();
        assert_eq!(last_status, "Player X to move in any open sub-board (alice).");
    }

    #[test]
    fn end_of_input_abandons() {
        let (outcome, _) = run("5 5\n");
        assert!(matches!(outcome, GameOutcome::Abandoned));
    }
}
