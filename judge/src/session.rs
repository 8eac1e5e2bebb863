use std::io::{BufRead, Write};

use rand::Rng;
use tracing::{debug, info};
use uttt::Seats;

use crate::game::{play_game, GameOutcome};
use crate::input::{parse_session_command, SessionCommand};
use crate::ledger::{MatchLedger, MatchRecord};
use crate::player::Roster;
use crate::Config;

/// Running totals of one session, counted per person rather than per side.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SessionScore {
    pub games: usize,
    pub wins: [usize; 2],
    pub draws: usize,
}

/// Plays up to `config.num_games` games between two people, rating every
/// decisive game.
///
/// Between games the players can continue, undo or redo the rating change
/// of the last match, or quit. An abandoned game ends the session without
/// touching any rating.
pub fn run_session<R: BufRead, W: Write>(
    config: &mut Config,
    names: [&str; 2],
    roster: &mut Roster,
    ledger: &mut MatchLedger,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<SessionScore> {
    if names[0] == names[1] {
        anyhow::bail!("Players must be different");
    }
    for name in names {
        roster.register(name);
    }

    let mut score = SessionScore::default();
    for game_idx in 0..config.num_games {
        let mut seat_idx = Seats::new(0, 1);
        if config.swap_sides && config.rng.gen::<bool>() {
            seat_idx = seat_idx.swapped();
        }
        let players = seat_idx.map(|idx| String::from(names[idx]));
        info!(game_idx, x = &players.x, o = &players.o, "New game");
        writeln!(
            output,
            "\nGame {}: {} plays X, {} plays O",
            game_idx + 1,
            players.x,
            players.o
        )?;

        let report = match play_game(&players, input, output, &mut config.recorder)? {
            GameOutcome::Finished(report) => report,
            GameOutcome::Abandoned => {
                writeln!(output, "Game abandoned, ratings are unchanged.")?;
                break;
            }
        };
        score.games += 1;
        match report.result.winner() {
            Some(winner) => score.wins[seat_idx[winner]] += 1,
            None => score.draws += 1,
        }
        if let Some(record) = ledger.apply(roster, &report)? {
            print_rating_change(output, "Ratings updated", &record)?;
        }

        let is_last_game = game_idx + 1 == config.num_games;
        if !between_games(roster, ledger, input, output, is_last_game)? {
            break;
        }
    }
    Ok(score)
}

/// Returns whether the session should go on.
fn between_games<R: BufRead, W: Write>(
    roster: &mut Roster,
    ledger: &mut MatchLedger,
    input: &mut R,
    output: &mut W,
    is_last_game: bool,
) -> anyhow::Result<bool> {
    let mut line = String::new();
    loop {
        if is_last_game {
            write!(output, "[Enter] finish, [undo]/[redo] last match > ")?;
        } else {
            write!(output, "[Enter] next game, [undo]/[redo] last match, [quit] > ")?;
        }
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        match parse_session_command(&line) {
            Some(SessionCommand::Continue) => return Ok(!is_last_game),
            Some(SessionCommand::Quit) => return Ok(false),
            Some(SessionCommand::UndoMatch) => match ledger.undo_last_match(roster)? {
                Some(record) => {
                    debug!(x = &record.players.x, o = &record.players.o, "Match undone");
                    print_rating_change(output, "Undid last match", &record.reversed())?;
                }
                None => writeln!(output, "No match to undo.")?,
            },
            Some(SessionCommand::RedoMatch) => match ledger.redo_last_match(roster)? {
                Some(record) => {
                    debug!(x = &record.players.x, o = &record.players.o, "Match redone");
                    print_rating_change(output, "Redid last match", &record)?;
                }
                None => writeln!(output, "No match to redo.")?,
            },
            None => writeln!(output, "Unknown command: '{}'", line.trim())?,
        }
    }
}

fn print_rating_change<W: Write>(
    output: &mut W,
    heading: &str,
    record: &MatchRecord,
) -> anyhow::Result<()> {
    writeln!(output, "{}:", heading)?;
    for player in uttt::Player::ALL {
        writeln!(
            output,
            "- {}: {} -> {}",
            record.players[player],
            record.old_ratings[player].round(),
            record.new_ratings[player].round()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::game::tests::X_WINS;
    use crate::player::DEFAULT_RATING;

    fn config(num_games: usize) -> Config {
        Config {
            rng: StdRng::seed_from_u64(7),
            recorder: None,
            num_games,
            swap_sides: false,
        }
    }

    fn run(
        num_games: usize,
        script: &str,
        roster: &mut Roster,
    ) -> (SessionScore, MatchLedger, String) {
        let mut ledger = MatchLedger::new();
        let mut input = Cursor::new(script.as_bytes());
        let mut output = Vec::new();
        let score = run_session(
            &mut config(num_games),
            ["alice", "bob"],
            roster,
            &mut ledger,
            &mut input,
            &mut output,
        )
        .unwrap();
        (score, ledger, String::from_utf8(output).unwrap())
    }

    #[test]
    fn won_game_is_rated() {
        let mut roster = Roster::new();
        let (score, ledger, text) = run(1, &format!("{}\n", X_WINS), &mut roster);
        assert_eq!(
            score,
            SessionScore {
                games: 1,
                wins: [1, 0],
                draws: 0
            }
        );
        assert_eq!(ledger.history().len(), 1);
        assert!(roster.get("alice").unwrap().rating > DEFAULT_RATING);
        assert!(roster.get("bob").unwrap().rating < DEFAULT_RATING);
        assert!(text.contains("Ratings updated:\n- alice: 2500 -> 2511"));
    }

    #[test]
    fn undo_match_restores_ratings() {
        let mut roster = Roster::new();
        let script = format!("{}undo\nundo\n\n", X_WINS);
        let (score, ledger, text) = run(1, &script, &mut roster);
        assert_eq!(score.games, 1);
        assert!(ledger.history().is_empty());
        assert_eq!(roster.get("alice").unwrap().rating, DEFAULT_RATING);
        assert!(text.contains("Undid last match:\n- alice: 2511 -> 2500"));
        assert!(text.contains("No match to undo."));
    }

    #[test]
    fn abandoned_game_is_not_rated() {
        let mut roster = Roster::new();
        let (score, ledger, text) = run(3, "5 5\nquit\n", &mut roster);
        assert_eq!(score, SessionScore::default());
        assert!(ledger.history().is_empty());
        assert_eq!(roster.get("bob").unwrap().rating, DEFAULT_RATING);
        assert!(text.contains("Game abandoned, ratings are unchanged."));
    }

    #[test]
    fn same_player_twice_is_rejected() {
        let mut roster = Roster::new();
        let mut input = Cursor::new(&b""[..]);
        let result = run_session(
            &mut config(1),
            ["alice", "alice"],
            &mut roster,
            &mut MatchLedger::new(),
            &mut input,
            &mut Vec::<u8>::new(),
        );
        assert!(result.is_err());
        assert!(roster.is_empty());
    }
}
