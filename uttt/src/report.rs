use serde::{Deserialize, Serialize};

use crate::{Player, Seats};

/// How a finished game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameResult {
    Won { winner: Player },
    Drawn,
}

/// What a finished game reports to the outside world, e.g. to a rating system.
///
/// The engine never touches any rating or match-history data itself; it
/// only hands out this value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    /// Who played X and who played O.
    pub players: Seats<String>,
    pub result: GameResult,
}

impl GameResult {
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Won { winner } => Some(winner),
            GameResult::Drawn => None,
        }
    }
}

impl GameReport {
    pub fn winner_name(&self) -> Option<&str> {
        self.result
            .winner()
            .map(|player| self.players[player].as_str())
    }

    /// The result from X's point of view: `1.0` if X won, `0.0` if O won.
    ///
    /// Draws have no score.
    pub fn score(&self) -> Option<f64> {
        self.result.winner().map(|winner| match winner {
            Player::X => 1.0,
            Player::O => 0.0,
        })
    }
}
