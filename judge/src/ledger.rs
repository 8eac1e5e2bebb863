use serde::{Deserialize, Serialize};
use tracing::info;
use uttt::{GameReport, Seats};

use crate::player::Roster;
use crate::rating::update_ratings;

/// The rating change caused by one decisive game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Who played X and who played O.
    pub players: Seats<String>,
    pub old_ratings: Seats<f64>,
    pub new_ratings: Seats<f64>,
}

impl MatchRecord {
    /// The same change, going the other way.
    pub fn reversed(&self) -> Self {
        Self {
            players: self.players.clone(),
            old_ratings: self.new_ratings,
            new_ratings: self.old_ratings,
        }
    }
}

/// Keeps track of applied matches, so that their rating changes can be
/// taken back and applied again.
#[derive(Clone, Debug, Default)]
pub struct MatchLedger {
    history: Vec<MatchRecord>,
    redo_stack: Vec<MatchRecord>,
}

impl MatchLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[MatchRecord] {
        &self.history
    }

    /// Updates the ratings of both players according to a finished game.
    ///
    /// Draws leave the ratings alone and return `Ok(None)`. Applying a
    /// match discards anything that could have been redone.
    pub fn apply(
        &mut self,
        roster: &mut Roster,
        report: &GameReport,
    ) -> anyhow::Result<Option<MatchRecord>> {
        let Some(score) = report.score() else {
            return Ok(None);
        };
        let (Some(x), Some(o)) = (
            roster.get(&report.players.x),
            roster.get(&report.players.o),
        ) else {
            anyhow::bail!("Both players must be registered before their game can be rated");
        };

        let old_ratings = Seats::new(x.rating, o.rating);
        let new_ratings = update_ratings(Seats::new(x, o), score);
        let record = MatchRecord {
            players: report.players.clone(),
            old_ratings,
            new_ratings,
        };
        set_ratings(roster, &record.players, record.new_ratings)?;
        info!(
            x = &record.players.x,
            o = &record.players.o,
            new_x = record.new_ratings.x,
            new_o = record.new_ratings.o,
            "Ratings updated"
        );

        self.history.push(record.clone());
        self.redo_stack.clear();
        Ok(Some(record))
    }

    /// Restores the ratings from before the last applied match.
    pub fn undo_last_match(&mut self, roster: &mut Roster) -> anyhow::Result<Option<MatchRecord>> {
        let Some(record) = self.history.pop() else {
            return Ok(None);
        };
        if let Err(err) = set_ratings(roster, &record.players, record.old_ratings) {
            self.history.push(record);
            return Err(err);
        }
        self.redo_stack.push(record.clone());
        Ok(Some(record))
    }

    /// Applies the last undone match again.
    pub fn redo_last_match(&mut self, roster: &mut Roster) -> anyhow::Result<Option<MatchRecord>> {
        let Some(record) = self.redo_stack.pop() else {
            return Ok(None);
        };
        if let Err(err) = set_ratings(roster, &record.players, record.new_ratings) {
            self.redo_stack.push(record);
            return Err(err);
        }
        self.history.push(record.clone());
        Ok(Some(record))
    }
}

fn set_ratings(
    roster: &mut Roster,
    players: &Seats<String>,
    ratings: Seats<f64>,
) -> anyhow::Result<()> {
    for name in [&players.x, &players.o] {
        if roster.get(name).is_none() {
            anyhow::bail!("Player '{}' not found", name);
        }
    }
    for player in uttt::Player::ALL {
        if let Some(profile) = roster.get_mut(&players[player]) {
            profile.rating = ratings[player];
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use uttt::{GameResult, Player};

    use super::*;
    use crate::player::PlayerProfile;

    fn setup() -> (Roster, GameReport) {
        let mut roster = Roster::new();
        roster.register("alice");
        roster.register("bob");
        let report = GameReport {
            players: Seats::new(String::from("alice"), String::from("bob")),
            result: GameResult::Won { winner: Player::X },
        };
        (roster, report)
    }

    #[test]
    fn apply_undo_redo() {
        let (mut roster, report) = setup();
        let mut ledger = MatchLedger::new();
        let original = roster.clone();

        let record = ledger.apply(&mut roster, &report).unwrap().unwrap();
        assert!(roster.get("alice").unwrap().rating > 2500.0);
        assert_eq!(record.old_ratings, Seats::new(2500.0, 2500.0));
        let after_game = roster.clone();

        assert!(ledger.undo_last_match(&mut roster).unwrap().is_some());
        assert_eq!(roster, original);
        assert!(ledger.undo_last_match(&mut roster).unwrap().is_none());

        assert!(ledger.redo_last_match(&mut roster).unwrap().is_some());
        assert_eq!(roster, after_game);
        assert!(ledger.redo_last_match(&mut roster).unwrap().is_none());
    }

    #[test]
    fn new_match_clears_redo() {
        let (mut roster, report) = setup();
        let mut ledger = MatchLedger::new();
        ledger.apply(&mut roster, &report).unwrap();
        ledger.undo_last_match(&mut roster).unwrap();
        ledger.apply(&mut roster, &report).unwrap();
        assert!(ledger.redo_last_match(&mut roster).unwrap().is_none());
        assert_eq!(ledger.history().len(), 1);
    }

    #[test]
    fn draws_are_not_rated() {
        let (mut roster, mut report) = setup();
        report.result = GameResult::Drawn;
        let mut ledger = MatchLedger::new();
        let before = roster.clone();
        assert!(ledger.apply(&mut roster, &report).unwrap().is_none());
        assert_eq!(roster, before);
        assert!(ledger.history().is_empty());
    }

    #[test]
    fn unknown_player_is_an_error() {
        let mut roster = Roster::new();
        roster.insert(PlayerProfile::with_defaults("alice"));
        let (_, report) = setup();
        let mut ledger = MatchLedger::new();
        assert!(ledger.apply(&mut roster, &report).is_err());
        assert!(ledger.history().is_empty());
    }
}
