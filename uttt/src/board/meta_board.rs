use crate::{CellSet, Player, Seats, WIN_LINES};

/// The "board of boards": which player has won which sub-board.
///
/// An entry stays empty for a sub-board that filled up without a winner,
/// so such a board counts for neither side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MetaBoard {
    won: Seats<CellSet>,
}

impl MetaBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, sub_index: usize) -> Option<Player> {
        Player::ALL
            .into_iter()
            .find(|&player| self.won[player].contains(sub_index))
    }

    /// The sub-boards won by one player.
    pub fn won_by(&self, player: Player) -> CellSet {
        self.won[player]
    }

    /// Marks a sub-board as won. Does nothing if the entry is already set.
    pub fn record_result(&mut self, sub_index: usize, player: Player) {
        if sub_index < 9 && self.get(sub_index).is_none() {
            self.won[player] = self.won[player].insert(sub_index);
        }
    }

    /// The player with three won sub-boards in a row, if any.
    ///
    /// Lines are checked in the order of [`WIN_LINES`], X before O on each
    /// line, so the earliest completed line decides.
    pub fn check_win(&self) -> Option<Player> {
        WIN_LINES.iter().find_map(|&line| {
            Player::ALL
                .into_iter()
                .find(|&player| self.won[player] & line == line)
        })
    }

    /// Overwrites an entry, used when undoing a move.
    pub(crate) fn set_entry(&mut self, sub_index: usize, entry: Option<Player>) {
        if sub_index >= 9 {
            return;
        }
        self.won.x = self.won.x.remove(sub_index);
        self.won.o = self.won.o.remove(sub_index);
        if let Some(player) = entry {
            self.won[player] = self.won[player].insert(sub_index);
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    quickcheck! {
        fn first_result_sticks(first: Player, second: Player, sub_index: usize) -> bool {
            let sub_index = sub_index % 9;
            let mut meta = MetaBoard::new();
            meta.record_result(sub_index, first);
            meta.record_result(sub_index, second);
            meta.get(sub_index) == Some(first) && meta.check_win().is_none()
        }
    }

    #[test]
    fn three_in_a_row_wins() {
        let mut meta = MetaBoard::new();
        meta.record_result(0, Player::X);
        meta.record_result(1, Player::X);
        assert_eq!(meta.check_win(), None);
        meta.record_result(2, Player::X);
        assert_eq!(meta.check_win(), Some(Player::X));
    }

    #[test]
    fn record_result_is_write_once() {
        let mut meta = MetaBoard::new();
        meta.record_result(4, Player::O);
        meta.record_result(4, Player::X);
        assert_eq!(meta.get(4), Some(Player::O));
        assert_eq!(meta.won_by(Player::X), CellSet::new());
    }

    #[test]
    fn earliest_line_decides() {
        let mut meta = MetaBoard::new();
        for idx in [0, 1, 2] {
            meta.record_result(idx, Player::O);
        }
        for idx in [6, 7, 8] {
            meta.record_result(idx, Player::X);
        }
        assert_eq!(meta.check_win(), Some(Player::O));

        let mut meta = MetaBoard::new();
        for idx in [3, 4, 5] {
            meta.record_result(idx, Player::X);
        }
        for idx in [6, 7, 8] {
            meta.record_result(idx, Player::O);
        }
        assert_eq!(meta.check_win(), Some(Player::X));
    }

    #[test]
    fn set_entry_clears_and_sets() {
        let mut meta = MetaBoard::new();
        meta.record_result(3, Player::X);
        meta.set_entry(3, None);
        assert_eq!(meta.get(3), None);
        meta.set_entry(3, Some(Player::O));
        assert_eq!(meta.get(3), Some(Player::O));
    }
}
