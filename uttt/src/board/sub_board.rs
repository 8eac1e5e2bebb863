use crate::{CellSet, Player, Seats};

/// One of the nine local 3x3 boards.
///
/// The winner is cached: it is set by [`SubBoard::place()`] when a line is
/// completed and afterwards only changed by the engine's undo.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SubBoard {
    marks: Seats<CellSet>,
    winner: Option<Player>,
}

impl SubBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The mark in the given cell, if any.
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        let idx = cell_index(row, col)?;
        Player::ALL
            .into_iter()
            .find(|&player| self.marks[player].contains(idx))
    }

    /// The cells occupied by one player.
    pub fn marks(&self, player: Player) -> CellSet {
        self.marks[player]
    }

    pub fn occupied(&self) -> CellSet {
        self.marks.x | self.marks.o
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    /// A board is closed once it has a winner or no empty cell is left.
    /// No further moves may be played into a closed board.
    pub fn is_closed(&self) -> bool {
        self.winner.is_some() || self.is_full()
    }

    /// Puts a mark into an empty cell.
    ///
    /// Returns `false` without changing anything if the cell is already
    /// occupied or out of range. Callers are expected to check legality
    /// first. If the mark completes a line and the board has no winner
    /// yet, `player` becomes the winner.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> bool {
        let Some(idx) = cell_index(row, col) else {
            return false;
        };
        if self.occupied().contains(idx) {
            return false;
        }
        self.marks[player] = self.marks[player].insert(idx);
        if self.winner.is_none() && self.marks[player].has_line() {
            self.winner = Some(player);
        }
        true
    }

    /// Empties a cell and puts back the winner the board had before.
    pub(crate) fn restore(&mut self, row: usize, col: usize, winner: Option<Player>) {
        if let Some(idx) = cell_index(row, col) {
            self.marks.x = self.marks.x.remove(idx);
            self.marks.o = self.marks.o.remove(idx);
        }
        self.winner = winner;
    }
}

fn cell_index(row: usize, col: usize) -> Option<usize> {
    (row < 3 && col < 3).then_some(row * 3 + col)
}
