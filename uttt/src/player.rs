use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// One of the two sides of a game.
///
/// A cell that holds no mark is represented as `None` wherever an
/// `Option<Player>` appears.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// Moves first.
    X,
    O,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A fixed table with one slot per [`Player`].
///
/// Used wherever something has to be looked up by mark, e.g. the
/// identities of the two people playing a game.
///
/// ```
/// use uttt::{Player, Seats};
/// let seats = Seats::new("alice", "bob");
/// assert_eq!(seats[Player::O], "bob");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seats<T> {
    pub x: T,
    pub o: T,
}

impl<T> Seats<T> {
    pub fn new(x: T, o: T) -> Self {
        Self { x, o }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Seats<U> {
        Seats {
            x: f(self.x),
            o: f(self.o),
        }
    }

    /// Swaps who plays which side.
    #[must_use]
    pub fn swapped(self) -> Self {
        Self {
            x: self.o,
            o: self.x,
        }
    }
}

impl<T> Index<Player> for Seats<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }
}

impl<T> IndexMut<Player> for Seats<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        }
    }
}
