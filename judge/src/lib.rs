mod error;
mod game;
mod input;
mod ledger;
mod player;
mod rating;
mod recording;
mod session;
pub use error::*;
pub use game::*;
pub use input::*;
pub use ledger::*;
pub use player::*;
pub use rating::*;
pub use recording::*;
pub use session::*;

pub struct Config {
    pub rng: rand::rngs::StdRng,
    pub recorder: Option<recording::Recorder>,
    /// How many games to play at most.
    pub num_games: usize,
    /// Randomly decide before every game who plays X.
    pub swap_sides: bool,
}
