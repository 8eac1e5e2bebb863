use quickcheck::Arbitrary;

use crate::{Engine, Player, Position, GRID_SIZE};

/// A sequence of legal moves starting from a fresh game.
///
/// Generation stops early once somebody has won on the meta-board.
#[derive(Clone, Debug)]
pub struct LegalGame {
    pub moves: Vec<Position>,
}

impl quickcheck::Arbitrary for LegalGame {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut engine = Engine::new();
        let num_moves = usize::arbitrary(g) % (GRID_SIZE * GRID_SIZE + 1);
        let mut moves = Vec::with_capacity(num_moves);
        for _ in 0..num_moves {
            if engine.check_meta_win().is_some() {
                break;
            }
            let legal_moves = engine.legal_moves();
            let Some(&pos) = g.choose(&legal_moves) else {
                break;
            };
            engine.play(pos).unwrap();
            moves.push(pos);
        }
        LegalGame { moves }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Every prefix of a legal game is a legal game
        let moves = self.moves.clone();
        Box::new((0..moves.len()).rev().map(move |len| LegalGame {
            moves: moves[..len].to_vec(),
        }))
    }
}

impl quickcheck::Arbitrary for Position {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Position {
            row: usize::arbitrary(g) % GRID_SIZE,
            col: usize::arbitrary(g) % GRID_SIZE,
        }
    }
}

impl quickcheck::Arbitrary for Player {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&Player::ALL).unwrap()
    }
}
