use super::ChessEngine;
use crate::chess_board::Move;
use crate::game::GameSession;
use crate::ChessError;
use rand::prelude::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Plays a uniformly random legal move. Seeded, so games can be replayed.
pub struct RandomMover {
    rng: Pcg64,
}

impl RandomMover {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl ChessEngine for RandomMover {
    fn name(&self) -> &str {
        "random mover"
    }

    fn select_move(&mut self, session: &GameSession) -> Result<Option<Move>, ChessError> {
        let moves = session.legal_moves()?;
        Ok(moves.choose(&mut self.rng).copied())
    }
}
