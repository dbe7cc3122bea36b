//! Uniform random move picker.
//!
//! Chooses among every generated move, so with a full inventory it places a
//! wall far more often than it steps. Mostly useful as a sparring partner
//! and for exercising the generator in long self-play runs.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board_types::{Board, Player};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::quoridor_errors::QuoridorErrors;

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: LegalMoveGenerator::geometric(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        player: Player,
    ) -> Result<EngineOutput, QuoridorErrors> {
        let moves = self.move_generator.generate_moves(board, player);
        let info = format!("random_engine available_moves {}", moves.len());
        Ok(EngineOutput {
            best_move: moves.as_slice().choose(&mut self.rng).copied(),
            info_lines: vec![info],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_an_available_move() {
        let board = Board::new();
        let mut engine = RandomEngine::with_seed(11);
        let player = Player::Two;
        for _ in 0..32 {
            let out = engine.choose_move(&board, player).expect("engine runs");
            let picked = out.best_move.expect("start board has moves");
            assert!(board.available_moves(player).contains(&picked));
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let board = Board::new();
        let mut a = RandomEngine::with_seed(99);
        let mut b = RandomEngine::with_seed(99);
        for _ in 0..16 {
            assert_eq!(
                a.choose_move(&board, Player::One).map(|o| o.best_move),
                b.choose_move(&board, Player::One).map(|o| o.best_move)
            );
        }
    }
}
