//! Goal-seeking engine.
//!
//! Takes the step that brings its piece closest to its goal row. When no step
//! improves on the current distance it falls back to a random move.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board_types::{Board, Player, Point};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_description::MoveKind;
use crate::quoridor_errors::QuoridorErrors;

pub struct GreedyEngine {
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: LegalMoveGenerator::geometric(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    fn distance_to_goal(position: Point, player: Player) -> u8 {
        position.y().abs_diff(player.goal_row())
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        player: Player,
    ) -> Result<EngineOutput, QuoridorErrors> {
        let moves = self.move_generator.generate_moves(board, player);
        let position = board.player_position(player);
        let current = Self::distance_to_goal(position, player);

        let best_step = moves
            .iter()
            .filter_map(|mv| match mv.kind {
                MoveKind::Step(direction) => position
                    .neighbor(direction)
                    .map(|next| (Self::distance_to_goal(next, player), *mv)),
                MoveKind::PlaceWall { .. } => None,
            })
            .filter(|(distance, _)| *distance < current)
            .min_by_key(|(distance, _)| *distance);

        let best_move = match best_step {
            Some((_, mv)) => Some(mv),
            None => moves.as_slice().choose(&mut self.rng).copied(),
        };
        Ok(EngineOutput {
            best_move,
            info_lines: vec![format!("greedy_engine distance_to_goal {current}")],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_types::Direction::{Down, Up};
    use crate::moves::move_description::Move;

    #[test]
    fn steps_toward_the_goal_row() {
        let board = Board::new();
        let mut engine = GreedyEngine::with_seed(1);
        let cases = [(Player::One, Down), (Player::Two, Up)];
        for (player, toward_goal) in cases {
            let out = engine.choose_move(&board, player).expect("engine runs");
            assert_eq!(out.best_move, Some(Move::step(player, toward_goal)));
        }
    }

    #[test]
    fn reaches_the_goal_in_eight_steps_unopposed() {
        let mut board = Board::new();
        let mut engine = GreedyEngine::with_seed(5);
        for _ in 0..8 {
            let mv = engine
                .choose_move(&board, Player::One)
                .expect("engine runs")
                .best_move
                .expect("a move exists");
            board.try_apply_move(mv).expect("move is available");
        }
        let position = board.player_position(Player::One);
        assert_eq!(position.y(), Player::One.goal_row());
    }
}
