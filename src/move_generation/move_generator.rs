//! Move generator and legality filter abstractions.
//!
//! The board's own enumeration is geometric: bounds for piece steps and the
//! adjacency rule for walls. Rules that need more context, such as blocking
//! or jumping over the opponent, or refusing walls that cut a player off from
//! its goal, plug in as a `MoveFilter` applied after that enumeration.

use crate::game_state::board_types::{Board, Player};
use crate::moves::move_description::Move;

pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, board: &Board, player: Player) -> Vec<Move>;
}

/// Post-enumeration legality rule. Returning `false` drops the candidate.
pub trait MoveFilter: Send + Sync {
    fn allows(&self, board: &Board, candidate: &Move) -> bool;
}

/// Geometric legality only. Keeps every candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometricRules;

impl MoveFilter for GeometricRules {
    #[inline]
    fn allows(&self, _board: &Board, _candidate: &Move) -> bool {
        true
    }
}

impl<F> MoveFilter for F
where
    F: Fn(&Board, &Move) -> bool + Send + Sync,
{
    #[inline]
    fn allows(&self, board: &Board, candidate: &Move) -> bool {
        self(board, candidate)
    }
}
