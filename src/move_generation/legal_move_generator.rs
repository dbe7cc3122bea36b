//! Full move generation pipeline.
//!
//! Steps and wall placements are generated into one list reserved at the
//! maximum size up front, so enumeration allocates exactly once. A
//! `LegalMoveGenerator` then runs its `MoveFilter` over that list in place.

use crate::game_state::board_rules::MAX_AVAILABLE_MOVES;
use crate::game_state::board_types::{Board, Player};
use crate::move_generation::legal_moves_step::generate_step_moves;
use crate::move_generation::legal_moves_wall::generate_wall_moves;
use crate::move_generation::move_generator::{GeometricRules, MoveFilter, MoveGenerator};
use crate::moves::move_description::Move;

/// Geometric move list for `player`: steps first, then wall placements.
pub fn generate_available_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut moves = Vec::with_capacity(MAX_AVAILABLE_MOVES);
    generate_available_moves_in_place(board, player, &mut moves);
    moves
}

/// Same as [`generate_available_moves`] but reuses `out`, which is cleared
/// first.
pub fn generate_available_moves_in_place(board: &Board, player: Player, out: &mut Vec<Move>) {
    out.clear();
    generate_step_moves(board, player, out);
    generate_wall_moves(board, player, out);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator<F = GeometricRules> {
    filter: F,
}

impl LegalMoveGenerator<GeometricRules> {
    pub const fn geometric() -> Self {
        Self {
            filter: GeometricRules,
        }
    }
}

impl<F: MoveFilter> LegalMoveGenerator<F> {
    pub const fn with_filter(filter: F) -> Self {
        Self { filter }
    }
}

impl<F: MoveFilter> MoveGenerator for LegalMoveGenerator<F> {
    fn generate_moves(&self, board: &Board, player: Player) -> Vec<Move> {
        let mut moves = generate_available_moves(board, player);
        moves.retain(|candidate| self.filter.allows(board, candidate));
        moves
    }
}
