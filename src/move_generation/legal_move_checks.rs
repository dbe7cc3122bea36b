//! Single-move legality checks.
//!
//! Answers "is this move in `available_moves`?" without building the list,
//! for the validating apply path.

use crate::game_state::board_types::Board;
use crate::moves::move_description::{Move, MoveKind};

/// `true` when `mv` would appear in `board.available_moves(mv.player)`.
pub fn is_move_available(board: &Board, mv: &Move) -> bool {
    match mv.kind {
        MoveKind::Step(direction) => board
            .player_position(mv.player)
            .neighbor(direction)
            .is_some(),
        MoveKind::PlaceWall {
            orientation,
            center,
        } => {
            board.wall_inventory().has_walls(mv.player)
                && board
                    .wall_grid()
                    .allows_placement(center.x(), center.y(), orientation)
        }
    }
}
