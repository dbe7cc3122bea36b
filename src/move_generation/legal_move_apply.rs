//! Move application.
//!
//! `apply_move` is the unconditional transition used on moves that came out
//! of the generator. `try_apply_move` re-checks first and refuses anything
//! not currently available, leaving the board untouched.

use tracing::{debug, warn};

use crate::game_state::board_types::Board;
use crate::move_generation::legal_move_checks::is_move_available;
use crate::moves::move_description::{Move, MoveKind};
use crate::quoridor_errors::QuoridorErrors;

pub fn apply_move(board: &mut Board, mv: Move) {
    match mv.kind {
        MoveKind::Step(direction) => {
            let next = board.player_position(mv.player).shifted(direction);
            board.set_player_position(mv.player, next);
        }
        MoveKind::PlaceWall {
            orientation,
            center,
        } => {
            board
                .wall_grid_mut()
                .place(center.x(), center.y(), orientation);
            board.wall_inventory_mut().decrement(mv.player);
        }
    }
    debug!(%mv, "applied move");
}

pub fn try_apply_move(board: &mut Board, mv: Move) -> Result<(), QuoridorErrors> {
    if !is_move_available(board, &mv) {
        warn!(%mv, "rejected illegal move");
        return Err(QuoridorErrors::IllegalMove { mv });
    }
    apply_move(board, mv);
    Ok(())
}
