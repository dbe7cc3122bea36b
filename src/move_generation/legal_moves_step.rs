use crate::game_state::board_rules::BOARD_SIZE;
use crate::game_state::board_types::{Board, Direction, Player};
use crate::moves::move_description::Move;

/// Piece steps for `player`, bounds-only, in the order LEFT, RIGHT, UP, DOWN.
///
/// The opponent's cell is not treated as blocked and no jump is generated.
pub fn generate_step_moves(board: &Board, player: Player, out: &mut Vec<Move>) {
    let position = board.player_position(player);

    if position.x() != 0 {
        out.push(Move::step(player, Direction::Left));
    }
    if position.x() != BOARD_SIZE - 1 {
        out.push(Move::step(player, Direction::Right));
    }
    if position.y() != 0 {
        out.push(Move::step(player, Direction::Up));
    }
    if position.y() != BOARD_SIZE - 1 {
        out.push(Move::step(player, Direction::Down));
    }
}
