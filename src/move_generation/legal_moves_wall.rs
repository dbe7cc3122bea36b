use crate::game_state::board_types::{Board, Player};
use crate::moves::move_description::Move;

/// Wall placements for `player`, or nothing once the player's inventory is
/// empty.
pub fn generate_wall_moves(board: &Board, player: Player, out: &mut Vec<Move>) {
    if !board.wall_inventory().has_walls(player) {
        return;
    }
    board.wall_grid().push_available_placements(player, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_rules::{MAX_WALL_PLACEMENTS, STARTING_WALL_COUNT};
    use crate::game_state::board_types::{Point, WallOrientation};

    #[test]
    fn full_inventory_offers_every_geometric_placement() {
        let board = Board::new();
        let mut out = Vec::new();
        generate_wall_moves(&board, Player::One, &mut out);
        assert_eq!(out.len(), MAX_WALL_PLACEMENTS);
        assert_eq!(out, board.wall_grid().available_placements(Player::One));
    }

    #[test]
    fn empty_inventory_offers_nothing() {
        let mut board = Board::new();
        // Every other center on the first rows, so no two walls touch.
        for i in 0..STARTING_WALL_COUNT {
            let center = Point::new((i % 4) * 2, (i / 4) * 2);
            board.apply_move(Move::place_wall(Player::Two, WallOrientation::Horizontal, center));
        }
        assert_eq!(board.remaining_walls(Player::Two), 0);

        let mut out = Vec::new();
        generate_wall_moves(&board, Player::Two, &mut out);
        assert!(out.is_empty());

        generate_wall_moves(&board, Player::One, &mut out);
        assert!(!out.is_empty());
    }
}
