//! Aggregate board state.
//!
//! `Board` owns both piece positions, the packed wall inventory and the wall
//! grid. It is a small `Copy` value (a few bytes plus one `u128`), so search
//! code can branch by copying instead of make/unmake. The only way to change
//! a board is to apply a move.

use crate::game_state::board_rules::BOARD_SIZE;
use crate::game_state::board_types::{Player, Point, Wall};
use crate::game_state::wall_grid::WallGrid;
use crate::game_state::wall_inventory::WallInventory;
use crate::move_generation::legal_move_apply;
use crate::move_generation::legal_move_generator::generate_available_moves;
use crate::moves::move_description::Move;
use crate::quoridor_errors::QuoridorErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    // [player]
    player_positions: [Point; 2],
    wall_inventory: WallInventory,
    wall_grid: WallGrid,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard start: both pieces centred on their home rows, full wall
    /// budgets, no walls on the board.
    pub const fn new() -> Self {
        Self {
            player_positions: [
                Point::new(BOARD_SIZE / 2, Player::One.home_row()),
                Point::new(BOARD_SIZE / 2, Player::Two.home_row()),
            ],
            wall_inventory: WallInventory::new(),
            wall_grid: WallGrid::new(),
        }
    }

    #[inline]
    pub fn player_position(&self, player: Player) -> Point {
        self.player_positions[player.index()]
    }

    #[inline]
    pub fn remaining_walls(&self, player: Player) -> u8 {
        self.wall_inventory.remaining_walls(player)
    }

    /// Placed walls in ascending center order.
    pub fn placed_walls(&self) -> Vec<Wall> {
        self.wall_grid.occupied_walls()
    }

    #[inline]
    pub fn wall_grid(&self) -> &WallGrid {
        &self.wall_grid
    }

    #[inline]
    pub fn wall_inventory(&self) -> &WallInventory {
        &self.wall_inventory
    }

    /// Every move `player` may make: piece steps first, then wall placements.
    ///
    /// Legality is geometric only. Stepping onto the opponent is not excluded,
    /// no jump is offered, and wall placements are not checked for sealing a
    /// player off from its goal. Use a `LegalMoveGenerator` with a custom
    /// `MoveFilter` to layer those rules on top.
    pub fn available_moves(&self, player: Player) -> Vec<Move> {
        generate_available_moves(self, player)
    }

    /// Apply `mv` without checking it.
    ///
    /// The move must come from [`Board::available_moves`] on this same board.
    /// Anything else leaves the board in an unspecified state, and a wall
    /// placement with an empty inventory panics.
    pub fn apply_move(&mut self, mv: Move) {
        legal_move_apply::apply_move(self, mv);
    }

    /// Apply `mv` after re-checking it against the current board.
    ///
    /// Returns `QuoridorErrors::IllegalMove` and leaves the board unchanged if
    /// the move is not currently available.
    pub fn try_apply_move(&mut self, mv: Move) -> Result<(), QuoridorErrors> {
        legal_move_apply::try_apply_move(self, mv)
    }

    #[inline]
    pub(crate) fn set_player_position(&mut self, player: Player, position: Point) {
        self.player_positions[player.index()] = position;
    }

    #[inline]
    pub(crate) fn wall_grid_mut(&mut self) -> &mut WallGrid {
        &mut self.wall_grid
    }

    #[inline]
    pub(crate) fn wall_inventory_mut(&mut self) -> &mut WallInventory {
        &mut self.wall_inventory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_rules::STARTING_WALL_COUNT;
    use crate::game_state::board_types::{Direction, WallOrientation};

    #[test]
    fn new_board_has_standard_start() {
        let board = Board::new();
        assert_eq!(board.player_position(Player::One), Point::new(4, 0));
        assert_eq!(board.player_position(Player::Two), Point::new(4, 8));
        assert_eq!(board.remaining_walls(Player::One), STARTING_WALL_COUNT);
        assert_eq!(board.remaining_walls(Player::Two), STARTING_WALL_COUNT);
        assert!(board.placed_walls().is_empty());
        assert_eq!(board, Board::default());
    }

    #[test]
    fn step_moves_only_the_mover() {
        let mut board = Board::new();
        board.apply_move(Move::step(Player::One, Direction::Down));
        board.apply_move(Move::step(Player::Two, Direction::Left));
        assert_eq!(board.player_position(Player::One), Point::new(4, 1));
        assert_eq!(board.player_position(Player::Two), Point::new(3, 8));
        assert!(board.placed_walls().is_empty());
    }

    #[test]
    fn wall_placement_spends_the_movers_wall() {
        let mut board = Board::new();
        board.apply_move(Move::place_wall(
            Player::Two,
            WallOrientation::Vertical,
            Point::new(2, 6),
        ));
        assert_eq!(
            board.placed_walls(),
            vec![Wall::new(2, 6, WallOrientation::Vertical)]
        );
        assert_eq!(board.remaining_walls(Player::Two), STARTING_WALL_COUNT - 1);
        assert_eq!(board.remaining_walls(Player::One), STARTING_WALL_COUNT);
        assert_eq!(board.player_position(Player::Two), Point::new(4, 8));
    }

    #[test]
    fn copies_are_independent() {
        let original = Board::new();
        let mut branch = original;
        branch.apply_move(Move::step(Player::One, Direction::Right));
        assert_eq!(original.player_position(Player::One), Point::new(4, 0));
        assert_eq!(branch.player_position(Player::One), Point::new(5, 0));
    }
}
