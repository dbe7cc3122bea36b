//! Remaining-wall counters for both players, packed four bits each into one
//! byte (player one low nibble, player two high nibble).

use crate::game_state::board_rules::{HALF_BYTE_MASK, STARTING_WALL_COUNT};
use crate::game_state::board_types::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WallInventory {
    counts: u8,
}

impl Default for WallInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl WallInventory {
    /// Both players at the starting budget.
    #[inline]
    pub const fn new() -> Self {
        Self {
            counts: (STARTING_WALL_COUNT & HALF_BYTE_MASK)
                | ((STARTING_WALL_COUNT & HALF_BYTE_MASK) << 4),
        }
    }

    #[inline]
    const fn shift(player: Player) -> u8 {
        4 * player.index() as u8
    }

    #[inline]
    pub const fn remaining_walls(&self, player: Player) -> u8 {
        (self.counts >> Self::shift(player)) & HALF_BYTE_MASK
    }

    #[inline]
    pub const fn has_walls(&self, player: Player) -> bool {
        self.remaining_walls(player) > 0
    }

    /// Spend one wall for `player`.
    ///
    /// # Panics
    ///
    /// Panics when the player has none left. Legality checks must stop a wall
    /// placement before it gets here.
    pub fn decrement(&mut self, player: Player) {
        let remaining = self.remaining_walls(player);
        assert!(remaining > 0, "{player} has no walls left to place");
        let shift = Self::shift(player);
        let clear_mask = !(HALF_BYTE_MASK << shift);
        self.counts = (self.counts & clear_mask) | ((remaining - 1) << shift);
    }
}
