//! Canonical rule constants.
//!
//! Board geometry, wall budgets and the capacity hints used when reserving
//! move lists.

/// Cells per board side.
pub const BOARD_SIZE: u8 = 9;

/// Wall centers per lattice side. Centers sit between cells, so there is one
/// fewer than there are cells.
pub const WALL_GRID_SIZE: u8 = BOARD_SIZE - 1;

/// Total number of wall centers (8 x 8).
pub const WALL_CENTER_COUNT: usize = (WALL_GRID_SIZE as usize) * (WALL_GRID_SIZE as usize);

/// Walls each player may place over a game.
pub const STARTING_WALL_COUNT: u8 = 10;

/// Upper bound on piece steps from any cell.
pub const MAX_STEP_MOVES: usize = 4;

/// Upper bound on wall placements: every center, both orientations.
pub const MAX_WALL_PLACEMENTS: usize = WALL_CENTER_COUNT * 2;

/// Upper bound on the full move list for one player.
pub const MAX_AVAILABLE_MOVES: usize = MAX_STEP_MOVES + MAX_WALL_PLACEMENTS;

pub(crate) const HALF_BYTE_MASK: u8 = 0x0F;
