//! Packed wall-center lattice.
//!
//! Each of the 64 wall centers takes two bits of a single `u128`, addressed by
//! the linear index `x + y * WALL_GRID_SIZE`. A cell is Empty (`0b00`),
//! Horizontal (`0b01`) or Vertical (`0b10`). Cells only ever move out of
//! Empty; walls are never removed.
//!
//! Adjacency rule: a vertical wall may not sit directly above or below
//! another vertical wall, and a horizontal wall may not sit directly left or
//! right of another horizontal wall. Otherwise two walls would overlap along a
//! shared half segment. Walls of different orientation may cross or touch.

use crate::game_state::board_rules::{MAX_WALL_PLACEMENTS, WALL_CENTER_COUNT, WALL_GRID_SIZE};
use crate::game_state::board_types::{Player, Point, Wall, WallOrientation};
use crate::moves::move_description::Move;

const CELL_BITS: usize = 2;
const CELL_MASK: u128 = 0b11;
const EMPTY_CODE: u128 = 0b00;
const HORIZONTAL_CODE: u128 = 0b01;
const VERTICAL_CODE: u128 = 0b10;

// Low bit of every 2-bit cell.
const LOW_BITS: u128 = 0x5555_5555_5555_5555_5555_5555_5555_5555;

/// State of one wall center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallCell {
    Empty,
    Horizontal,
    Vertical,
}

impl WallCell {
    #[inline]
    const fn from_code(code: u128) -> Self {
        match code {
            EMPTY_CODE => WallCell::Empty,
            HORIZONTAL_CODE => WallCell::Horizontal,
            _ => WallCell::Vertical,
        }
    }

    #[inline]
    pub const fn orientation(self) -> Option<WallOrientation> {
        match self {
            WallCell::Empty => None,
            WallCell::Horizontal => Some(WallOrientation::Horizontal),
            WallCell::Vertical => Some(WallOrientation::Vertical),
        }
    }
}

impl From<WallOrientation> for WallCell {
    fn from(orientation: WallOrientation) -> Self {
        match orientation {
            WallOrientation::Horizontal => WallCell::Horizontal,
            WallOrientation::Vertical => WallCell::Vertical,
        }
    }
}

#[inline]
const fn orientation_code(orientation: WallOrientation) -> u128 {
    match orientation {
        WallOrientation::Horizontal => HORIZONTAL_CODE,
        WallOrientation::Vertical => VERTICAL_CODE,
    }
}

/// Linear index of a wall center.
#[inline]
pub const fn center_index(x: u8, y: u8) -> usize {
    x as usize + y as usize * WALL_GRID_SIZE as usize
}

#[inline]
const fn center_from_index(index: usize) -> (u8, u8) {
    (
        (index % WALL_GRID_SIZE as usize) as u8,
        (index / WALL_GRID_SIZE as usize) as u8,
    )
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WallGrid {
    cells: u128,
}

impl WallGrid {
    #[inline]
    pub const fn new() -> Self {
        Self { cells: 0 }
    }

    #[inline]
    const fn code_at(&self, index: usize) -> u128 {
        (self.cells >> (index * CELL_BITS)) & CELL_MASK
    }

    /// State of the center at `(x, y)`. Both coordinates must be below
    /// `WALL_GRID_SIZE`.
    #[inline]
    pub fn cell(&self, x: u8, y: u8) -> WallCell {
        debug_assert!(x < WALL_GRID_SIZE && y < WALL_GRID_SIZE);
        WallCell::from_code(self.code_at(center_index(x, y)))
    }

    /// `true` when the (possibly off-lattice) center holds `code`. Anything
    /// off the lattice holds nothing.
    #[inline]
    fn neighbor_holds(&self, x: i16, y: i16, code: u128) -> bool {
        let size = WALL_GRID_SIZE as i16;
        if x < 0 || y < 0 || x >= size || y >= size {
            return false;
        }
        self.code_at(center_index(x as u8, y as u8)) == code
    }

    /// Mark `(x, y)` as holding a wall.
    ///
    /// No legality check happens here. Callers confirm the placement with
    /// [`WallGrid::allows_placement`] first.
    pub fn place(&mut self, x: u8, y: u8, orientation: WallOrientation) {
        debug_assert!(x < WALL_GRID_SIZE && y < WALL_GRID_SIZE);
        let shift = center_index(x, y) * CELL_BITS;
        debug_assert_eq!(
            (self.cells >> shift) & CELL_MASK,
            EMPTY_CODE,
            "wall center ({x}, {y}) is already occupied"
        );
        let clear_mask = !(CELL_MASK << shift);
        self.cells = (self.cells & clear_mask) | (orientation_code(orientation) << shift);
    }

    /// Whether a wall of `orientation` could go at `(x, y)` right now: the
    /// center is on the lattice, empty, and has no same-orientation neighbour
    /// along the wall's axis.
    pub fn allows_placement(&self, x: u8, y: u8, orientation: WallOrientation) -> bool {
        if x >= WALL_GRID_SIZE || y >= WALL_GRID_SIZE {
            return false;
        }
        if self.code_at(center_index(x, y)) != EMPTY_CODE {
            return false;
        }
        self.clear_of_overlap(x as i16, y as i16, orientation)
    }

    #[inline]
    fn clear_of_overlap(&self, x: i16, y: i16, orientation: WallOrientation) -> bool {
        match orientation {
            WallOrientation::Vertical => {
                !self.neighbor_holds(x, y - 1, VERTICAL_CODE)
                    && !self.neighbor_holds(x, y + 1, VERTICAL_CODE)
            }
            WallOrientation::Horizontal => {
                !self.neighbor_holds(x - 1, y, HORIZONTAL_CODE)
                    && !self.neighbor_holds(x + 1, y, HORIZONTAL_CODE)
            }
        }
    }

    /// Every placed wall, in ascending center index.
    pub fn occupied_walls(&self) -> Vec<Wall> {
        let mut walls = Vec::with_capacity(self.wall_count());
        for index in 0..WALL_CENTER_COUNT {
            if let Some(orientation) = WallCell::from_code(self.code_at(index)).orientation() {
                let (x, y) = center_from_index(index);
                walls.push(Wall::new(x, y, orientation));
            }
        }
        walls
    }

    /// Every geometrically valid wall placement, attributed to `player`.
    ///
    /// Inventory is not consulted here; see
    /// `move_generation::legal_moves_wall` for the gated version.
    pub fn available_placements(&self, player: Player) -> Vec<Move> {
        let mut out = Vec::with_capacity(MAX_WALL_PLACEMENTS);
        self.push_available_placements(player, &mut out);
        out
    }

    /// Append the placements of [`WallGrid::available_placements`] to `out`.
    /// For a given center, Vertical comes before Horizontal.
    pub fn push_available_placements(&self, player: Player, out: &mut Vec<Move>) {
        for index in 0..WALL_CENTER_COUNT {
            if self.code_at(index) != EMPTY_CODE {
                continue;
            }
            let (x, y) = center_from_index(index);
            let center = Point::new(x, y);
            for orientation in [WallOrientation::Vertical, WallOrientation::Horizontal] {
                if self.clear_of_overlap(x as i16, y as i16, orientation) {
                    out.push(Move::place_wall(player, orientation, center));
                }
            }
        }
    }

    /// Number of occupied centers.
    #[inline]
    pub fn wall_count(&self) -> usize {
        let occupied = (self.cells | (self.cells >> 1)) & LOW_BITS;
        occupied.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells == 0
    }
}
