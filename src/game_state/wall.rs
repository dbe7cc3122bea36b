//! Read-only view of one occupied wall center.

use std::cmp::Ordering;
use std::fmt;

use crate::game_state::board_types::WallOrientation;
use crate::game_state::wall_grid::center_index;

/// A placed wall, as reported by `WallGrid::occupied_walls`.
///
/// Walls are ordered by the linear index of their center. A center holds at
/// most one wall, so the orientation tie-break only matters for values built
/// by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wall {
    pub center_x: u8,
    pub center_y: u8,
    pub orientation: WallOrientation,
}

impl Wall {
    #[inline]
    pub const fn new(center_x: u8, center_y: u8, orientation: WallOrientation) -> Self {
        Self {
            center_x,
            center_y,
            orientation,
        }
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.orientation == WallOrientation::Vertical
    }

    #[inline]
    pub fn center_index(&self) -> usize {
        center_index(self.center_x, self.center_y)
    }
}

impl Ord for Wall {
    fn cmp(&self, other: &Self) -> Ordering {
        self.center_index()
            .cmp(&other.center_index())
            .then(self.orientation.cmp(&other.orientation))
    }
}

impl PartialOrd for Wall {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} wall at ({}, {})",
            self.orientation, self.center_x, self.center_y
        )
    }
}
