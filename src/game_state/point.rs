//! Packed board coordinate.
//!
//! A `Point` stores x in the low nibble and y in the high nibble of one byte.
//! Equality and ordering work directly on that byte, which makes the order
//! y-major: every point on row 0 sorts before any point on row 1.

use std::fmt;

use crate::game_state::board_rules::{BOARD_SIZE, HALF_BYTE_MASK};
use crate::game_state::board_types::Direction;
use crate::quoridor_errors::QuoridorErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    packed: u8,
}

impl Point {
    /// Pack `(x, y)` without validation.
    ///
    /// Callers guarantee both coordinates are in `0..BOARD_SIZE`. Out-of-range
    /// values trip a debug assertion; release builds silently truncate them to
    /// four bits. Use [`Point::try_new`] for untrusted input.
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < BOARD_SIZE && y < BOARD_SIZE);
        Self {
            packed: (x & HALF_BYTE_MASK) | ((y & HALF_BYTE_MASK) << 4),
        }
    }

    /// Pack `(x, y)`, rejecting coordinates off the board.
    pub fn try_new(x: u8, y: u8) -> Result<Self, QuoridorErrors> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return Err(QuoridorErrors::CoordinateOutOfRange { x, y });
        }
        Ok(Self::new(x, y))
    }

    #[inline]
    pub const fn x(self) -> u8 {
        self.packed & HALF_BYTE_MASK
    }

    #[inline]
    pub const fn y(self) -> u8 {
        (self.packed >> 4) & HALF_BYTE_MASK
    }

    /// Neighbouring cell one step away, or `None` at the board edge.
    pub fn neighbor(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        let x = self.x().checked_add_signed(dx)?;
        let y = self.y().checked_add_signed(dy)?;
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return None;
        }
        Some(Self::new(x, y))
    }

    /// Cell one step away with no edge check. Only valid when the step was
    /// already established as in bounds.
    #[inline]
    pub(crate) fn shifted(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(
            self.x().wrapping_add_signed(dx),
            self.y().wrapping_add_signed(dy),
        )
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_types::ALL_DIRECTIONS;

    #[test]
    fn packed_coordinates_round_trip() {
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                let p = Point::new(x, y);
                assert_eq!((p.x(), p.y()), (x, y));
            }
        }
    }

    #[test]
    fn known_points_decode() {
        assert_eq!((Point::new(0, 0).x(), Point::new(0, 0).y()), (0, 0));
        assert_eq!((Point::new(5, 5).x(), Point::new(5, 5).y()), (5, 5));
        assert_eq!((Point::new(3, 8).x(), Point::new(3, 8).y()), (3, 8));
    }

    #[test]
    fn ordering_is_row_major() {
        assert!(Point::new(8, 0) < Point::new(0, 1));
        assert!(Point::new(2, 4) < Point::new(3, 4));
        let mut points = vec![Point::new(1, 2), Point::new(0, 2), Point::new(7, 0)];
        points.sort();
        assert_eq!(
            points,
            vec![Point::new(7, 0), Point::new(0, 2), Point::new(1, 2)]
        );
    }

    #[test]
    fn try_new_rejects_off_board_coordinates() {
        assert_eq!(
            Point::try_new(9, 0),
            Err(QuoridorErrors::CoordinateOutOfRange { x: 9, y: 0 })
        );
        assert_eq!(
            Point::try_new(0, 200),
            Err(QuoridorErrors::CoordinateOutOfRange { x: 0, y: 200 })
        );
        assert_eq!(Point::try_new(8, 8), Ok(Point::new(8, 8)));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn new_asserts_range_in_debug_builds() {
        let _ = Point::new(BOARD_SIZE, 0);
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn new_truncates_to_four_bits_in_release_builds() {
        let truncated = Point::new(BOARD_SIZE, 0);
        assert_eq!(truncated.x(), BOARD_SIZE & 0x0F);
        assert_eq!(truncated.y(), 0);
        assert_eq!(Point::new(0x13, 2), Point::new(3, 2));
    }

    #[test]
    fn neighbor_stops_at_edges() {
        let corner = Point::new(0, 0);
        assert_eq!(corner.neighbor(Direction::Up), None);
        assert_eq!(corner.neighbor(Direction::Left), None);
        assert_eq!(corner.neighbor(Direction::Right), Some(Point::new(1, 0)));
        assert_eq!(corner.neighbor(Direction::Down), Some(Point::new(0, 1)));

        let far = Point::new(8, 8);
        assert_eq!(far.neighbor(Direction::Down), None);
        assert_eq!(far.neighbor(Direction::Right), None);
    }

    #[test]
    fn shifted_matches_neighbor_inside_the_board() {
        let centre = Point::new(4, 4);
        for direction in ALL_DIRECTIONS {
            assert_eq!(Some(centre.shifted(direction)), centre.neighbor(direction));
        }
    }
}
