//! Small enums shared by every layer of the engine.
//!
//! Coordinate convention: x grows to the right and y grows downward, so UP
//! decreases y. Player one starts on row 0 and races to the last row; player
//! two does the reverse.

use derive_more::Display;

pub use crate::game_state::board::Board;
pub use crate::game_state::point::Point;
pub use crate::game_state::wall::Wall;

use crate::game_state::board_rules::BOARD_SIZE;

/// One of the two seats at the board.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Player {
    #[display("player one")]
    One,
    #[display("player two")]
    Two,
}

pub const ALL_PLAYERS: [Player; 2] = [Player::One, Player::Two];

impl Player {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Row this player starts on.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Player::One => 0,
            Player::Two => BOARD_SIZE - 1,
        }
    }

    /// Row this player must reach to win. Always the opponent's home row.
    #[inline]
    pub const fn goal_row(self) -> u8 {
        self.opponent().home_row()
    }
}

/// Orthogonal step direction for a piece.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    #[display("up")]
    Up,
    #[display("down")]
    Down,
    #[display("left")]
    Left,
    #[display("right")]
    Right,
}

pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

impl Direction {
    /// `(dx, dy)` for one step in this direction.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Orientation of a placed wall.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WallOrientation {
    #[display("horizontal")]
    Horizontal,
    #[display("vertical")]
    Vertical,
}
