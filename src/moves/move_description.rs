//! The move value passed between generation, engines and application.
//!
//! A move is either a one-cell piece step or a wall placement. The payload is
//! an enum, so a step can never be read as a wall center or the other way
//! round. Ordering compares the player first, then steps before walls, then
//! the payload (direction, or orientation followed by center).

use std::fmt;

use crate::game_state::board_types::{Direction, Player, Point, WallOrientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MoveKind {
    Step(Direction),
    PlaceWall {
        orientation: WallOrientation,
        center: Point,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    pub player: Player,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    pub const fn step(player: Player, direction: Direction) -> Self {
        Self {
            player,
            kind: MoveKind::Step(direction),
        }
    }

    #[inline]
    pub const fn place_wall(player: Player, orientation: WallOrientation, center: Point) -> Self {
        Self {
            player,
            kind: MoveKind::PlaceWall {
                orientation,
                center,
            },
        }
    }

    #[inline]
    pub const fn is_step(&self) -> bool {
        matches!(self.kind, MoveKind::Step(_))
    }

    #[inline]
    pub const fn is_wall_placement(&self) -> bool {
        matches!(self.kind, MoveKind::PlaceWall { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MoveKind::Step(direction) => write!(f, "{} steps {}", self.player, direction),
            MoveKind::PlaceWall {
                orientation,
                center,
            } => write!(
                f,
                "{} places {} wall at {}",
                self.player, orientation, center
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_player_then_kind_then_payload() {
        let p1_up = Move::step(Player::One, Direction::Up);
        let p1_right = Move::step(Player::One, Direction::Right);
        let p1_wall_h =
            Move::place_wall(Player::One, WallOrientation::Horizontal, Point::new(7, 7));
        let p1_wall_v = Move::place_wall(Player::One, WallOrientation::Vertical, Point::new(0, 0));
        let p2_up = Move::step(Player::Two, Direction::Up);

        let mut moves = vec![p2_up, p1_wall_v, p1_wall_h, p1_right, p1_up];
        moves.sort();
        assert_eq!(moves, vec![p1_up, p1_right, p1_wall_h, p1_wall_v, p2_up]);
    }

    #[test]
    fn equality_ignores_nothing_but_identical_payloads() {
        let a = Move::place_wall(Player::One, WallOrientation::Vertical, Point::new(2, 3));
        let b = Move::place_wall(Player::One, WallOrientation::Vertical, Point::new(2, 3));
        let c = Move::place_wall(Player::Two, WallOrientation::Vertical, Point::new(2, 3));
        let d = Move::place_wall(Player::One, WallOrientation::Horizontal, Point::new(2, 3));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn kind_predicates_match_constructors() {
        let step = Move::step(Player::Two, Direction::Left);
        let wall = Move::place_wall(Player::Two, WallOrientation::Horizontal, Point::new(1, 1));
        assert!(step.is_step() && !step.is_wall_placement());
        assert!(wall.is_wall_placement() && !wall.is_step());
    }

    #[test]
    fn display_names_player_and_payload() {
        let step = Move::step(Player::One, Direction::Down);
        assert_eq!(step.to_string(), "player one steps down");
        let wall = Move::place_wall(Player::Two, WallOrientation::Vertical, Point::new(3, 5));
        assert_eq!(
            wall.to_string(),
            "player two places vertical wall at (3, 5)"
        );
    }
}
