//! Compact text notation for moves.
//!
//! Steps are a single letter: `u`, `d`, `l`, `r`. Walls are the orientation
//! letter followed by the center's x and y digits, e.g. `h34` for a
//! horizontal wall centred at (3, 4) or `v07`. Parsing is case-insensitive.
//! The player is not part of the text; callers supply it.

use crate::game_state::board_rules::WALL_GRID_SIZE;
use crate::game_state::board_types::{Direction, Player, Point, WallOrientation};
use crate::moves::move_description::{Move, MoveKind};
use crate::quoridor_errors::QuoridorErrors;

pub fn move_to_notation(mv: &Move) -> String {
    match mv.kind {
        MoveKind::Step(direction) => direction_to_char(direction).to_string(),
        MoveKind::PlaceWall {
            orientation,
            center,
        } => format!(
            "{}{}{}",
            orientation_to_char(orientation),
            center.x(),
            center.y()
        ),
    }
}

pub fn notation_to_move(player: Player, notation: &str) -> Result<Move, QuoridorErrors> {
    let invalid = || QuoridorErrors::InvalidMoveNotation {
        notation: notation.to_owned(),
    };

    let lowered = notation.trim().to_ascii_lowercase();
    let mut chars = lowered.chars();
    let head = chars.next().ok_or_else(invalid)?;
    let rest: Vec<char> = chars.collect();

    if let Some(direction) = char_to_direction(head) {
        if !rest.is_empty() {
            return Err(invalid());
        }
        return Ok(Move::step(player, direction));
    }

    let orientation = char_to_orientation(head).ok_or_else(invalid)?;
    let [x, y] = rest.as_slice() else {
        return Err(invalid());
    };
    let x = x.to_digit(10).ok_or_else(invalid)? as u8;
    let y = y.to_digit(10).ok_or_else(invalid)? as u8;
    if x >= WALL_GRID_SIZE || y >= WALL_GRID_SIZE {
        return Err(QuoridorErrors::CoordinateOutOfRange { x, y });
    }

    Ok(Move::place_wall(player, orientation, Point::try_new(x, y)?))
}

fn direction_to_char(direction: Direction) -> char {
    match direction {
        Direction::Up => 'u',
        Direction::Down => 'd',
        Direction::Left => 'l',
        Direction::Right => 'r',
    }
}

fn char_to_direction(c: char) -> Option<Direction> {
    match c {
        'u' => Some(Direction::Up),
        'd' => Some(Direction::Down),
        'l' => Some(Direction::Left),
        'r' => Some(Direction::Right),
        _ => None,
    }
}

fn orientation_to_char(orientation: WallOrientation) -> char {
    match orientation {
        WallOrientation::Horizontal => 'h',
        WallOrientation::Vertical => 'v',
    }
}

fn char_to_orientation(c: char) -> Option<WallOrientation> {
    match c {
        'h' => Some(WallOrientation::Horizontal),
        'v' => Some(WallOrientation::Vertical),
        _ => None,
    }
}
