//! Errors used throughout the rules engine.
//!
//! `QuoridorErrors` is the single recoverable error type of the crate. It is
//! returned where a caller can reasonably hold bad input: coordinates parsed
//! from text, moves typed by a person, engine names read from the command
//! line, and moves submitted through the validating apply path.
//!
//! Contract violations are not represented here. Decrementing an empty wall
//! inventory, or building a `Point` outside the board in a debug build, is a
//! caller bug and panics instead.

use derive_more::{Display, Error};

use crate::game_state::board_types::Player;
use crate::moves::move_description::Move;

/// Unified error type for the rules engine.
///
/// - `CoordinateOutOfRange` and `InvalidMoveNotation` are input errors and
///   are safe to show to a user.
/// - `IllegalMove` is a game-rule rejection from `Board::try_apply_move`; the
///   board is left untouched.
/// - `UnknownEngine` and `NoAvailableMoves` come from the engine and match
///   harness layer.
/// - `WorkerPanicked` reports a background counting thread that died.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum QuoridorErrors {
    /// A coordinate pair does not fit on the board (or on the wall-center
    /// lattice, for wall placements).
    #[display("coordinate ({x}, {y}) is outside the board")]
    CoordinateOutOfRange { x: u8, y: u8 },

    /// The move is not available on the current board. Returned without
    /// mutating anything.
    #[display("illegal move: {mv}")]
    IllegalMove { mv: Move },

    /// A move notation string could not be parsed.
    #[display("invalid move notation: {notation:?}")]
    InvalidMoveNotation { notation: String },

    /// No engine is registered under this name.
    #[display("unknown engine: {name:?}")]
    UnknownEngine { name: String },

    /// An engine was asked to move but produced nothing.
    #[display("{player} has no available moves")]
    NoAvailableMoves { player: Player },

    /// A worker thread panicked before returning its result.
    #[display("{task} worker thread panicked")]
    WorkerPanicked { task: String },
}
