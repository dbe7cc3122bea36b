//! Engine abstraction used by the match harness.
//!
//! An engine is any move chooser. It sees the board and the seat it plays,
//! and reports its pick plus optional diagnostic lines.

use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_random::RandomEngine;
use crate::game_state::board_types::{Board, Player};
use crate::moves::move_description::Move;
use crate::quoridor_errors::QuoridorErrors;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        board: &Board,
        player: Player,
    ) -> Result<EngineOutput, QuoridorErrors>;
}

/// Names accepted by [`engine_from_name`].
pub const ENGINE_NAMES: [&str; 2] = ["random", "greedy"];

/// Build a seeded engine by name (case-insensitive).
pub fn engine_from_name(name: &str, seed: u64) -> Result<Box<dyn Engine>, QuoridorErrors> {
    match name.to_ascii_lowercase().as_str() {
        "random" => Ok(Box::new(RandomEngine::with_seed(seed))),
        "greedy" => Ok(Box::new(GreedyEngine::with_seed(seed))),
        _ => Err(QuoridorErrors::UnknownEngine {
            name: name.to_owned(),
        }),
    }
}
