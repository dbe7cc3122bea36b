//! Crate root module declarations for the Quoridor rules engine.
//!
//! The core is `game_state` (packed board, wall grid, inventories) and
//! `move_generation` (enumeration, checks, application, perft). `engines`
//! and `utils` are the callers' side: simple move choosers, a text move
//! notation and a self-play match harness.

pub mod quoridor_errors;

pub mod game_state {
    pub mod board;
    pub mod board_rules;
    pub mod board_types;
    pub mod point;
    pub mod wall;
    pub mod wall_grid;
    pub mod wall_inventory;
}

pub mod moves {
    pub mod move_description;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_step;
    pub mod legal_moves_wall;
    pub mod move_generator;
    pub mod perft;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod move_notation;
}
