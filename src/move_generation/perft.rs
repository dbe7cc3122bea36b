//! Move-tree node counting.
//!
//! Walks every line of play to a fixed depth, alternating players each ply,
//! and counts the leaf moves by kind. Used to pin down generator behaviour in
//! tests and as the benchmark workload.

use std::sync::Arc;
use std::thread;

use crate::game_state::board_types::{Board, Player};
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_description::Move;
use crate::quoridor_errors::QuoridorErrors;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub steps: usize,
    pub wall_placements: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.steps += rhs.steps;
        self.wall_placements += rhs.wall_placements;
    }
}

pub fn perft<G: MoveGenerator + ?Sized>(
    generator: &G,
    board: &Board,
    player: Player,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_moves(board, player) {
        perft_recurse(generator, board, mv, depth, 1, &mut total);
    }
    total
}

/// Same counts as [`perft`], with one worker thread per root move. Each
/// worker owns a copy of the board. A panicking worker surfaces as
/// `QuoridorErrors::WorkerPanicked`.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    board: &Board,
    player: Player,
    depth: u8,
) -> Result<PerftCounts, QuoridorErrors> {
    if depth == 0 {
        return Ok(perft(generator.as_ref(), board, player, 0));
    }

    let root_moves = generator.generate_moves(board, player);
    let mut handles = Vec::with_capacity(root_moves.len());
    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        let root = *board;
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            perft_recurse(generator_ref.as_ref(), &root, mv, depth, 1, &mut local);
            local
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let counts = handle
            .join()
            .map_err(|_| QuoridorErrors::WorkerPanicked {
                task: "perft".to_owned(),
            })?;
        total.merge(counts);
    }
    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    board: &Board,
    mv: Move,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    if current_depth == search_depth {
        counts.nodes += 1;
        if mv.is_step() {
            counts.steps += 1;
        } else {
            counts.wall_placements += 1;
        }
        return;
    }

    let mut next = *board;
    next.apply_move(mv);
    let reply_player = mv.player.opponent();
    for child in generator.generate_moves(&next, reply_player) {
        perft_recurse(
            generator,
            &next,
            child,
            search_depth,
            current_depth + 1,
            counts,
        );
    }
}
