//! Head-to-head engine match harness for local testing.
//!
//! Plays two `Engine` implementations against each other from the standard
//! start. Every move goes through `Board::try_apply_move`, so a buggy engine
//! surfaces as an error instead of a corrupted board. The harness owns the
//! win condition: a piece standing on its goal row ends the game.

use std::time::Instant;

use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::engines::engine_trait::Engine;
use crate::game_state::board_types::{Board, Player};
use crate::quoridor_errors::QuoridorErrors;
use crate::utils::move_notation::move_to_notation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    PlayerOneReachedGoal,
    PlayerTwoReachedGoal,
    DrawMaxPlies,
}

impl MatchOutcome {
    pub fn winner(self) -> Option<Player> {
        match self {
            MatchOutcome::PlayerOneReachedGoal => Some(Player::One),
            MatchOutcome::PlayerTwoReachedGoal => Some(Player::Two),
            MatchOutcome::DrawMaxPlies => None,
        }
    }

    fn reached_goal(player: Player) -> Self {
        match player {
            Player::One => MatchOutcome::PlayerOneReachedGoal,
            Player::Two => MatchOutcome::PlayerTwoReachedGoal,
        }
    }
}

/// Which of the two engines handed to a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineSlot {
    First,
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    EngineWin { engine: EngineSlot, seat: Player },
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub first_player: Player,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            first_player: Player::One,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub played_moves: Vec<String>,
    // [player]
    pub move_counts: [u32; 2],
    pub total_time_ns: [u128; 2],
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl MatchResult {
    pub fn plies(&self) -> usize {
        self.played_moves.len()
    }

    pub fn wall_clock_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    /// Seat the engines by coin flip each game instead of always giving the
    /// first engine player one.
    pub randomize_seats: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
            randomize_seats: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub engine_one_wins: u16,
    pub engine_two_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub total_plies: u64,
    pub engine_one_moves: u32,
    pub engine_two_moves: u32,
    pub engine_one_total_time_ns: u128,
    pub engine_two_total_time_ns: u128,
    pub engine_one_avg_move_time_ms: f64,
    pub engine_two_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} engine_one_wins={} engine_two_wins={} draws={} avg_plies={:.1} e1_avg_ms={:.3} e2_avg_ms={:.3}",
            self.games,
            self.engine_one_wins,
            self.engine_two_wins,
            self.draws,
            if self.games == 0 {
                0.0
            } else {
                self.total_plies as f64 / f64::from(self.games)
            },
            self.engine_one_avg_move_time_ms,
            self.engine_two_avg_move_time_ms
        )
    }
}

/// `true` when `player`'s piece stands on its goal row.
pub fn has_reached_goal(board: &Board, player: Player) -> bool {
    board.player_position(player).y() == player.goal_row()
}

/// Play one game. `engine_one` plays the player one seat.
pub fn play_engine_match(
    engine_one: &mut dyn Engine,
    engine_two: &mut dyn Engine,
    config: &MatchConfig,
) -> Result<MatchResult, QuoridorErrors> {
    engine_one.new_game();
    engine_two.new_game();

    let started_at = Utc::now();
    let mut board = Board::new();
    let mut mover = config.first_player;
    let mut played_moves = Vec::<String>::new();
    let mut move_counts = [0u32; 2];
    let mut total_time_ns = [0u128; 2];
    let mut outcome = MatchOutcome::DrawMaxPlies;

    for ply in 0..config.max_plies {
        let engine: &mut dyn Engine = match mover {
            Player::One => &mut *engine_one,
            Player::Two => &mut *engine_two,
        };

        let started = Instant::now();
        let out = engine.choose_move(&board, mover)?;
        let elapsed_ns = started.elapsed().as_nanos();
        move_counts[mover.index()] = move_counts[mover.index()].saturating_add(1);
        total_time_ns[mover.index()] = total_time_ns[mover.index()].saturating_add(elapsed_ns);

        let chosen = out
            .best_move
            .ok_or(QuoridorErrors::NoAvailableMoves { player: mover })?;
        if chosen.player != mover {
            return Err(QuoridorErrors::IllegalMove { mv: chosen });
        }
        board.try_apply_move(chosen)?;

        let notation = move_to_notation(&chosen);
        debug!(ply, player = %mover, engine = engine.name(), %notation, "ply played");
        played_moves.push(notation);

        if has_reached_goal(&board, mover) {
            outcome = MatchOutcome::reached_goal(mover);
            break;
        }
        mover = mover.opponent();
    }

    Ok(MatchResult {
        outcome,
        final_board: board,
        played_moves,
        move_counts,
        total_time_ns,
        started_at,
        finished_at: Utc::now(),
    })
}

/// Play a series of seeded games and aggregate win/loss/draw statistics.
///
/// Each factory receives the per-game seed. Seating is deterministic from
/// `base_seed`.
pub fn play_engine_match_series<F1, F2>(
    engine_one_factory: F1,
    engine_two_factory: F2,
    config: &MatchSeriesConfig,
) -> Result<MatchSeriesStats, QuoridorErrors>
where
    F1: Fn(u64) -> Result<Box<dyn Engine>, QuoridorErrors>,
    F2: Fn(u64) -> Result<Box<dyn Engine>, QuoridorErrors>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut seat_rng = StdRng::seed_from_u64(config.base_seed ^ 0x5EA7_0F0E_C0FF_EE00);

    for game in 0..config.games {
        let seed = config.base_seed.wrapping_add(u64::from(game));
        let engine_one_seat = if config.randomize_seats && seat_rng.random_bool(0.5) {
            Player::Two
        } else {
            Player::One
        };

        let mut engine_one = engine_one_factory(seed)?;
        let mut engine_two = engine_two_factory(seed.wrapping_mul(31).wrapping_add(7))?;

        let per_game = &config.per_game;
        let result = match engine_one_seat {
            Player::One => play_engine_match(engine_one.as_mut(), engine_two.as_mut(), per_game)?,
            Player::Two => play_engine_match(engine_two.as_mut(), engine_one.as_mut(), per_game)?,
        };

        let engine_two_seat = engine_one_seat.opponent();
        stats.total_plies += result.plies() as u64;
        stats.engine_one_moves += result.move_counts[engine_one_seat.index()];
        stats.engine_two_moves += result.move_counts[engine_two_seat.index()];
        stats.engine_one_total_time_ns += result.total_time_ns[engine_one_seat.index()];
        stats.engine_two_total_time_ns += result.total_time_ns[engine_two_seat.index()];

        let series_outcome = match result.outcome.winner() {
            Some(seat) if seat == engine_one_seat => {
                stats.engine_one_wins += 1;
                SeriesOutcome::EngineWin {
                    engine: EngineSlot::First,
                    seat,
                }
            }
            Some(seat) => {
                stats.engine_two_wins += 1;
                SeriesOutcome::EngineWin {
                    engine: EngineSlot::Second,
                    seat,
                }
            }
            None => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(series_outcome);

        info!(
            game = game + 1,
            games = config.games,
            seed,
            engine_one = engine_one.name(),
            engine_one_seat = %engine_one_seat,
            outcome = ?result.outcome,
            plies = result.plies(),
            wall_clock_ms = result.wall_clock_ms(),
            "game finished"
        );
    }

    stats.engine_one_avg_move_time_ms =
        avg_ms(stats.engine_one_total_time_ns, stats.engine_one_moves);
    stats.engine_two_avg_move_time_ms =
        avg_ms(stats.engine_two_total_time_ns, stats.engine_two_moves);
    Ok(stats)
}

fn avg_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        total_ns as f64 / f64::from(moves) / 1_000_000.0
    }
}
