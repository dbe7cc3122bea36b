use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use quoridor_core::engines::engine_trait::{engine_from_name, ENGINE_NAMES};
use quoridor_core::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

/// Play a seeded engine-vs-engine series and print the aggregate result.
#[derive(Debug, Parser)]
#[command(name = "quoridor_core", version)]
struct Cli {
    /// Number of games to play.
    #[arg(long, default_value_t = 10)]
    games: u16,

    /// Base seed; game `i` uses `seed + i`.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Plies before a game is scored as a draw.
    #[arg(long, default_value_t = 200)]
    max_plies: u16,

    /// First engine (`random` or `greedy`).
    #[arg(long, default_value = "greedy")]
    player_one: String,

    /// Second engine (`random` or `greedy`).
    #[arg(long, default_value = "random")]
    player_two: String,

    /// Always seat the first engine as player one.
    #[arg(long)]
    fixed_seats: bool,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let config = MatchSeriesConfig {
        games: cli.games,
        base_seed: cli.seed,
        per_game: MatchConfig {
            max_plies: cli.max_plies,
            ..MatchConfig::default()
        },
        randomize_seats: !cli.fixed_seats,
    };

    let stats = play_engine_match_series(
        |seed| engine_from_name(&cli.player_one, seed),
        |seed| engine_from_name(&cli.player_two, seed),
        &config,
    );

    match stats {
        Ok(stats) => {
            println!("{}", stats.report());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, known_engines = ?ENGINE_NAMES, "series aborted");
            ExitCode::FAILURE
        }
    }
}
