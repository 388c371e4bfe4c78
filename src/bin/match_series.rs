//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin match_series`
//! `cargo run --release --bin match_series -- --games 20 --depth 4 --verbose`

use clap::Parser;
use log::info;

use othello_search::engines::engine_greedy::GreedyEngine;
use othello_search::engines::engine_trait::Engine;
use othello_search::engines::engine_search::SearchPlayer;
use othello_search::search::search_config::{Algorithm, SearchConfig};
use othello_search::search::search_types::DepthLimit;
use othello_search::utils::match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play a seeded series of search player vs greedy engine", long_about = None)]
struct Args {
    #[arg(long, default_value_t = 10)]
    games: u16,

    #[arg(long, default_value_t = 1234)]
    seed: u64,

    #[arg(long, default_value_t = 8)]
    board_size: usize,

    /// Depth limit for the search player (negative = unlimited)
    #[arg(long, default_value_t = 3, allow_hyphen_values = true)]
    depth: i64,

    /// Use plain minimax instead of alpha-beta
    #[arg(long)]
    minimax: bool,

    #[arg(long)]
    no_caching: bool,

    #[arg(long)]
    no_ordering: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let search_config = SearchConfig {
        depth_limit: DepthLimit::from_signed(args.depth),
        algorithm: if args.minimax {
            Algorithm::Minimax
        } else {
            Algorithm::AlphaBeta
        },
        caching: !args.no_caching,
        ordering: !args.no_ordering,
    };
    info!(
        "player1: {} depth {:?} caching {} ordering {}; player2: greedy",
        search_config.algorithm, search_config.depth_limit, search_config.caching, search_config.ordering
    );

    // Swap these factories to compare other engines or configurations.
    let player1 = || Box::new(SearchPlayer::new(search_config)) as Box<dyn Engine>;
    let player2 = || Box::new(GreedyEngine::new()) as Box<dyn Engine>;

    let stats = play_engine_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games: args.games,
            base_seed: args.seed,
            per_game: MatchConfig {
                board_size: args.board_size,
                opening_min_plies: 0,
                opening_max_plies: 4,
            },
            verbose: args.verbose,
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
