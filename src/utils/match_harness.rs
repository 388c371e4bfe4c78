//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other without the manager
//! protocol, with an optional seeded random opening prefix. Passes are
//! handled here: a side with no legal move is skipped, and the game ends when
//! neither side can move.

use std::time::Instant;

use log::info;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::board::board_engine::{BoardEngine, OthelloRules};
use crate::board::board_types::{Color, Move};
use crate::board::othello_board::Board;
use crate::engines::engine_trait::Engine;
use crate::errors::BoardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    FirstWins,
    SecondWins,
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, color: Color },
    Draw,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub board_size: usize,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            opening_min_plies: 0,
            opening_max_plies: 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub final_score: (u32, u32),
    pub opening_moves: Vec<Move>,
    pub played_moves: Vec<(Color, Move)>,
    pub passes: u32,
    pub first_move_count: u32,
    pub second_move_count: u32,
    pub first_total_time_ns: u128,
    pub second_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_disk_margin: i64,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_disk_margin={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_disk_margin,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play a single seeded match. `engine_first` moves first.
pub fn play_engine_match(
    mut engine_first: Box<dyn Engine>,
    mut engine_second: Box<dyn Engine>,
    seed: u64,
    config: &MatchConfig,
) -> Result<MatchResult, BoardError> {
    let rules = OthelloRules;
    engine_first.new_game();
    engine_second.new_game();

    let (mut board, mut to_move, opening_moves) = apply_seeded_random_opening(
        Board::new_game(config.board_size)?,
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    );

    let mut played_moves = Vec::new();
    let mut passes = 0u32;
    let mut first_move_count = 0u32;
    let mut second_move_count = 0u32;
    let mut first_total_time_ns = 0u128;
    let mut second_total_time_ns = 0u128;

    while let Some(mover) = to_move {
        let legal_moves = rules.legal_moves(&board, mover);
        // `to_move` only ever names a side with a legal move.
        let Some(&fallback) = legal_moves.first() else {
            break;
        };

        let started = Instant::now();
        let out = match mover {
            Color::First => engine_first.choose_move(&board, mover),
            Color::Second => engine_second.choose_move(&board, mover),
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::First => {
                first_move_count = first_move_count.saturating_add(1);
                first_total_time_ns = first_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Second => {
                second_move_count = second_move_count.saturating_add(1);
                second_total_time_ns = second_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out.best_move.unwrap_or(fallback);
        board = rules.play(&board, mover, chosen)?;
        played_moves.push((mover, chosen));

        to_move = rules.next_to_move(&board, mover);
        if to_move == Some(mover) {
            passes += 1;
        }
    }

    let final_score = rules.score(&board);
    let outcome = match final_score.0.cmp(&final_score.1) {
        std::cmp::Ordering::Greater => MatchOutcome::FirstWins,
        std::cmp::Ordering::Less => MatchOutcome::SecondWins,
        std::cmp::Ordering::Equal => MatchOutcome::Draw,
    };

    Ok(MatchResult {
        outcome,
        final_board: board,
        final_score,
        opening_moves,
        played_moves,
        passes,
        first_move_count,
        second_move_count,
        first_total_time_ns,
        second_total_time_ns,
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colors are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, BoardError>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_first = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));

        let result = if player1_is_first {
            play_engine_match(player1_factory(), player2_factory(), seed, &config.per_game)?
        } else {
            play_engine_match(player2_factory(), player1_factory(), seed, &config.per_game)?
        };

        let (p1_color, p1_moves, p2_moves, p1_ns, p2_ns) = if player1_is_first {
            (
                Color::First,
                result.first_move_count,
                result.second_move_count,
                result.first_total_time_ns,
                result.second_total_time_ns,
            )
        } else {
            (
                Color::Second,
                result.second_move_count,
                result.first_move_count,
                result.second_total_time_ns,
                result.first_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let (first, second) = result.final_score;
        let margin = i64::from(first) - i64::from(second);
        stats.player1_disk_margin += if player1_is_first { margin } else { -margin };

        let winner_color = match result.outcome {
            MatchOutcome::FirstWins => Some(Color::First),
            MatchOutcome::SecondWins => Some(Color::Second),
            MatchOutcome::Draw => None,
        };
        let mapped = match winner_color {
            Some(color) if color == p1_color => {
                stats.player1_wins += 1;
                SeriesOutcome::PlayerWin {
                    player: PlayerId::Player1,
                    color,
                }
            }
            Some(color) => {
                stats.player2_wins += 1;
                SeriesOutcome::PlayerWin {
                    player: PlayerId::Player2,
                    color,
                }
            }
            None => {
                stats.draws += 1;
                SeriesOutcome::Draw
            }
        };
        stats.outcomes.push(mapped);

        if config.verbose {
            info!(
                "[series] game {}/{} seed={} player1={:?} score={}-{} result={:?}",
                i + 1,
                config.games,
                seed,
                p1_color,
                first,
                second,
                mapped
            );
        }
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

/// Random prefix of `min..=max` plies. Returns the board, the side to move
/// next (`None` if the game already ended) and the moves played.
fn apply_seeded_random_opening(
    initial: Board,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> (Board, Option<Color>, Vec<Move>) {
    let rules = OthelloRules;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = initial;
    let mut to_move = Some(Color::First);
    let mut opening_moves = Vec::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        let Some(mover) = to_move else {
            break;
        };
        let legal_moves = rules.legal_moves(&board, mover);
        let Some(&chosen) = legal_moves.choose(&mut rng) else {
            break;
        };
        board = rules.apply_move(&board, mover, chosen);
        opening_moves.push(chosen);
        to_move = rules.next_to_move(&board, mover);
    }

    (board, to_move, opening_moves)
}

#[cfg(test)]
mod tests {
    use super::{
        play_engine_match, play_engine_match_series, MatchConfig, MatchOutcome, MatchSeriesConfig,
    };
    use crate::board::board_engine::{BoardEngine, OthelloRules};
    use crate::engines::engine_greedy::GreedyEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_search::SearchPlayer;
    use crate::search::search_config::{Algorithm, SearchConfig};
    use crate::search::search_types::DepthLimit;

    #[test]
    fn random_vs_greedy_plays_to_completion() {
        let result = play_engine_match(
            Box::new(RandomEngine::with_seed(1)),
            Box::new(GreedyEngine::with_seed(2)),
            42,
            &MatchConfig {
                board_size: 6,
                opening_min_plies: 2,
                opening_max_plies: 4,
            },
        )
        .expect("match should run");

        assert!(!result.opening_moves.is_empty());
        assert!(result.first_move_count + result.second_move_count > 0);
        assert!(OthelloRules.is_game_over(&result.final_board));
        assert_eq!(result.final_score, OthelloRules.score(&result.final_board));
        let expected = match result.final_score.0.cmp(&result.final_score.1) {
            std::cmp::Ordering::Greater => MatchOutcome::FirstWins,
            std::cmp::Ordering::Less => MatchOutcome::SecondWins,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        };
        assert_eq!(result.outcome, expected);
    }

    #[test]
    fn series_with_search_players_aggregates_every_game() {
        let stats = play_engine_match_series(
            || {
                Box::new(SearchPlayer::new(SearchConfig {
                    depth_limit: DepthLimit::Limited(2),
                    algorithm: Algorithm::AlphaBeta,
                    caching: true,
                    ordering: true,
                }))
            },
            || Box::new(RandomEngine::with_seed(5)),
            MatchSeriesConfig {
                games: 3,
                base_seed: 777,
                per_game: MatchConfig {
                    board_size: 6,
                    opening_min_plies: 0,
                    opening_max_plies: 2,
                },
                verbose: false,
            },
        )
        .expect("series should run");

        assert_eq!(stats.games, 3);
        assert_eq!(stats.outcomes.len(), 3);
        assert_eq!(stats.player1_wins + stats.player2_wins + stats.draws, 3);
        assert!(stats.player1_moves > 0);
        assert!(stats.overall_avg_move_time_ms >= 0.0);
        assert!(stats.report().starts_with("games=3 "));
    }
}
