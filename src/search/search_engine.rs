//! Search engine entry points.
//!
//! `SearchEngine` owns the board engine, the cutoff evaluator and the
//! transposition cache. The cache lives as long as the engine instance and is
//! only emptied by `reset_cache`, so consecutive searches share it. The node
//! routines themselves live in `minimax.rs` and `alpha_beta.rs`.
//!
//! Precondition for both `select_move_*` calls: the depth limit must not be
//! `Limited(0)`. A zero limit turns the root into a leaf and yields `None`.

use log::debug;

use crate::board::board_engine::BoardEngine;
use crate::board::board_types::{Color, Move};
use crate::search::search_config::{Algorithm, SearchConfig};
use crate::search::search_types::{Bound, DepthLimit, NodeOutcome, SearchStats};
use crate::search::transposition_cache::TranspositionCache;
use crate::search::utility::{utility, BoardEvaluator, DiskDifferential};

pub struct SearchEngine<E: BoardEngine> {
    pub(crate) rules: E,
    pub(crate) evaluator: Box<dyn BoardEvaluator<E>>,
    pub(crate) cache: TranspositionCache<E::Board>,
    pub(crate) stats: SearchStats,
}

impl<E: BoardEngine> SearchEngine<E> {
    pub fn new(rules: E) -> Self {
        Self::with_evaluator(rules, Box::new(DiskDifferential))
    }

    pub fn with_evaluator(rules: E, evaluator: Box<dyn BoardEvaluator<E>>) -> Self {
        Self {
            rules,
            evaluator,
            cache: TranspositionCache::new(),
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn rules(&self) -> &E {
        &self.rules
    }

    #[inline]
    pub fn evaluator_name(&self) -> &'static str {
        self.evaluator.name()
    }

    #[inline]
    pub fn cache(&self) -> &TranspositionCache<E::Board> {
        &self.cache
    }

    /// Statistics of the most recent search.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_cache(&mut self) {
        self.cache.clear();
    }

    pub fn select_move_minimax(
        &mut self,
        board: &E::Board,
        color: Color,
        depth_limit: DepthLimit,
        caching: bool,
    ) -> Option<Move> {
        self.minimax_root(board, color, depth_limit, caching)
            .best_move()
    }

    pub fn select_move_alphabeta(
        &mut self,
        board: &E::Board,
        color: Color,
        depth_limit: DepthLimit,
        caching: bool,
        ordering: bool,
    ) -> Option<Move> {
        self.alphabeta_root(board, color, depth_limit, caching, ordering)
            .best_move()
    }

    /// Dispatch on `config.algorithm`.
    pub fn select_move(
        &mut self,
        board: &E::Board,
        color: Color,
        config: &SearchConfig,
    ) -> Option<Move> {
        match config.algorithm {
            Algorithm::Minimax => {
                self.select_move_minimax(board, color, config.depth_limit, config.caching)
            }
            Algorithm::AlphaBeta => self.select_move_alphabeta(
                board,
                color,
                config.depth_limit,
                config.caching,
                config.ordering,
            ),
        }
    }

    /// Root max node of a minimax search, with its value.
    pub fn minimax_root(
        &mut self,
        board: &E::Board,
        color: Color,
        depth_limit: DepthLimit,
        caching: bool,
    ) -> NodeOutcome {
        self.stats = SearchStats::default();
        let outcome = self.minimax_node(board, color, depth_limit, caching, true);
        self.log_search("minimax", outcome);
        outcome
    }

    /// Root max node of an alpha-beta search, with its value.
    pub fn alphabeta_root(
        &mut self,
        board: &E::Board,
        color: Color,
        depth_limit: DepthLimit,
        caching: bool,
        ordering: bool,
    ) -> NodeOutcome {
        self.stats = SearchStats::default();
        let outcome = self.alphabeta_node(
            board,
            color,
            Bound::NegativeExtreme,
            Bound::PositiveExtreme,
            depth_limit,
            caching,
            ordering,
            true,
        );
        self.log_search("alpha-beta", outcome);
        outcome
    }

    /// Leaf value when the mover has no moves or the depth budget is spent.
    pub(crate) fn leaf_outcome(
        &mut self,
        board: &E::Board,
        search_color: Color,
        has_moves: bool,
        depth: DepthLimit,
    ) -> Option<NodeOutcome> {
        let value = if !has_moves {
            utility(&self.rules, board, search_color)
        } else if depth.is_exhausted() {
            self.evaluator.evaluate(&self.rules, board, search_color)
        } else {
            return None;
        };
        self.stats.leaves += 1;
        Some(NodeOutcome::Leaf { value })
    }

    /// Value of the board reached by `mover` playing `mv`, through the cache
    /// when `caching` is on. `recurse` evaluates the successor on a miss.
    pub(crate) fn successor_value<F>(
        &mut self,
        board: &E::Board,
        mover: Color,
        mv: Move,
        caching: bool,
        recurse: F,
    ) -> i32
    where
        F: FnOnce(&mut Self, &E::Board) -> i32,
    {
        let next = self.rules.apply_move(board, mover, mv);
        if !caching {
            return recurse(self, &next);
        }
        if let Some(value) = self.cache.probe(&next) {
            self.stats.cache_hits += 1;
            return value;
        }
        let value = recurse(self, &next);
        self.cache.store(next, value);
        value
    }

    fn log_search(&self, algorithm: &str, outcome: NodeOutcome) {
        debug!(
            "{algorithm} value={} move={:?} nodes={} leaves={} cutoffs={} cache_hits={} cache_size={}",
            outcome.value(),
            outcome.best_move(),
            self.stats.nodes,
            self.stats.leaves,
            self.stats.cutoffs,
            self.stats.cache_hits,
            self.cache.len()
        );
    }
}

/// Whether `value` replaces the running best at a max or min node.
/// Strict comparison: the first of several equal moves is kept.
#[inline]
pub(crate) fn improves(maximizing: bool, value: i32, best: Option<i32>) -> bool {
    match best {
        None => true,
        Some(best) if maximizing => value > best,
        Some(best) => value < best,
    }
}
