//! Engine backed by the minimax / alpha-beta search.
//!
//! The transposition cache survives across `choose_move` calls for the
//! lifetime of the engine, as it does across turns of a manager session.
//! `new_game` empties it.

use crate::board::board_engine::OthelloRules;
use crate::board::board_types::Color;
use crate::board::othello_board::Board;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::search::search_config::SearchConfig;
use crate::search::search_engine::SearchEngine;
use crate::search::utility::BoardEvaluator;

pub struct SearchPlayer {
    search: SearchEngine<OthelloRules>,
    config: SearchConfig,
}

impl SearchPlayer {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            search: SearchEngine::new(OthelloRules),
            config,
        }
    }

    pub fn with_evaluator(config: SearchConfig, evaluator: Box<dyn BoardEvaluator<OthelloRules>>) -> Self {
        Self {
            search: SearchEngine::with_evaluator(OthelloRules, evaluator),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[inline]
    pub fn search(&self) -> &SearchEngine<OthelloRules> {
        &self.search
    }
}

impl Engine for SearchPlayer {
    fn name(&self) -> &str {
        "Search"
    }

    fn new_game(&mut self) {
        self.search.reset_cache();
    }

    fn choose_move(&mut self, board: &Board, color: Color) -> EngineOutput {
        let best_move = self.search.select_move(board, color, &self.config);
        let stats = self.search.stats();

        let mut out = EngineOutput {
            best_move,
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "search algorithm {} depth {:?} caching {} ordering {} evaluator {}",
            self.config.algorithm,
            self.config.depth_limit,
            self.config.caching,
            self.config.ordering,
            self.search.evaluator_name()
        ));
        out.info_lines.push(format!(
            "search nodes {} leaves {} cutoffs {} cache_hits {} cache_size {}",
            stats.nodes,
            stats.leaves,
            stats.cutoffs,
            stats.cache_hits,
            self.search.cache().len()
        ));
        out
    }
}
