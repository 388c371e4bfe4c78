//! Uniform random mover. Baseline opponent for match series and diagnostics.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::board::board_engine::{BoardEngine, OthelloRules};
use crate::board::board_types::Color;
use crate::board::othello_board::Board;
use crate::engines::engine_trait::{Engine, EngineOutput};

pub struct RandomEngine {
    rules: OthelloRules,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rules: OthelloRules,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rules: OthelloRules,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, board: &Board, color: Color) -> EngineOutput {
        let legal_moves = self.rules.legal_moves(board, color);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", legal_moves.len()));
        out.best_move = legal_moves.as_slice().choose(&mut self.rng).copied();
        out
    }
}
