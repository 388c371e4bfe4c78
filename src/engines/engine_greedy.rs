//! One-ply greedy mover: maximizes the disk differential right after its own
//! move, breaking ties at random.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::board::board_engine::{BoardEngine, OthelloRules};
use crate::board::board_types::Color;
use crate::board::othello_board::Board;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::search::utility::utility;

pub struct GreedyEngine {
    rules: OthelloRules,
    rng: StdRng,
}

impl GreedyEngine {
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

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn choose_move(&mut self, board: &Board, color: Color) -> EngineOutput {
        let legal_moves = self.rules.legal_moves(board, color);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("greedy_engine legal_moves {}", legal_moves.len()));

        let mut best_value = i32::MIN;
        let mut best_moves = Vec::new();
        for mv in legal_moves {
            let next = self.rules.apply_move(board, color, mv);
            let value = utility(&self.rules, &next, color);
            if value > best_value {
                best_value = value;
                best_moves.clear();
                best_moves.push(mv);
            } else if value == best_value {
                best_moves.push(mv);
            }
        }

        out.best_move = best_moves.as_slice().choose(&mut self.rng).copied();
        if out.best_move.is_some() {
            out.info_lines
                .push(format!("greedy_engine disk_differential {best_value}"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::GreedyEngine;
    use crate::board::board_types::{Color, Move};
    use crate::board::othello_board::Board;
    use crate::engines::engine_trait::Engine;

    #[test]
    fn takes_the_largest_immediate_flip() {
        // (0, 3) flips two disks, (2, 2) flips one.
        let board = Board::from_rows(&[[1, 0, 0, 0], [2, 2, 2, 0], [2, 0, 0, 0], [0, 0, 0, 0]])
            .expect("valid board");
        let out = GreedyEngine::with_seed(3).choose_move(&board, Color::First);
        assert_eq!(out.best_move, Some(Move::new(0, 3)));
    }
}
