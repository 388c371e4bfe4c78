//! Leaf evaluation: the disk-differential utility and pluggable cutoff
//! evaluators.
//!
//! Values are always taken from the searching player's point of view, never
//! the side to move at the node, so max and min nodes agree on "better".

use crate::board::board_engine::BoardEngine;
use crate::board::board_types::Color;

/// `count(color) - count(opponent)`.
pub fn utility<E: BoardEngine>(engine: &E, board: &E::Board, color: Color) -> i32 {
    let (first, second) = engine.score(board);
    let (own, other) = match color {
        Color::First => (first, second),
        Color::Second => (second, first),
    };
    own as i32 - other as i32
}

/// Depth-cutoff evaluation strategy injected into the search engine.
///
/// Terminal boards are always scored with [`utility`]; the evaluator only
/// replaces it when the depth budget runs out on a board that still has moves.
pub trait BoardEvaluator<E: BoardEngine>: Send + Sync {
    fn name(&self) -> &'static str;

    fn evaluate(&self, engine: &E, board: &E::Board, color: Color) -> i32;
}

/// Baseline evaluator: plain disk differential.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskDifferential;

impl<E: BoardEngine> BoardEvaluator<E> for DiskDifferential {
    fn name(&self) -> &'static str {
        "disks"
    }

    #[inline]
    fn evaluate(&self, engine: &E, board: &E::Board, color: Color) -> i32 {
        utility(engine, board, color)
    }
}

/// Placeholder for a positional heuristic. Always 0.
///
/// Every cutoff board ties, so the first enumerated move wins unless a
/// terminal board is reachable within the horizon. Results then depend on
/// the board engine's move order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<E: BoardEngine> BoardEvaluator<E> for ZeroHeuristic {
    fn name(&self) -> &'static str {
        "zero"
    }

    #[inline]
    fn evaluate(&self, _engine: &E, _board: &E::Board, _color: Color) -> i32 {
        0
    }
}

/// Runtime choice of cutoff evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluatorKind {
    #[default]
    Disks,
    Zero,
}

impl EvaluatorKind {
    pub fn boxed<E: BoardEngine>(self) -> Box<dyn BoardEvaluator<E>> {
        match self {
            EvaluatorKind::Disks => Box::new(DiskDifferential),
            EvaluatorKind::Zero => Box::new(ZeroHeuristic),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::seq::IndexedRandom;
    use rand::SeedableRng;

    use super::{utility, BoardEvaluator, DiskDifferential, ZeroHeuristic};
    use crate::board::board_engine::{BoardEngine, OthelloRules};
    use crate::board::board_types::Color;
    use crate::board::othello_board::Board;

    #[test]
    fn utility_is_score_difference_on_reachable_boards() {
        let rules = OthelloRules;
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::standard();
        let mut mover = Color::First;

        loop {
            let (first, second) = rules.score(&board);
            assert_eq!(
                utility(&rules, &board, Color::First),
                first as i32 - second as i32
            );
            assert_eq!(
                utility(&rules, &board, Color::Second),
                second as i32 - first as i32
            );

            let moves = rules.legal_moves(&board, mover);
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };
            board = rules.apply_move(&board, mover, mv);
            match rules.next_to_move(&board, mover) {
                Some(next) => mover = next,
                None => break,
            }
        }
    }

    #[test]
    fn evaluators_follow_their_contracts() {
        let rules = OthelloRules;
        let board = Board::from_rows(&[
            [1, 1, 1, 0],
            [0, 2, 1, 0],
            [0, 1, 2, 0],
            [0, 0, 0, 0],
        ])
        .expect("valid board");
        assert_eq!(DiskDifferential.evaluate(&rules, &board, Color::First), 3);
        assert_eq!(DiskDifferential.evaluate(&rules, &board, Color::Second), -3);
        assert_eq!(ZeroHeuristic.evaluate(&rules, &board, Color::First), 0);
    }
}
