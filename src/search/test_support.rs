//! Test fixtures for the search modules: a hand-built game tree with exact
//! search shapes, and seeded random Othello positions.

use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::board::board_engine::{BoardEngine, OthelloRules};
use crate::board::board_types::{Color, Move};
use crate::board::othello_board::Board;

/// Game tree whose boards are plain node ids.
#[derive(Debug, Default)]
pub(crate) struct ScriptedGame {
    edges: HashMap<(u32, Color), Vec<(Move, u32)>>,
    scores: HashMap<u32, (u32, u32)>,
    expansions: AtomicU64,
}

impl ScriptedGame {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a move for `color` from `from` to `to`, appended to the move order.
    pub(crate) fn edge(mut self, from: u32, color: Color, mv: (usize, usize), to: u32) -> Self {
        self.edges
            .entry((from, color))
            .or_default()
            .push((Move::new(mv.0, mv.1), to));
        self
    }

    pub(crate) fn score(mut self, node: u32, first: u32, second: u32) -> Self {
        self.scores.insert(node, (first, second));
        self
    }

    /// Number of `apply_move` calls so far.
    pub(crate) fn expansions(&self) -> u64 {
        self.expansions.load(Ordering::Relaxed)
    }
}

impl BoardEngine for ScriptedGame {
    type Board = u32;

    fn legal_moves(&self, board: &u32, color: Color) -> Vec<Move> {
        self.edges
            .get(&(*board, color))
            .map(|moves| moves.iter().map(|(mv, _)| *mv).collect())
            .unwrap_or_default()
    }

    fn apply_move(&self, board: &u32, color: Color, mv: Move) -> u32 {
        self.expansions.fetch_add(1, Ordering::Relaxed);
        self.edges
            .get(&(*board, color))
            .and_then(|moves| moves.iter().find(|(m, _)| *m == mv))
            .map(|(_, to)| *to)
            .unwrap_or_else(|| panic!("no scripted move {mv} for {color:?} at node {board}"))
    }

    fn score(&self, board: &u32) -> (u32, u32) {
        self.scores.get(board).copied().unwrap_or((0, 0))
    }
}

/// `count` positions reached by a random number of random plies (drawn from
/// `plies`) from the opening, each paired with a side to move that has at
/// least one legal move.
pub(crate) fn random_positions(
    size: usize,
    count: usize,
    plies: RangeInclusive<usize>,
    seed: u64,
) -> Vec<(Board, Color)> {
    let rules = OthelloRules;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(count);

    while out.len() < count {
        let mut board = Board::new_game(size).expect("valid size");
        let mut mover = Some(Color::First);
        let ply_count = rng.random_range(plies.clone());

        for _ in 0..ply_count {
            let Some(color) = mover else {
                break;
            };
            let moves = rules.legal_moves(&board, color);
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };
            board = rules.apply_move(&board, color, mv);
            mover = rules.next_to_move(&board, color);
        }

        if let Some(color) = mover {
            out.push((board, color));
        }
    }

    out
}
