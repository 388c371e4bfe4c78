//! Plain depth-limited minimax.

use crate::board::board_engine::BoardEngine;
use crate::board::board_types::{Color, Move};
use crate::search::search_engine::{improves, SearchEngine};
use crate::search::search_types::{DepthLimit, NodeOutcome};
use crate::search::utility::utility;

impl<E: BoardEngine> SearchEngine<E> {
    /// Evaluate one node. Max nodes move `search_color`, min nodes move its
    /// opponent; values are always from `search_color`'s side.
    pub(crate) fn minimax_node(
        &mut self,
        board: &E::Board,
        search_color: Color,
        depth: DepthLimit,
        caching: bool,
        maximizing: bool,
    ) -> NodeOutcome {
        self.stats.nodes += 1;

        let mover = if maximizing {
            search_color
        } else {
            search_color.opponent()
        };
        let moves = self.rules.legal_moves(board, mover);
        if let Some(leaf) = self.leaf_outcome(board, search_color, !moves.is_empty(), depth) {
            return leaf;
        }

        let mut best: Option<(Move, i32)> = None;
        for mv in moves {
            let value = self.successor_value(board, mover, mv, caching, move |engine, next| {
                engine
                    .minimax_node(next, search_color, depth.decrement(), caching, !maximizing)
                    .value()
            });
            if improves(maximizing, value, best.map(|(_, v)| v)) {
                best = Some((mv, value));
            }
        }

        match best {
            Some((mv, value)) => NodeOutcome::Best { mv, value },
            None => NodeOutcome::Leaf {
                value: utility(&self.rules, board, search_color),
            },
        }
    }
}
