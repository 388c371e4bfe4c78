//! Minimax with alpha-beta pruning and optional move ordering.
//!
//! The window narrows between siblings at the same node: each child is
//! searched with the node's current `(alpha, beta)`, and once they cross the
//! remaining siblings are skipped. With caching off the chosen move matches
//! plain minimax at the same depth; only the visited node count drops.

use crate::board::board_engine::BoardEngine;
use crate::board::board_types::{Color, Move};
use crate::search::move_ordering::order_moves;
use crate::search::search_engine::{improves, SearchEngine};
use crate::search::search_types::{Bound, DepthLimit, NodeOutcome};
use crate::search::utility::utility;

impl<E: BoardEngine> SearchEngine<E> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn alphabeta_node(
        &mut self,
        board: &E::Board,
        search_color: Color,
        mut alpha: Bound,
        mut beta: Bound,
        depth: DepthLimit,
        caching: bool,
        ordering: bool,
        maximizing: bool,
    ) -> NodeOutcome {
        self.stats.nodes += 1;

        let mover = if maximizing {
            search_color
        } else {
            search_color.opponent()
        };
        let mut moves = self.rules.legal_moves(board, mover);
        if let Some(leaf) = self.leaf_outcome(board, search_color, !moves.is_empty(), depth) {
            return leaf;
        }
        if ordering {
            moves = order_moves(&self.rules, board, search_color, mover, moves);
        }

        let mut best: Option<(Move, i32)> = None;
        for mv in moves {
            let value = self.successor_value(board, mover, mv, caching, move |engine, next| {
                engine
                    .alphabeta_node(
                        next,
                        search_color,
                        alpha,
                        beta,
                        depth.decrement(),
                        caching,
                        ordering,
                        !maximizing,
                    )
                    .value()
            });
            if improves(maximizing, value, best.map(|(_, v)| v)) {
                best = Some((mv, value));
            }

            let best_value = Bound::Finite(best.map_or(value, |(_, v)| v));
            if maximizing && best_value > alpha {
                alpha = best_value;
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            } else if !maximizing && best_value < beta {
                beta = best_value;
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
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

#[cfg(test)]
mod tests {
    use crate::board::board_engine::OthelloRules;
    use crate::board::board_types::{Color, Move};
    use crate::search::search_engine::SearchEngine;
    use crate::search::search_types::{DepthLimit, NodeOutcome};
    use crate::search::test_support::{random_positions, ScriptedGame};

    /// Root M1 leads to a min node worth +1, M2 to a min node worth +5.
    /// `m2_first_reply` is the value of M2's first enumerated reply.
    fn two_branch_game(m2_first_reply: u32) -> ScriptedGame {
        ScriptedGame::new()
            .edge(0, Color::First, (1, 0), 10)
            .edge(0, Color::First, (2, 0), 20)
            .edge(10, Color::Second, (1, 1), 11)
            .edge(10, Color::Second, (1, 2), 12)
            .edge(20, Color::Second, (2, 1), 21)
            .edge(20, Color::Second, (2, 2), 22)
            .edge(20, Color::Second, (2, 3), 23)
            .score(10, 1, 0)
            .score(20, 6, 0)
            .score(11, 1, 0)
            .score(12, 2, 0)
            .score(21, m2_first_reply, 0)
            .score(22, 6, 0)
            .score(23, 7, 0)
    }

    #[test]
    fn cutoff_skips_remaining_siblings_without_changing_the_move() {
        // M2's first reply (0) is already below alpha (1), so its other
        // replies are pruned.
        let mut minimax = SearchEngine::new(two_branch_game(0));
        let mut pruned = SearchEngine::new(two_branch_game(0));
        let expected = minimax.minimax_root(&0, Color::First, DepthLimit::Limited(2), false);
        let got = pruned.alphabeta_root(&0, Color::First, DepthLimit::Limited(2), false, false);

        assert_eq!(
            expected,
            NodeOutcome::Best {
                mv: Move::new(1, 0),
                value: 1
            }
        );
        assert_eq!(got.best_move(), expected.best_move());
        assert_eq!(got.value(), expected.value());
        assert_eq!(minimax.stats().nodes, 8);
        assert_eq!(pruned.stats().nodes, 6);
        assert_eq!(pruned.stats().cutoffs, 1);
    }

    #[test]
    fn ordering_visits_no_more_nodes_and_keeps_the_move() {
        let mut unordered = SearchEngine::new(two_branch_game(5));
        let mut ordered = SearchEngine::new(two_branch_game(5));
        let plain = unordered.select_move_alphabeta(&0, Color::First, DepthLimit::Unlimited, false, false);
        let sorted = ordered.select_move_alphabeta(&0, Color::First, DepthLimit::Unlimited, false, true);

        assert_eq!(plain, Some(Move::new(2, 0)));
        assert_eq!(sorted, plain);
        // Unordered: root, M1 + 2 replies, M2 + 3 replies.
        assert_eq!(unordered.stats().nodes, 8);
        // Ordered: M2 first raises alpha to 5, M1's first reply cuts.
        assert_eq!(ordered.stats().nodes, 7);
    }

    #[test]
    fn zero_depth_root_yields_no_move() {
        let mut engine = SearchEngine::new(two_branch_game(5));
        let mv = engine.select_move_alphabeta(&0, Color::First, DepthLimit::Limited(0), true, true);
        assert_eq!(mv, None);
    }

    #[test]
    fn forced_pass_scenario_matches_minimax() {
        let game = || {
            ScriptedGame::new()
                .edge(0, Color::First, (1, 0), 2)
                .edge(0, Color::First, (0, 0), 1)
                .edge(2, Color::Second, (2, 2), 3)
                .score(1, 4, 1)
                .score(2, 5, 0)
                .score(3, 3, 2)
        };
        let mut engine = SearchEngine::new(game());
        for ordering in [false, true] {
            let mv = engine.select_move_alphabeta(&0, Color::First, DepthLimit::Limited(2), false, ordering);
            assert_eq!(mv, Some(Move::new(0, 0)));
        }
    }

    #[test]
    fn alphabeta_matches_minimax_on_random_positions() {
        for (board, color) in random_positions(8, 10, 2..=40, 23) {
            for depth in 1..=3 {
                let limit = DepthLimit::Limited(depth);
                let mut minimax = SearchEngine::new(OthelloRules);
                let mut alphabeta = SearchEngine::new(OthelloRules);
                let expected = minimax.minimax_root(&board, color, limit, false);
                let got = alphabeta.alphabeta_root(&board, color, limit, false, false);
                assert_eq!(got.best_move(), expected.best_move());
                assert_eq!(got.value(), expected.value());
                assert!(alphabeta.stats().nodes <= minimax.stats().nodes);
            }
        }
    }

    #[test]
    fn ordering_keeps_the_value_at_full_depth() {
        for (board, color) in random_positions(4, 6, 5..=8, 17) {
            let mut plain = SearchEngine::new(OthelloRules);
            let mut sorted = SearchEngine::new(OthelloRules);
            let expected = plain.alphabeta_root(&board, color, DepthLimit::Unlimited, false, false);
            let got = sorted.alphabeta_root(&board, color, DepthLimit::Unlimited, false, true);
            assert_eq!(got.value(), expected.value());
        }
    }

    #[test]
    fn prewarmed_cache_repeats_the_same_choice() {
        for (board, color) in random_positions(8, 6, 2..=30, 3) {
            for ordering in [false, true] {
                let limit = DepthLimit::Limited(3);
                let mut engine = SearchEngine::new(OthelloRules);
                let cold = engine.select_move_alphabeta(&board, color, limit, true, ordering);
                let cold_nodes = engine.stats().nodes;
                let warm = engine.select_move_alphabeta(&board, color, limit, true, ordering);
                assert_eq!(warm, cold);
                assert!(engine.stats().nodes <= cold_nodes);
                assert!(engine.stats().cache_hits > 0);
            }
        }
    }
}
