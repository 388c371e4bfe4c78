//! One-ply move ordering for alpha-beta.
//!
//! Candidates are ranked by the utility of the board they lead to, seen from
//! the searching color. Only pruning yield depends on this order.

use crate::board::board_engine::BoardEngine;
use crate::board::board_types::{Color, Move};
use crate::search::utility::utility;

/// Descending by successor utility when `mover == search_color`, ascending
/// otherwise. The sort is stable, so equal moves keep the engine's order.
pub fn order_moves<E: BoardEngine>(
    engine: &E,
    board: &E::Board,
    search_color: Color,
    mover: Color,
    moves: Vec<Move>,
) -> Vec<Move> {
    let mut scored = moves
        .into_iter()
        .map(|mv| {
            let next = engine.apply_move(board, mover, mv);
            (mv, utility(engine, &next, search_color))
        })
        .collect::<Vec<_>>();

    if mover == search_color {
        scored.sort_by(|a, b| b.1.cmp(&a.1));
    } else {
        scored.sort_by(|a, b| a.1.cmp(&b.1));
    }

    scored.into_iter().map(|(mv, _)| mv).collect()
}

#[cfg(test)]
mod tests {
    use super::order_moves;
    use crate::board::board_engine::{BoardEngine, OthelloRules};
    use crate::board::board_types::{Color, Move};
    use crate::board::othello_board::Board;
    use crate::search::test_support::ScriptedGame;
    use crate::search::utility::utility;

    fn game() -> ScriptedGame {
        ScriptedGame::new()
            .edge(0, Color::First, (0, 0), 1)
            .edge(0, Color::First, (1, 0), 2)
            .edge(0, Color::First, (2, 0), 3)
            .edge(0, Color::Second, (0, 1), 1)
            .edge(0, Color::Second, (1, 1), 2)
            .edge(0, Color::Second, (2, 1), 3)
            .score(1, 3, 2)
            .score(2, 6, 1)
            .score(3, 2, 4)
    }

    #[test]
    fn maximizing_context_sorts_best_first() {
        let g = game();
        let moves = g.legal_moves(&0, Color::First);
        let ordered = order_moves(&g, &0, Color::First, Color::First, moves);
        assert_eq!(
            ordered,
            vec![Move::new(1, 0), Move::new(0, 0), Move::new(2, 0)]
        );
    }

    #[test]
    fn minimizing_context_sorts_worst_for_searcher_first() {
        let g = game();
        let moves = g.legal_moves(&0, Color::Second);
        let ordered = order_moves(&g, &0, Color::First, Color::Second, moves);
        assert_eq!(
            ordered,
            vec![Move::new(2, 1), Move::new(0, 1), Move::new(1, 1)]
        );
    }

    #[test]
    fn ordering_is_a_permutation_on_real_boards() {
        let rules = OthelloRules;
        let board = rules.apply_move(&Board::standard(), Color::First, Move::new(2, 3));
        let moves = rules.legal_moves(&board, Color::Second);
        let ordered = order_moves(&rules, &board, Color::First, Color::Second, moves.clone());

        assert_eq!(ordered.len(), moves.len());
        for mv in &moves {
            assert!(ordered.contains(mv));
        }
        let values = ordered
            .iter()
            .map(|&mv| utility(&rules, &rules.apply_move(&board, Color::Second, mv), Color::First))
            .collect::<Vec<_>>();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }
}
