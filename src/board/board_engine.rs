//! Board engine contract consumed by search, plus the Othello rules.
//!
//! Search only ever talks to `BoardEngine`; it never inspects cells itself.
//! Move order returned by `legal_moves` is authoritative: search breaks value
//! ties by it, so changing the enumeration order can change the chosen move.

use std::hash::Hash;

use crate::board::board_types::{Cell, Color, Move};
use crate::board::othello_board::Board;
use crate::errors::BoardError;

pub trait BoardEngine: Send + Sync {
    /// Board value type. Must be hashable so it can key the transposition cache.
    type Board: Clone + Eq + Hash;

    /// Legal moves for `color`, finite and possibly empty.
    fn legal_moves(&self, board: &Self::Board, color: Color) -> Vec<Move>;

    /// Successor board. Never mutates `board`. `mv` must be legal for `color`.
    fn apply_move(&self, board: &Self::Board, color: Color, mv: Move) -> Self::Board;

    /// Disk counts as `(first, second)`.
    fn score(&self, board: &Self::Board) -> (u32, u32);
}

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Standard Othello rules on a square `Board` of any even size.
#[derive(Debug, Clone, Copy, Default)]
pub struct OthelloRules;

impl OthelloRules {
    /// Cells flipped by `color` placing on `mv`. Empty when the move is illegal.
    pub fn flips(&self, board: &Board, color: Color, mv: Move) -> Vec<Move> {
        let mut flipped = Vec::new();
        if mv.column >= board.size() || mv.row >= board.size() {
            return flipped;
        }
        if board.cell(mv.column, mv.row) != Cell::Empty {
            return flipped;
        }

        let own = color.to_cell();
        let other = color.opponent().to_cell();
        let mut line = Vec::new();

        for (dc, dr) in DIRECTIONS {
            line.clear();
            let mut c = mv.column as isize + dc;
            let mut r = mv.row as isize + dr;
            while board.in_bounds(c, r) && board.cell(c as usize, r as usize) == other {
                line.push(Move::new(c as usize, r as usize));
                c += dc;
                r += dr;
            }
            if !line.is_empty() && board.in_bounds(c, r) && board.cell(c as usize, r as usize) == own
            {
                flipped.extend_from_slice(&line);
            }
        }

        flipped
    }

    #[inline]
    pub fn is_legal(&self, board: &Board, color: Color, mv: Move) -> bool {
        !self.flips(board, color, mv).is_empty()
    }

    /// Checked move application for callers outside the search.
    pub fn play(&self, board: &Board, color: Color, mv: Move) -> Result<Board, BoardError> {
        let flips = self.flips(board, color, mv);
        if flips.is_empty() {
            return Err(BoardError::IllegalMove(mv));
        }
        Ok(board.with_placement(color, mv, &flips))
    }

    /// Who moves after `just_moved` played: the opponent, or `just_moved`
    /// again when the opponent must pass. `None` once neither side can move.
    pub fn next_to_move(&self, board: &Board, just_moved: Color) -> Option<Color> {
        let opponent = just_moved.opponent();
        if !self.legal_moves(board, opponent).is_empty() {
            Some(opponent)
        } else if !self.legal_moves(board, just_moved).is_empty() {
            Some(just_moved)
        } else {
            None
        }
    }

    pub fn is_game_over(&self, board: &Board) -> bool {
        self.legal_moves(board, Color::First).is_empty()
            && self.legal_moves(board, Color::Second).is_empty()
    }
}

impl BoardEngine for OthelloRules {
    type Board = Board;

    fn legal_moves(&self, board: &Board, color: Color) -> Vec<Move> {
        let n = board.size();
        let mut moves = Vec::new();
        // Column-major enumeration.
        for column in 0..n {
            for row in 0..n {
                let mv = Move::new(column, row);
                if self.is_legal(board, color, mv) {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    fn apply_move(&self, board: &Board, color: Color, mv: Move) -> Board {
        let flips = self.flips(board, color, mv);
        debug_assert!(!flips.is_empty(), "apply_move called with illegal move {mv}");
        board.with_placement(color, mv, &flips)
    }

    fn score(&self, board: &Board) -> (u32, u32) {
        (board.count(Color::First), board.count(Color::Second))
    }
}
