//! Engine abstraction shared by the protocol session and the match harness.
//!
//! Lets the session and the harness pick a move-selection strategy at runtime
//! behind one trait object.

use crate::board::board_types::{Color, Move};
use crate::board::othello_board::Board;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` only when `color` has no legal move (or a zero depth limit).
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Forget per-game state such as cached values.
    fn new_game(&mut self) {}

    fn choose_move(&mut self, board: &Board, color: Color) -> EngineOutput;
}
