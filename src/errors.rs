use std::io;

use thiserror::Error;

use crate::board::board_types::Move;

/// Failures raised while building or mutating boards outside of search.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    /// Board side length is odd, too small, or does not match the row count.
    #[error("invalid board size {0}: expected an even size of at least 4")]
    InvalidSize(usize),
    /// A row has a different length from the board side.
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },
    /// A cell code other than 0, 1 or 2.
    #[error("invalid cell code {0}")]
    InvalidCell(i64),
    /// The move does not flip any disk or targets an occupied cell.
    #[error("illegal move {0}")]
    IllegalMove(Move),
    /// The textual board payload could not be parsed.
    #[error("malformed board payload: {0}")]
    MalformedPayload(String),
}

/// Failures raised by the game manager session.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed handshake '{0}'")]
    MalformedHandshake(String),
    #[error("unknown color code {0}")]
    UnknownColor(i64),
    #[error("malformed status line '{0}'")]
    MalformedStatus(String),
    #[error("input ended before {0}")]
    UnexpectedEof(&'static str),
    #[error("no legal move available for the requested color")]
    NoMoveAvailable,
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Io(#[from] io::Error),
}
