//! Per-session search settings, normally built from the manager handshake.

use std::fmt;

use crate::search::search_types::DepthLimit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    Minimax,
    #[default]
    AlphaBeta,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Minimax => write!(f, "MINIMAX"),
            Algorithm::AlphaBeta => write!(f, "ALPHA-BETA"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth_limit: DepthLimit,
    pub algorithm: Algorithm,
    pub caching: bool,
    /// Only consulted by alpha-beta.
    pub ordering: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_limit: DepthLimit::default(),
            algorithm: Algorithm::AlphaBeta,
            caching: false,
            ordering: false,
        }
    }
}
