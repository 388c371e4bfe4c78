//! Crate root module declarations for the Othello search engine.
//!
//! Exposes the board engine and rules, the minimax / alpha-beta search, the
//! engine implementations, the game manager protocol adapter and utility
//! helpers so binaries, benches and tests can import stable module paths.

pub mod board {
    pub mod board_engine;
    pub mod board_types;
    pub mod othello_board;
}

pub mod search {
    pub mod alpha_beta;
    pub mod minimax;
    pub mod move_ordering;
    pub mod search_config;
    pub mod search_engine;
    pub mod search_types;
    #[cfg(test)]
    pub(crate) mod test_support;
    pub mod transposition_cache;
    pub mod utility;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_random;
    pub mod engine_search;
    pub mod engine_trait;
}

pub mod protocol {
    pub mod handshake;
    pub mod session;
}

pub mod utils {
    pub mod board_text;
    pub mod match_harness;
    pub mod render_board;
}

pub mod errors;
