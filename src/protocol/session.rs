//! Game manager session over a line-oriented text channel.
//!
//! The AI introduces itself with one line, reads the handshake, then answers
//! every `SCORE` status and board payload with `<column> <row>` until the
//! manager sends `FINAL`. Diagnostics go through `log` (stderr in the
//! binary); stdout carries protocol lines only.

use std::io::{self, BufRead, Write};

use log::{debug, info, warn};

use crate::board::board_types::Color;
use crate::engines::engine_search::SearchPlayer;
use crate::engines::engine_trait::Engine;
use crate::errors::ProtocolError;
use crate::protocol::handshake::{Handshake, Status};
use crate::search::search_config::{Algorithm, SearchConfig};
use crate::search::search_types::DepthLimit;
use crate::search::utility::EvaluatorKind;
use crate::utils::board_text::parse_board;

pub const DEFAULT_AI_NAME: &str = "Othello AI";

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub name: String,
    pub evaluator: EvaluatorKind,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_AI_NAME.to_owned(),
            evaluator: EvaluatorKind::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub color: Color,
    pub moves_played: u32,
    pub final_score: (u32, u32),
}

pub fn run_stdio_loop(options: SessionOptions) -> Result<SessionSummary, ProtocolError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(stdin.lock(), &mut stdout, options)
}

/// Drive one whole session on arbitrary reader/writer pairs.
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    options: SessionOptions,
) -> Result<SessionSummary, ProtocolError> {
    writeln!(out, "{}", options.name)?;
    out.flush()?;

    let line = read_line(&mut input, "handshake")?;
    let handshake = Handshake::parse(&line)?;
    log_configuration(&handshake);

    let mut state = SessionState::new(handshake, options.evaluator);

    loop {
        let line = read_line(&mut input, "final status")?;
        match Status::parse(&line)? {
            Status::Final { first, second } => {
                info!("game over: final score {first} - {second}");
                return Ok(SessionSummary {
                    color: state.color,
                    moves_played: state.moves_played,
                    final_score: (first, second),
                });
            }
            Status::Ongoing { first, second } => {
                debug!("score {first} - {second}");
                let payload = read_line(&mut input, "board payload")?;
                state.handle_turn(&payload, out)?;
            }
        }
    }
}

struct SessionState {
    color: Color,
    engine: Box<dyn Engine>,
    moves_played: u32,
}

impl SessionState {
    fn new(handshake: Handshake, evaluator: EvaluatorKind) -> Self {
        Self {
            color: handshake.color,
            engine: build_engine(handshake.config, evaluator),
            moves_played: 0,
        }
    }

    fn handle_turn(&mut self, payload: &str, out: &mut impl Write) -> Result<(), ProtocolError> {
        let board = parse_board(payload)?;
        let result = self.engine.choose_move(&board, self.color);

        for info in &result.info_lines {
            debug!("{info}");
        }

        let mv = result.best_move.ok_or(ProtocolError::NoMoveAvailable)?;
        debug!("{} engine plays {mv}", self.engine.name());
        writeln!(out, "{} {}", mv.column, mv.row)?;
        out.flush()?;
        self.moves_played += 1;
        Ok(())
    }
}

fn build_engine(config: SearchConfig, evaluator: EvaluatorKind) -> Box<dyn Engine> {
    Box::new(SearchPlayer::with_evaluator(config, evaluator.boxed()))
}

fn read_line<R: BufRead>(input: &mut R, expecting: &'static str) -> Result<String, ProtocolError> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(ProtocolError::UnexpectedEof(expecting));
        }
        if !line.trim().is_empty() {
            return Ok(line.trim_end().to_owned());
        }
    }
}

fn log_configuration(handshake: &Handshake) {
    let config = &handshake.config;
    info!("playing as {:?}", handshake.color);
    info!("running {}", config.algorithm);
    info!(
        "state caching is {}",
        if config.caching { "ON" } else { "OFF" }
    );
    info!(
        "node ordering is {}",
        if config.ordering { "ON" } else { "OFF" }
    );
    match config.depth_limit {
        DepthLimit::Unlimited => info!("depth limit is OFF"),
        DepthLimit::Limited(n) => info!("depth limit is {n}"),
    }
    if config.algorithm == Algorithm::Minimax && config.ordering {
        warn!("node ordering has no effect on minimax");
    }
    if config.depth_limit == DepthLimit::Limited(0) {
        warn!("depth limit 0 selects no move");
    }
}
