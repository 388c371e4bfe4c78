use std::io::Write;

use clap::{Parser, ValueEnum};
use log::{error, info};

use othello_search::protocol::session::{run_stdio_loop, SessionOptions, DEFAULT_AI_NAME};
use othello_search::search::utility::EvaluatorKind;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EvaluatorArg {
    /// Disk differential at the depth cutoff
    Disks,
    /// Constant zero at the depth cutoff
    Zero,
}

impl From<EvaluatorArg> for EvaluatorKind {
    fn from(arg: EvaluatorArg) -> Self {
        match arg {
            EvaluatorArg::Disks => EvaluatorKind::Disks,
            EvaluatorArg::Zero => EvaluatorKind::Zero,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Othello minimax / alpha-beta player for a line-based game manager", long_about = None)]
struct Args {
    /// Identification line sent to the game manager
    #[arg(long, default_value = DEFAULT_AI_NAME)]
    name: String,

    /// Heuristic used when the depth limit cuts the search off
    #[arg(long, value_enum, default_value_t = EvaluatorArg::Disks)]
    evaluator: EvaluatorArg,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    // stdout carries the protocol, so logs go to stderr only.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
        .write_style(env_logger::WriteStyle::Never)
        .target(env_logger::Target::Stderr)
        .init();

    let options = SessionOptions {
        name: args.name,
        evaluator: args.evaluator.into(),
    };

    match run_stdio_loop(options) {
        Ok(summary) => info!(
            "session finished: played {} moves as {:?}, final score {} - {}",
            summary.moves_played, summary.color, summary.final_score.0, summary.final_score.1
        ),
        Err(e) => {
            error!("Fatal error: {e}");
            std::process::exit(1);
        }
    }
}
