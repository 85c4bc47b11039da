//! Demo match runner.
//!
//! Plays a scripted match on an N by N board: the first mover fills
//! row 0 left to right while the opponent answers in row 1, so the
//! first mover wins with a full top row on its Nth move. Each accepted
//! move prints the rendered board and the returned state snapshot as a
//! JSON line.

use anyhow::{bail, Result};
use clap::Parser;
use gridmark::{render::ConsoleRenderer, Mark, MatchEngine};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line options for the demo match.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Board side length (also the winning run length).
    #[arg(long, default_value_t = 3)]
    size: usize,

    /// First mover: "x" or "o".
    #[arg(long, default_value = "x")]
    first: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let first = match cli.first.as_str() {
        "x" => Mark::X,
        "o" => Mark::O,
        other => bail!("unknown mark {other:?}, expected \"x\" or \"o\""),
    };

    let mut engine = MatchEngine::new(cli.size)?;
    engine.subscribe(Box::new(ConsoleRenderer::stdout()));
    engine.start(first)?;

    info!(size = cli.size, %first, "demo match starting");

    // First mover claims (0, i), opponent answers at (1, i).
    for column in 0..cli.size {
        for row in [0, 1] {
            let state = engine.mark(row, column)?;
            println!("{}", serde_json::to_string(&state)?);
            if state.match_ended() {
                info!("demo match over");
                return Ok(());
            }
        }
    }

    Ok(())
}
