//! Headless replay runner (default binary).
//!
//! Plays one seeded game to the end and prints the initial board, the
//! game-over message and the final board. Settings come from `TETROMINO_*`
//! environment variables, then command-line flags:
//!
//! ```text
//! tetromino-engine [--height N] [--width N] [--seed N] [--no-rotate] [--verbose]
//! ```

use std::io::{self, Write};

use anyhow::Result;

use tetromino_engine::demo::{parse_demo_args, run_demo, DemoConfig};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_demo_args(&args, DemoConfig::from_env())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let over = run_demo(&config, &mut out)?;
    out.flush()?;

    if config.verbose {
        eprintln!(
            "[Demo] seed {} finished with score {}",
            config.seed, over.final_score
        );
    }
    Ok(())
}
