//! Headless replay driver.
//!
//! Runs one seeded game by repeatedly moving the active piece down (and
//! optionally rotating it) until the active row stops changing between turns,
//! then prints the final board. Used by the default binary and by tests.

use std::env;
use std::io::Write;

use anyhow::{anyhow, bail, Result};

use crate::core::{Board, BoardObserver, MoveOutcome, SimpleRng, Tetromino};
use crate::types::{Direction, DEFAULT_DEMO_SEED, DEFAULT_VISIBLE_HEIGHT, DEFAULT_WIDTH};

/// Turn limit for a single run; a game on a sane board ends far sooner.
pub const MAX_TURNS: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub visible_height: usize,
    pub width: usize,
    pub seed: u32,
    /// Try a clockwise rotation after every move
    pub rotate: bool,
    /// Log freezes and score updates to stderr
    pub verbose: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            visible_height: DEFAULT_VISIBLE_HEIGHT,
            width: DEFAULT_WIDTH,
            seed: DEFAULT_DEMO_SEED,
            rotate: true,
            verbose: false,
        }
    }
}

impl DemoConfig {
    /// Create from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let visible_height = env::var("TETROMINO_HEIGHT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.visible_height);
        let width = env::var("TETROMINO_WIDTH")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.width);
        let seed = env::var("TETROMINO_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.seed);
        let verbose = env::var("TETROMINO_VERBOSE")
            .map(|s| matches!(s.trim(), "1" | "true" | "yes"))
            .unwrap_or(defaults.verbose);

        Self {
            visible_height,
            width,
            seed,
            verbose,
            ..defaults
        }
    }
}

/// Apply command-line flags on top of `base`
pub fn parse_demo_args(args: &[String], base: DemoConfig) -> Result<DemoConfig> {
    let mut config = base;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--height" => {
                i += 1;
                config.visible_height = parse_value(args, i, "--height")?;
            }
            "--width" => {
                i += 1;
                config.width = parse_value(args, i, "--width")?;
            }
            "--seed" => {
                i += 1;
                config.seed = parse_value(args, i, "--seed")?;
            }
            "--no-rotate" => config.rotate = false,
            "--verbose" => config.verbose = true,
            other => {
                return Err(anyhow!("demo: unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T> {
    let v = args
        .get(i)
        .ok_or_else(|| anyhow!("demo: missing value for {}", flag))?;
    v.parse::<T>()
        .map_err(|_| anyhow!("demo: invalid {} value: {}", flag, v))
}

/// Writes freeze and score notices to stderr
#[derive(Debug, Default)]
pub struct ConsoleObserver;

impl BoardObserver for ConsoleObserver {
    fn on_freeze(&mut self, piece: &Tetromino) {
        eprint!("[Board] Freezing piece {}", piece);
    }

    fn on_score_update(&mut self, lines_cleared: u32, score: u32) {
        if lines_cleared > 0 {
            eprintln!("[Board] Cleared {} rows, score {}", lines_cleared, score);
        }
    }
}

/// Play one game to the end, writing the initial and final boards to `out`
pub fn run_demo<W: Write>(config: &DemoConfig, out: &mut W) -> Result<crate::core::GameOver> {
    let mut builder = Board::builder(config.visible_height, config.width)
        .rng(SimpleRng::new(config.seed));
    if config.verbose {
        builder = builder.observer(ConsoleObserver);
    }
    let mut board = builder.build()?;

    writeln!(out, "----------- Creating board ---------------")?;
    write!(out, "{}", board)?;

    let mut last_row = None;
    for _ in 0..MAX_TURNS {
        let row = board.active_piece().row;
        if last_row == Some(row) {
            break;
        }
        last_row = Some(row);

        if let MoveOutcome::GameOver(over) = board.move_active_piece(Direction::Down) {
            writeln!(out, "GAME OVER!")?;
            writeln!(out, "{}", over)?;
            write!(out, "{}", board)?;
            return Ok(over);
        }
        if config.rotate {
            board.rotate_active_piece();
        }
    }

    bail!(
        "demo: game did not end (seed {}, active row {})",
        config.seed,
        board.active_piece().row
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_demo_args_defaults() {
        let config = parse_demo_args(&[], DemoConfig::default()).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_parse_demo_args_overrides() {
        let config = parse_demo_args(
            &args(&["--height", "8", "--width", "6", "--seed", "7", "--no-rotate", "--verbose"]),
            DemoConfig::default(),
        )
        .unwrap();
        assert_eq!(
            config,
            DemoConfig {
                visible_height: 8,
                width: 6,
                seed: 7,
                rotate: false,
                verbose: true,
            }
        );
    }

    #[test]
    fn test_parse_demo_args_errors() {
        assert!(parse_demo_args(&args(&["--seed"]), DemoConfig::default()).is_err());
        assert!(parse_demo_args(&args(&["--width", "wide"]), DemoConfig::default()).is_err());
        assert!(parse_demo_args(&args(&["--fast"]), DemoConfig::default()).is_err());
    }
}
