//! Command-line and environment configuration
//!
//! Every flag can also come from a `TABLETOP_CHESS_*` environment variable.
//! `main` loads a `.env` file first, so those variables may live there too.

use std::path::PathBuf;
use std::time::Duration;

use chess_rules::Color;
use clap::{Parser, ValueEnum};

use crate::clock::GameTimer;

/// Side drawn at the bottom of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SideArg {
    White,
    Black,
}

impl From<SideArg> for Color {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::White => Color::White,
            SideArg::Black => Color::Black,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "tabletop-chess",
    version,
    about = "Two players, one terminal: a chess board with clocks"
)]
pub struct Config {
    /// Side drawn at the bottom of the board
    #[arg(long, value_enum, default_value_t = SideArg::White, env = "TABLETOP_CHESS_COLOR")]
    pub color: SideArg,

    /// Minutes on each player's clock
    #[arg(
        long,
        default_value_t = 10,
        env = "TABLETOP_CHESS_MINUTES",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub minutes: u64,

    /// Seconds added to a player's clock after each of their moves
    #[arg(long, default_value_t = 0, env = "TABLETOP_CHESS_INCREMENT")]
    pub increment: u64,

    /// Play without clocks
    #[arg(long, env = "TABLETOP_CHESS_NO_CLOCK")]
    pub no_clock: bool,

    /// Write the move history as JSON to this path when the session ends
    #[arg(long, env = "TABLETOP_CHESS_HISTORY")]
    pub history: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set (e.g. `debug`, `chess_rules=debug`)
    #[arg(long, default_value = "warn", env = "TABLETOP_CHESS_LOG")]
    pub log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            color: SideArg::White,
            minutes: 10,
            increment: 0,
            no_clock: false,
            history: None,
            log: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn player_is_white(&self) -> bool {
        self.color == SideArg::White
    }

    /// Clock for this configuration, `None` with `--no-clock`
    pub fn timer(&self) -> Option<GameTimer> {
        if self.no_clock {
            return None;
        }
        Some(GameTimer::new(
            Duration::from_secs(self.minutes * 60),
            Duration::from_secs(self.increment),
        ))
    }
}
