//! Terminal front-end for the `chess_rules` engine
//!
//! Two players share one terminal. The board is drawn in ASCII from the
//! configured side, moves are typed in coordinate form, and an optional
//! per-player clock ends the game on flag fall.
//!
//! ## Module Organization
//!
//! - `config` - command-line and environment settings
//! - `clock` - countdown clock with Fischer increment
//! - `input` - command parsing
//! - `render` - board and status drawing
//! - `session` - the interactive loop

pub mod clock;
pub mod config;
pub mod input;
pub mod render;
pub mod session;

pub use config::Config;
pub use session::{run, Session};
