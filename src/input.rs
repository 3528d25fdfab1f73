//! Parsing of typed commands
//!
//! Accepted forms (case-insensitive):
//!
//! - `e2 e4`, `e2e4`, `e2-e4`: move
//! - `moves e2`: list legal destinations
//! - `history`, `board`, `help`, `quit`

use chess_rules::{ChessRulesError, Square};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move { from: Square, to: Square },
    Moves(Square),
    History,
    Board,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Type a move such as `e2 e4`, or `help`")]
    Empty,

    #[error("Unknown command {0:?}. Type `help` for the list of commands")]
    UnknownCommand(String),

    #[error("`{0}` needs a square, for example `{0} e2`")]
    MissingSquare(&'static str),

    #[error(transparent)]
    Square(#[from] ChessRulesError),
}

pub const HELP: &str = "\
Commands:
  e2 e4 | e2e4 | e2-e4   move the piece on e2 to e4
  moves e2               list where the piece on e2 can go
  history                show the moves played so far
  board                  redraw the board
  help                   show this help
  quit                   leave the game";

/// Parse one line of input
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim().to_ascii_lowercase();
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        [] => Err(InputError::Empty),
        ["quit" | "exit" | "q"] => Ok(Command::Quit),
        ["help" | "?"] => Ok(Command::Help),
        ["history"] => Ok(Command::History),
        ["board"] => Ok(Command::Board),
        ["moves"] => Err(InputError::MissingSquare("moves")),
        ["moves", square] => Ok(Command::Moves(Square::parse(square)?)),
        [from, to] => Ok(Command::Move {
            from: Square::parse(from)?,
            to: Square::parse(to)?,
        }),
        [joined] => parse_joined_move(joined),
        _ => Err(InputError::UnknownCommand(line.clone())),
    }
}

/// `e2e4` or `e2-e4`
fn parse_joined_move(token: &str) -> Result<Command, InputError> {
    let compact: String = token.chars().filter(|c| *c != '-').collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(InputError::UnknownCommand(token.to_string()));
    }
    let (from, to) = compact.split_at(2);
    Ok(Command::Move {
        from: Square::parse(from)?,
        to: Square::parse(to)?,
    })
}
