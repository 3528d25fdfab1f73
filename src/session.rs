//! Interactive terminal session
//!
//! The game thread owns the [`GameState`] and the clock. A helper thread
//! reads stdin and forwards lines over a channel, and a ticker channel drives
//! the clock, so the rule engine only ever sees one call at a time.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chess_rules::{
    new_game, ChessRulesError, ChessRulesResult, Color, GameState, GameStatus, MoveOutcome,
    MoveRecord, Piece, Square,
};
use crossbeam_channel::{select, tick, unbounded};
use serde::Serialize;
use tracing::{debug, error, info};
use web_time::Instant;

use crate::clock::GameTimer;
use crate::config::Config;
use crate::input::{parse_command, Command, HELP};
use crate::render::{render_board, render_captured, render_clocks};

const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// Whether the read loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Exported game, written with `--history`
#[derive(Debug, Serialize)]
pub struct GameRecord<'a> {
    pub status: GameStatus,
    pub moves: &'a [MoveRecord],
}

/// One game plus its clock
pub struct Session {
    game: GameState,
    timer: Option<GameTimer>,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Session {
            game: new_game(config.player_is_white()),
            timer: config.timer(),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn timer(&self) -> Option<&GameTimer> {
        self.timer.as_ref()
    }

    /// Start the clock (if any) and draw the opening position
    pub fn start<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if let Some(timer) = self.timer.as_mut() {
            timer.start();
        }
        writeln!(out, "Type `help` for commands.")?;
        self.write_board(out)?;
        self.write_prompt(out)
    }

    /// Handle one line of user input
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}")?;
                self.write_prompt(out)?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Board => self.write_board(out)?,
            Command::History => {
                let history = self.game.history();
                if history.is_empty() {
                    writeln!(out, "No moves yet.")?;
                } else {
                    writeln!(out, "{}", history.to_move_list())?;
                }
            }
            Command::Moves(origin) => self.write_destinations(origin, out)?,
            Command::Move { from, to } => self.play(from, to, out)?,
        }

        self.write_prompt(out)?;
        Ok(Flow::Continue)
    }

    /// Charge `elapsed` to the side to move and end the game on flag fall
    pub fn tick<W: Write>(&mut self, elapsed: Duration, out: &mut W) -> Result<()> {
        if self.game.status().is_game_over() {
            return Ok(());
        }
        let to_move = self.game.current_turn();
        let Some(reason) = self.timer.as_mut().and_then(|timer| timer.tick(to_move, elapsed))
        else {
            return Ok(());
        };

        self.game.force_end(reason);
        writeln!(out)?;
        writeln!(out, "{}", self.game.status().message())?;
        self.write_prompt(out)
    }

    fn play<W: Write>(&mut self, from: Square, to: Square, out: &mut W) -> Result<()> {
        let mover = self.game.current_turn();
        let outcome = match self.game.attempt_move(from, to) {
            Ok(outcome) => outcome,
            Err(err) => return report_internal(&format!("Move {from}-{to}"), &err, out),
        };

        match outcome {
            MoveOutcome::Accepted { capture, castled } => {
                if let Some(timer) = self.timer.as_mut() {
                    timer.apply_increment(mover);
                }
                self.write_board(out)?;
                if castled {
                    writeln!(out, "{} castles.", mover)?;
                }
                if let Some(victim) = capture {
                    writeln!(out, "{}", capture_message(mover, &victim))?;
                }
                let in_check = self.game.is_in_check(self.game.current_turn());
                write_check_notice(in_check, from, to, out)?;
            }
            MoveOutcome::NotYourTurn => {
                let message = match self.game.board().piece_at(from) {
                    Some(piece) => format!("It is not {}'s turn!", piece.color),
                    None => format!("There is no piece on {from}."),
                };
                writeln!(out, "{message}")?;
            }
            MoveOutcome::IllegalGeometry => writeln!(out, "That piece cannot move there.")?,
            MoveOutcome::LeavesKingInCheck => {
                writeln!(out, "That move would leave your king in check.")?
            }
            MoveOutcome::GameOver => writeln!(out, "{}", self.game.status().message())?,
        }
        Ok(())
    }

    fn write_destinations<W: Write>(&self, origin: Square, out: &mut W) -> Result<()> {
        let destinations = match self.game.legal_destinations(origin) {
            Ok(destinations) => destinations,
            Err(err) => return report_internal(&format!("Moves from {origin}"), &err, out),
        };
        if destinations.is_empty() {
            writeln!(out, "No legal moves from {origin}.")?;
        } else {
            let list: Vec<String> = destinations.iter().map(Square::to_string).collect();
            writeln!(out, "{origin}: {}", list.join(" "))?;
        }
        Ok(())
    }

    fn write_board<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            render_board(self.game.board(), self.game.perspective())
        )?;
        let captured = render_captured(self.game.captured());
        if !captured.is_empty() {
            writeln!(out, "{captured}")?;
        }
        Ok(())
    }

    fn write_prompt<W: Write>(&self, out: &mut W) -> Result<()> {
        let status = self.game.status();
        if status.is_game_over() {
            write!(out, "[{}] > ", status.message())?;
        } else {
            if let Some(timer) = &self.timer {
                write!(out, "[{}] ", render_clocks(timer))?;
            }
            write!(
                out,
                "{} to move ({})> ",
                self.game.current_turn(),
                self.game.history().full_move_number()
            )?;
        }
        out.flush()?;
        Ok(())
    }

    /// Write the move list and final status as JSON
    pub fn save_history(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create history file {}", path.display()))?;
        let record = GameRecord {
            status: self.game.status(),
            moves: self.game.history().records(),
        };
        serde_json::to_writer_pretty(BufWriter::new(file), &record)
            .with_context(|| format!("Failed to write history to {}", path.display()))?;
        info!("[GAME] Wrote {} moves to {}", record.moves.len(), path.display());
        Ok(())
    }
}

/// Log an engine defect and tell the players; the session keeps running
fn report_internal<W: Write>(action: &str, err: &ChessRulesError, out: &mut W) -> Result<()> {
    error!("[GAME] {} failed: {}", action, err);
    writeln!(out, "Internal error: {err}")?;
    Ok(())
}

/// Announce check after `from`-`to`, or report why the check test failed
fn write_check_notice<W: Write>(
    in_check: ChessRulesResult<bool>,
    from: Square,
    to: Square,
    out: &mut W,
) -> Result<()> {
    match in_check {
        Ok(true) => writeln!(out, "Check!")?,
        Ok(false) => {}
        Err(err) => report_internal(&format!("Check test after {from}-{to}"), &err, out)?,
    }
    Ok(())
}

fn capture_message(mover: Color, victim: &Piece) -> String {
    format!(
        "{} captures {} {} on {}.",
        mover,
        victim.color.name().to_lowercase(),
        victim.kind,
        victim.square
    )
}

/// Run the interactive loop until `quit` or end of input
pub fn run(config: Config) -> Result<()> {
    let mut session = Session::new(&config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    session.start(&mut out)?;

    let (line_tx, line_rx) = unbounded::<String>();
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if line_tx.send(line).is_err() {
                    break;
                }
            }
            debug!("[GAME] stdin closed");
        })
        .context("Failed to spawn stdin reader")?;

    let ticker = tick(TICK_INTERVAL);
    let mut last_tick = Instant::now();

    loop {
        select! {
            recv(line_rx) -> line => match line {
                Ok(line) => {
                    if session.handle_line(&line, &mut out)? == Flow::Quit {
                        break;
                    }
                }
                Err(_) => break,
            },
            recv(ticker) -> _ => {
                let now = Instant::now();
                session.tick(now.duration_since(last_tick), &mut out)?;
                last_tick = now;
            }
        }
    }
    writeln!(out)?;

    if let Some(path) = config.history.as_deref() {
        session.save_history(path)?;
    }
    info!("[GAME] Session over: {}", session.game().status().message());
    Ok(())
}
