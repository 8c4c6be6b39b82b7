//! Plain-text host protocol.
//!
//! Reads one command per line, drives a [`Game`] and the search, and writes
//! replies to any [`Write`] sink so sessions can be scripted in tests.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::atomic::AtomicBool;
use std::time::Instant;

use crate::board::{
    search, Game, GameOutcome, Move, MoveParseError, Position, PositionError, SearchConfig,
    SearchResult, SearchState,
};

pub mod command;
pub mod options;

pub use command::{parse_command, CliCommand, GoLimits};
pub use options::{EngineOptions, OptionAction};

/// Error type for host commands
#[derive(Debug)]
pub enum CliError {
    /// Position notation did not parse
    InvalidPosition(PositionError),
    /// A move string did not parse or matched no legal move
    InvalidMove {
        move_str: String,
        error: MoveParseError,
    },
    InvalidOption(String),
    /// Missing required parts in the command
    MissingParts,
    /// The game already ended
    GameOver(GameOutcome),
    Io(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidPosition(e) => write!(f, "Invalid position: {e}"),
            CliError::InvalidMove { move_str, error } => {
                write!(f, "Invalid move '{move_str}': {error}")
            }
            CliError::InvalidOption(msg) => write!(f, "Invalid option: {msg}"),
            CliError::MissingParts => write!(f, "Missing required parts in command"),
            CliError::GameOver(outcome) => write!(f, "Game is over: {outcome}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::InvalidPosition(e) => Some(e),
            CliError::InvalidMove { error, .. } => Some(error),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PositionError> for CliError {
    fn from(e: PositionError) -> Self {
        CliError::InvalidPosition(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    Continue,
    Quit,
}

/// A move written with every landing square, so chains re-parse exactly.
#[must_use]
pub fn format_move(mv: Move) -> String {
    if !mv.is_capture() {
        return mv.to_string();
    }
    std::iter::once(mv.from())
        .chain(mv.landings())
        .map(|sq| sq.to_string())
        .collect::<Vec<_>>()
        .join("x")
}

/// Game, search tables and options of one host session.
pub struct Session {
    game: Game,
    state: SearchState,
    options: EngineOptions,
    stop: AtomicBool,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(EngineOptions::default())
    }
}

impl Session {
    #[must_use]
    pub fn new(options: EngineOptions) -> Self {
        Session {
            game: Game::new(options.capture_rule),
            state: SearchState::new(options.hash_mb),
            options,
            stop: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Parse and run one input line. Blank lines do nothing.
    pub fn execute_line<W: Write>(
        &mut self,
        line: &str,
        out: &mut W,
    ) -> Result<CommandResult, CliError> {
        match parse_command(line) {
            Some(command) => self.execute(command, out),
            None => Ok(CommandResult::Continue),
        }
    }

    pub fn execute<W: Write>(
        &mut self,
        command: CliCommand,
        out: &mut W,
    ) -> Result<CommandResult, CliError> {
        match command {
            CliCommand::New => {
                self.game = Game::new(self.options.capture_rule);
                self.state.tables.tt.clear();
            }
            CliCommand::Position(parts) => self.set_position(&parts)?,
            CliCommand::Moves => {
                let moves: Vec<String> = self
                    .game
                    .legal_moves()
                    .iter()
                    .map(|&mv| format_move(mv))
                    .collect();
                writeln!(out, "{}", moves.join(" "))?;
            }
            CliCommand::Move(text) => {
                self.ensure_running()?;
                let mv = self
                    .game
                    .position()
                    .parse_move(&text, self.game.capture_rule())
                    .map_err(|error| CliError::InvalidMove {
                        move_str: text.clone(),
                        error,
                    })?;
                self.game.apply_move(mv);
                self.report_outcome(out)?;
            }
            CliCommand::Undo => {
                if self.game.undo_move().is_none() {
                    writeln!(out, "nothing to undo")?;
                }
            }
            CliCommand::Go(limits) => {
                self.ensure_running()?;
                let result = self.think(limits);
                match result.best_move {
                    Some(mv) => {
                        writeln!(out, "bestmove {}", format_move(mv))?;
                        self.game.apply_move(mv);
                        self.report_outcome(out)?;
                    }
                    None => writeln!(out, "bestmove (none)")?,
                }
            }
            CliCommand::Perft(depth) => {
                let start = Instant::now();
                let mut position = *self.game.position();
                let nodes = position.perft(depth, self.game.capture_rule());
                let elapsed = start.elapsed().as_millis();
                writeln!(out, "perft {depth}: {nodes} nodes ({elapsed} ms)")?;
            }
            CliCommand::Divide(depth) => {
                let mut position = *self.game.position();
                let split = position.divide(depth, self.game.capture_rule());
                let total: u64 = split.iter().map(|(_, n)| n).sum();
                for (mv, nodes) in split {
                    writeln!(out, "{}: {nodes}", format_move(mv))?;
                }
                writeln!(out, "total: {total}")?;
            }
            CliCommand::Eval => self.print_eval(out)?,
            CliCommand::Show => {
                let position = self.game.position();
                writeln!(out, "{position}")?;
                writeln!(out, "{}", position.to_notation())?;
                writeln!(out, "{} to move", position.side_to_move())?;
            }
            CliCommand::Options => {
                for line in self.options.describe() {
                    writeln!(out, "{line}")?;
                }
            }
            CliCommand::SetOption { name, value } => {
                let action = self
                    .options
                    .apply_setoption(&name, value.as_deref())
                    .map_err(CliError::InvalidOption)?;
                match action {
                    Some(OptionAction::ReinitHash(mb)) => self.state.reset_tables(mb),
                    Some(OptionAction::SetCaptureRule(rule)) => self.game.set_capture_rule(rule),
                    None => {}
                }
            }
            CliCommand::SelfPlay(plies) => self.self_play(plies, out)?,
            CliCommand::Quit => return Ok(CommandResult::Quit),
            CliCommand::Unknown(line) => {
                log::warn!("unknown command: {line}");
                writeln!(out, "unknown command: {line}")?;
            }
        }
        Ok(CommandResult::Continue)
    }

    fn ensure_running(&self) -> Result<(), CliError> {
        match self.game.outcome() {
            Some(outcome) => Err(CliError::GameOver(outcome)),
            None => Ok(()),
        }
    }

    fn set_position(&mut self, parts: &[String]) -> Result<(), CliError> {
        let notation = parts.get(1).ok_or(CliError::MissingParts)?;
        let position = if notation == "startpos" {
            Position::new()
        } else {
            notation.parse::<Position>()?
        };

        let mut game = Game::from_position(position, self.options.capture_rule);
        if parts.get(2).map(String::as_str) == Some("moves") {
            for text in &parts[3..] {
                let mv = game
                    .position()
                    .parse_move(text, game.capture_rule())
                    .map_err(|error| CliError::InvalidMove {
                        move_str: text.clone(),
                        error,
                    })?;
                game.apply_move(mv);
            }
        }
        self.game = game;
        Ok(())
    }

    fn think(&mut self, limits: GoLimits) -> SearchResult {
        let explicit = limits.depth.is_some() || limits.nodes.is_some();
        let time_ms = limits
            .movetime_ms
            .unwrap_or(if explicit { 0 } else { self.options.movetime_ms });

        let mut config = SearchConfig::time(time_ms).with_nodes(limits.nodes.unwrap_or(0));
        config.max_depth = limits.depth;
        search(&mut self.game, &mut self.state, config, &self.stop)
    }

    fn print_eval<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let position = self.game.position();
        let terms = position.eval_terms();
        writeln!(out, "material    {:>6}", terms.material)?;
        writeln!(out, "advancement {:>6}", terms.advancement)?;
        writeln!(out, "center      {:>6}", terms.center)?;
        writeln!(out, "king chase  {:>6}", terms.king_chase)?;
        writeln!(out, "mobility    {:>6}", terms.mobility)?;
        writeln!(out, "passed      {:>6}", terms.passed)?;
        writeln!(out, "wings       {:>6}", terms.wings)?;
        writeln!(out, "traps       {:>6}", terms.traps)?;
        writeln!(out, "safety      {:>6}", terms.safety)?;
        writeln!(out, "total       {:>6} (White)", terms.total())?;
        writeln!(
            out,
            "score       {:>6} ({} to move)",
            position.evaluate(),
            position.side_to_move()
        )
    }

    fn report_outcome<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if let Some(outcome) = self.game.outcome() {
            writeln!(out, "result: {outcome}")?;
        }
        Ok(())
    }

    /// Let the engine play both sides for up to `plies` moves.
    fn self_play<W: Write>(&mut self, plies: usize, out: &mut W) -> Result<(), CliError> {
        for _ in 0..plies {
            if self.game.outcome().is_some() {
                break;
            }
            let mover = self.game.position().side_to_move();
            let result = self.think(GoLimits::default());
            let Some(mv) = result.best_move else {
                break;
            };
            writeln!(
                out,
                "{:>3}. {mover}: {} (score {}, depth {})",
                self.game.ply() + 1,
                format_move(mv),
                result.score,
                result.depth
            )?;
            self.game.apply_move(mv);
        }

        match self.game.outcome() {
            Some(outcome) => writeln!(out, "result: {outcome}")?,
            None => writeln!(out, "no result after {} plies", self.game.ply())?,
        }
        Ok(())
    }
}

/// Run the host loop on stdin/stdout until `quit` or end of input.
pub fn run_cli_loop() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::default();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let mut out = stdout.lock();
        match session.execute_line(&line, &mut out) {
            Ok(CommandResult::Quit) => break,
            Ok(CommandResult::Continue) => {}
            Err(e) => {
                let _ = writeln!(out, "error: {e}");
            }
        }
        let _ = out.flush();
    }
}
