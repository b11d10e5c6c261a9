//! Interactive prompt loop.
//!
//! Each round draws the board, asks for a flask to pour from, then a flask
//! to pour into. A rejected source re-asks the source; a rejected target
//! re-asks only the target. `quit` (any case) at either prompt ends the
//! session, as does end of input.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use super::render::BoardRenderer;
use crate::core::Pour;
use crate::game::Session;
use crate::rules::RulesEngine;

pub const TITLE: &str = "Magical Flask Game";
pub const SOURCE_PROMPT: &str = "Select a flask to pour from: ";
pub const TARGET_PROMPT: &str = "Select a flask to pour into: ";
pub const WIN_MESSAGE: &str = "You win!";
pub const QUIT_MESSAGE: &str = "Exiting...";

/// How an interactive session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Puzzle solved after `moves` pours.
    Won { moves: u32 },
    /// Player quit or input ended.
    Quit,
}

enum Reply {
    Line(String),
    Quit,
}

/// Drives a `Session` from line-based input.
pub struct Prompt<I, O> {
    input: I,
    output: O,
    renderer: BoardRenderer,
}

impl<I: BufRead, O: Write> Prompt<I, O> {
    pub fn new(input: I, output: O, renderer: BoardRenderer) -> Self {
        Self {
            input,
            output,
            renderer,
        }
    }

    /// Hand back the output, e.g. to inspect what was written.
    pub fn into_output(self) -> O {
        self.output
    }

    /// Play until the puzzle is solved or the player quits.
    pub fn run<R: RulesEngine>(&mut self, session: &mut Session<R>) -> io::Result<Outcome> {
        let outcome = loop {
            if session.is_solved() {
                break Outcome::Won {
                    moves: session.moves(),
                };
            }

            self.draw(session)?;

            let Some(pour) = self.read_pour(session)? else {
                break Outcome::Quit;
            };
            let record = session.apply(pour);
            debug!(pour = %record.pour, chemical = %record.chemical, "player poured");
        };

        self.renderer.clear(&mut self.output)?;
        match outcome {
            Outcome::Won { moves } => {
                info!(moves, "player won");
                writeln!(self.output, "{WIN_MESSAGE}")?;
            }
            Outcome::Quit => {
                info!(moves = session.moves(), "player quit");
                writeln!(self.output, "{QUIT_MESSAGE}")?;
            }
        }
        self.output.flush()?;

        Ok(outcome)
    }

    fn draw<R: RulesEngine>(&mut self, session: &Session<R>) -> io::Result<()> {
        self.renderer.clear(&mut self.output)?;
        writeln!(self.output, "{TITLE}")?;
        writeln!(self.output)?;
        self.renderer.render(&mut self.output, &session.snapshot())?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Ask for a source, then a target. `None` means quit.
    fn read_pour<R: RulesEngine>(&mut self, session: &Session<R>) -> io::Result<Option<Pour>> {
        let source = loop {
            let Reply::Line(line) = self.ask(SOURCE_PROMPT)? else {
                return Ok(None);
            };
            match session.validate_source(&line) {
                Ok(source) => break source,
                Err(err) => writeln!(self.output, "{err}")?,
            }
        };

        let target = loop {
            let Reply::Line(line) = self.ask(TARGET_PROMPT)? else {
                return Ok(None);
            };
            match session.validate_target(source, &line) {
                Ok(target) => break target,
                Err(err) => writeln!(self.output, "{err}")?,
            }
        };

        Ok(Some(Pour::new(source, target)))
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Reply> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Reply::Quit);
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") {
            return Ok(Reply::Quit);
        }
        Ok(Reply::Line(line.to_string()))
    }
}
