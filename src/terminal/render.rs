//! Board rendering.
//!
//! Flasks are drawn as columns, four to a row, top level first:
//!
//! ```text
//! |  | +--+ |  | |  |
//! |BB| |AA| |  | |  |
//! |AA| |AA| |  | |  |
//! |BB| |AA| |CC| |  |
//! +--+ +--+ +--+ +--+
//!   1    2    3    4
//! ```
//!
//! A complete flask is capped with `+--+`. The last pour's source number is
//! red and its target number green.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{Clear, ClearType};

use super::palette::{chemical_color, SOURCE_HIGHLIGHT, TARGET_HIGHLIGHT};
use crate::board::{BoardSnapshot, FlaskView};

/// Flasks drawn side by side before wrapping to a new row.
pub const FLASKS_PER_ROW: usize = 4;

/// Draws board snapshots as text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardRenderer {
    /// Emit ANSI colours.
    pub color: bool,

    /// Clear the screen before each frame.
    pub clear_screen: bool,
}

impl Default for BoardRenderer {
    fn default() -> Self {
        Self {
            color: true,
            clear_screen: true,
        }
    }
}

impl BoardRenderer {
    /// Renderer without colours or screen control, for logs and tests.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            color: false,
            clear_screen: false,
        }
    }

    /// Clear the screen and home the cursor, if enabled.
    pub fn clear<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.clear_screen {
            queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// Draw every flask, wrapping every `FLASKS_PER_ROW`.
    pub fn render<W: Write>(&self, out: &mut W, snapshot: &BoardSnapshot) -> io::Result<()> {
        let levels = snapshot.max_capacity();

        for (row, flasks) in snapshot.flasks.chunks(FLASKS_PER_ROW).enumerate() {
            if row > 0 {
                writeln!(out)?;
            }
            for level in (0..levels).rev() {
                let cells: Vec<String> = flasks.iter().map(|f| self.cell(f, level)).collect();
                writeln!(out, "{}", cells.join(" "))?;
            }
            writeln!(out, "{}", vec!["+--+"; flasks.len()].join(" "))?;

            let numbers: Vec<String> = flasks.iter().map(|f| self.number(f)).collect();
            writeln!(out, "{}", numbers.join("  "))?;
        }

        Ok(())
    }

    /// Render a snapshot into a string.
    #[must_use]
    pub fn render_to_string(&self, snapshot: &BoardSnapshot) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.render(&mut buf, snapshot);
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn cell(&self, flask: &FlaskView, level: usize) -> String {
        match flask.unit_at(level) {
            Some(unit) => {
                let code = format!("{:2.2}", unit.code());
                match chemical_color(unit).filter(|_| self.color) {
                    Some(color) => format!("|{}|", code.as_str().on(color)),
                    None => format!("|{code}|"),
                }
            }
            None if flask.is_complete => "+--+".to_string(),
            None => "|  |".to_string(),
        }
    }

    fn number(&self, flask: &FlaskView) -> String {
        let label = format!("{:>3}", flask.id.number());
        let highlight: Option<Color> = if flask.is_pour_source {
            Some(SOURCE_HIGHLIGHT)
        } else if flask.is_pour_target {
            Some(TARGET_HIGHLIGHT)
        } else {
            None
        };

        match highlight.filter(|_| self.color) {
            Some(color) => label.as_str().with(color).to_string(),
            None => label,
        }
    }
}
