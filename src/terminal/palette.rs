//! Chemical colours.
//!
//! The engine treats chemicals as opaque codes; only the terminal front end
//! knows that `AA` is drawn red.

use crossterm::style::Color;

use crate::core::Chemical;

/// Colour for the last pour's source flask number.
pub const SOURCE_HIGHLIGHT: Color = Color::DarkRed;

/// Colour for the last pour's target flask number.
pub const TARGET_HIGHLIGHT: Color = Color::DarkGreen;

/// Background colour for a chemical code, if it has one.
#[must_use]
pub fn chemical_color(chemical: &Chemical) -> Option<Color> {
    match chemical.code() {
        "AA" => Some(Color::DarkRed),
        "BB" => Some(Color::DarkBlue),
        "CC" => Some(Color::DarkGreen),
        "DD" => Some(Color::AnsiValue(208)), // orange
        "EE" => Some(Color::DarkYellow),
        "FF" => Some(Color::AnsiValue(198)), // magenta
        _ => None,
    }
}
