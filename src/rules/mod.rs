//! Rules for pouring and winning.
//!
//! `RulesEngine` validates pours from raw player input, applies them, and
//! decides when the puzzle is solved. `FlaskRules` is the standard rule set.
//!
//! Validation failures are ordinary outcomes (`MoveError`), returned to the
//! caller so it can re-prompt; they never mutate the board.

pub mod engine;
pub mod error;

pub use engine::{is_game_solved, FlaskRules, RulesEngine};
pub use error::{MoveError, MoveErrorKind};
