//! # flask-sort
//!
//! A liquid-sorting puzzle engine. Chemicals are spread across bounded
//! flasks; the player pours the top unit of one flask into another until
//! every flask is empty or holds a single chemical at its complete count.
//!
//! ## Design Principles
//!
//! 1. **Opaque Chemicals**: The engine only compares chemical codes for
//!    equality. Colours and glyphs belong to the front end.
//!
//! 2. **Validate, Then Mutate**: Every pour is checked against the rules
//!    before the board changes. A rejected pour is an ordinary result, not
//!    a failure, and leaves the board untouched.
//!
//! 3. **Derived State Stays Derived**: Completeness and the win condition
//!    are recomputed from the flasks, never cached between moves.
//!
//! ## Modules
//!
//! - `core`: Chemicals, flasks, the staging buffer, pours, configuration, errors
//! - `board`: The board of flasks and its render snapshots
//! - `layout`: Loading a puzzle from header, chemical and directive tokens
//! - `rules`: Pour validation and execution, win detection
//! - `game`: Sessions tying a board to the rules
//! - `terminal`: Terminal renderer and prompt loop (feature `cli`)

pub mod core;
pub mod board;
pub mod layout;
pub mod rules;
pub mod game;

#[cfg(feature = "cli")]
pub mod terminal;

// Re-export commonly used types
pub use crate::core::{
    Chemical, FlaskId, Flask, StagingBuffer,
    GameConfig, Pour, PourRecord,
    ConfigError, ContainerError, LayoutError, StateError,
};

pub use crate::board::{Board, BoardSnapshot, FlaskView};

pub use crate::layout::{load_layout, parse_layout, Layout, LayoutHeader, LayoutLoader, LayoutToken};

pub use crate::rules::{is_game_solved, FlaskRules, MoveError, MoveErrorKind, RulesEngine};

pub use crate::game::{Session, SessionStatus};
