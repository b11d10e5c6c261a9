//! Error types shared across the engine.
//!
//! Move validation errors live in [`crate::rules`] since they are user-facing
//! outcomes of the rules, not failures of the data structures.

use thiserror::Error;

use super::action::Pour;
use super::chemical::FlaskId;

/// Failure of a raw flask operation.
///
/// The move validator gates every pour, so during play these indicate a
/// bypassed validator rather than bad input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// Push onto a flask already holding its maximum capacity.
    #[error("cannot push, flask is full")]
    Full,
    /// Pop from a flask with no units.
    #[error("cannot pop, flask is empty")]
    Empty,
}

/// Invalid [`GameConfig`](super::GameConfig) values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("flask capacity must be positive")]
    ZeroCapacity,
    #[error("complete count must be positive")]
    ZeroCompleteCount,
    #[error("complete count {complete_count} exceeds flask capacity {capacity}")]
    CompleteCountExceedsCapacity { complete_count: usize, capacity: usize },
}

/// Deserialized flask or board data that breaks a sizing invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("flask holds {size} units but its capacity is {capacity}")]
    Overfilled { size: usize, capacity: usize },

    #[error("board must have at least 1 flask")]
    NoFlasks,

    #[error("board has {0} flasks, more than a flask number can name")]
    TooManyFlasks(usize),

    #[error("selected pour {0} names a flask that is not on the board")]
    SelectionOutOfRange(Pour),
}

/// Failure while building a board from layout tokens.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The header or a directive could not be parsed.
    #[error("malformed layout: {0}")]
    Malformed(String),

    /// A directive named a flask that is not on the board.
    #[error("directive `{token}` names flask {flask}, but the board has {flask_count} flasks")]
    UnknownFlask {
        token: String,
        flask: u16,
        flask_count: usize,
    },

    /// A directive pushed more units than the flask can hold.
    #[error("directive `{token}` overflows flask {flask}")]
    Overflow { token: String, flask: FlaskId },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl LayoutError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        LayoutError::Malformed(reason.into())
    }
}
