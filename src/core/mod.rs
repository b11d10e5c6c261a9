//! Core engine types: chemicals, flasks, the staging buffer, pours, configuration.
//!
//! These are the building blocks every other module works with. None of them
//! knows about rendering or input; chemicals are opaque tokens.

pub mod chemical;
pub mod flask;
pub mod staging;
pub mod config;
pub mod action;
pub mod error;

pub use chemical::{Chemical, FlaskId};
pub use flask::Flask;
pub use staging::StagingBuffer;
pub use config::{GameConfig, DEFAULT_COMPLETE_COUNT, DEFAULT_FLASK_CAPACITY};
pub use action::{Pour, PourRecord};
pub use error::{ConfigError, ContainerError, LayoutError, StateError};
