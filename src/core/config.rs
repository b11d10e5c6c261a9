//! Game configuration.
//!
//! Puzzles configure the engine at startup with a `GameConfig`:
//! - `flask_capacity`: how many units a flask can hold
//! - `complete_count`: how many identical units make a flask complete
//!
//! The staging buffer used while loading a layout shares the flask capacity.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default number of units a flask can hold.
pub const DEFAULT_FLASK_CAPACITY: usize = 4;

/// Default number of identical units that complete a flask.
pub const DEFAULT_COMPLETE_COUNT: usize = 3;

/// Flask sizing for a game.
///
/// ```
/// use flask_sort::core::GameConfig;
///
/// let config = GameConfig::default().with_flask_capacity(5).with_complete_count(4);
/// assert!(config.validate().is_ok());
///
/// let bad = GameConfig::default().with_complete_count(9);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Maximum units per flask.
    pub flask_capacity: usize,

    /// Identical units required for a flask to count as complete.
    /// Never larger than `flask_capacity`.
    pub complete_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            flask_capacity: DEFAULT_FLASK_CAPACITY,
            complete_count: DEFAULT_COMPLETE_COUNT,
        }
    }
}

impl GameConfig {
    /// Create a configuration with explicit sizes.
    #[must_use]
    pub fn new(flask_capacity: usize, complete_count: usize) -> Self {
        Self {
            flask_capacity,
            complete_count,
        }
    }

    /// Set the flask capacity.
    #[must_use]
    pub fn with_flask_capacity(mut self, capacity: usize) -> Self {
        self.flask_capacity = capacity;
        self
    }

    /// Set the complete count.
    #[must_use]
    pub fn with_complete_count(mut self, count: usize) -> Self {
        self.complete_count = count;
        self
    }

    /// Check the sizing invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.flask_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.complete_count == 0 {
            return Err(ConfigError::ZeroCompleteCount);
        }
        if self.complete_count > self.flask_capacity {
            return Err(ConfigError::CompleteCountExceedsCapacity {
                complete_count: self.complete_count,
                capacity: self.flask_capacity,
            });
        }
        Ok(())
    }
}
