//! Bounded LIFO flask.
//!
//! A `Flask` holds chemical units bottom (index 0) to top (last). It never
//! holds more than its capacity, and it is *complete* when it holds exactly
//! `complete_count` units that are all the same chemical.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::chemical::Chemical;
use super::config::GameConfig;
use super::error::{ContainerError, StateError};

/// A single flask on the board.
///
/// ## Example
///
/// ```
/// use flask_sort::core::{Chemical, Flask};
///
/// let mut flask = Flask::new(4, 3);
/// for _ in 0..3 {
///     flask.push(Chemical::new("AA")).unwrap();
/// }
///
/// assert!(flask.is_complete());
/// assert!(!flask.is_full());
/// assert_eq!(flask.peek(), Some(&Chemical::new("AA")));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFlask")]
pub struct Flask {
    /// Units, bottom first.
    /// SmallVec keeps the usual 4-unit flask inline.
    items: SmallVec<[Chemical; 4]>,

    max_capacity: usize,

    complete_count: usize,
}

impl Flask {
    /// Create an empty flask.
    ///
    /// Panics if `max_capacity` is zero or `complete_count` is zero or
    /// larger than `max_capacity`.
    #[must_use]
    pub fn new(max_capacity: usize, complete_count: usize) -> Self {
        assert!(max_capacity > 0, "Flask capacity must be positive");
        assert!(
            (1..=max_capacity).contains(&complete_count),
            "Complete count must be in 1..=capacity"
        );

        Self {
            items: SmallVec::new(),
            max_capacity,
            complete_count,
        }
    }

    /// Create an empty flask sized by a game configuration.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.flask_capacity, config.complete_count)
    }

    /// Put a unit on top.
    pub fn push(&mut self, unit: Chemical) -> Result<(), ContainerError> {
        if self.is_full() {
            return Err(ContainerError::Full);
        }
        self.items.push(unit);
        Ok(())
    }

    /// Take the top unit off.
    pub fn pop(&mut self) -> Result<Chemical, ContainerError> {
        self.items.pop().ok_or(ContainerError::Empty)
    }

    /// The top unit, if any.
    #[must_use]
    pub fn peek(&self) -> Option<&Chemical> {
        self.items.last()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.max_capacity
    }

    /// Check whether the flask holds exactly `complete_count` identical units.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        if self.items.len() != self.complete_count {
            return false;
        }
        let distinct: FxHashSet<&Chemical> = self.items.iter().collect();
        distinct.len() == 1
    }

    /// Number of units currently held.
    #[must_use]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Maximum number of units.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.max_capacity
    }

    #[must_use]
    pub fn complete_count(&self) -> usize {
        self.complete_count
    }

    /// Room left before the flask is full.
    #[must_use]
    pub fn free_space(&self) -> usize {
        self.max_capacity - self.items.len()
    }

    /// Units, bottom first.
    #[must_use]
    pub fn items(&self) -> &[Chemical] {
        &self.items
    }
}

/// Unchecked wire form of a `Flask`.
#[derive(Deserialize)]
struct RawFlask {
    items: SmallVec<[Chemical; 4]>,
    max_capacity: usize,
    complete_count: usize,
}

impl TryFrom<RawFlask> for Flask {
    type Error = StateError;

    fn try_from(raw: RawFlask) -> Result<Self, Self::Error> {
        GameConfig::new(raw.max_capacity, raw.complete_count).validate()?;
        if raw.items.len() > raw.max_capacity {
            return Err(StateError::Overfilled {
                size: raw.items.len(),
                capacity: raw.max_capacity,
            });
        }

        Ok(Self {
            items: raw.items,
            max_capacity: raw.max_capacity,
            complete_count: raw.complete_count,
        })
    }
}
