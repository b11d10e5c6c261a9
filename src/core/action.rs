//! Pour representation.
//!
//! A pour moves exactly one unit from the top of a source flask to the top
//! of a target flask. `Pour` is the request; `PourRecord` is what the board
//! remembers after applying it.

use serde::{Deserialize, Serialize};

use super::chemical::{Chemical, FlaskId};

/// A single-unit transfer between two flasks.
///
/// ```
/// use flask_sort::core::{FlaskId, Pour};
///
/// let pour = Pour::new(FlaskId::new(1), FlaskId::new(3));
/// assert_eq!(pour.to_string(), "1 -> 3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pour {
    /// Flask the unit is taken from.
    pub source: FlaskId,

    /// Flask the unit is poured into.
    pub target: FlaskId,
}

impl Pour {
    #[must_use]
    pub const fn new(source: FlaskId, target: FlaskId) -> Self {
        Self { source, target }
    }
}

impl std::fmt::Display for Pour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// An applied pour with metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PourRecord {
    /// The pour that was applied.
    pub pour: Pour,

    /// The unit that moved.
    pub chemical: Chemical,

    /// 1-based move number within the session.
    pub sequence: u32,
}

impl PourRecord {
    #[must_use]
    pub fn new(pour: Pour, chemical: Chemical, sequence: u32) -> Self {
        Self {
            pour,
            chemical,
            sequence,
        }
    }
}
