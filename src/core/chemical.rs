//! Chemical tokens and flask identifiers.
//!
//! ## Chemical
//!
//! An opaque, comparable token naming a substance type (a short code such
//! as `AA`). The engine only ever compares chemicals for equality; colours
//! and glyphs belong to whoever renders the board.
//!
//! ## FlaskId
//!
//! Type-safe, 1-based flask number. Flask numbers are what players type and
//! what layout directives name, so the engine keeps them 1-based and only
//! converts to a 0-based slot at the storage boundary.

use serde::{Deserialize, Serialize};

/// A single unit of some chemical.
///
/// ```
/// use flask_sort::core::Chemical;
///
/// let a = Chemical::new("AA");
/// assert_eq!(a, Chemical::new("AA"));
/// assert_ne!(a, Chemical::new("BB"));
/// assert_eq!(a.code(), "AA");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chemical(String);

impl Chemical {
    /// Create a chemical from its token text.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The token text.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Chemical {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Chemical {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Flask number, 1-based.
///
/// `FlaskId(1)` is the first flask on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FlaskId(pub u16);

impl FlaskId {
    /// Create a flask ID from its 1-based number.
    #[must_use]
    pub const fn new(number: u16) -> Self {
        Self(number)
    }

    /// Create a flask ID from a 0-based storage slot.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index as u16 + 1)
    }

    /// The 1-based flask number.
    #[must_use]
    pub const fn number(self) -> u16 {
        self.0
    }

    /// The 0-based storage slot.
    ///
    /// Only meaningful for IDs that passed a range check; `FlaskId(0)`
    /// has no slot.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 as usize).saturating_sub(1)
    }

    /// Check whether this ID names a flask on a board of `flask_count`.
    #[must_use]
    pub const fn in_range(self, flask_count: usize) -> bool {
        self.0 >= 1 && (self.0 as usize) <= flask_count
    }

    /// Iterate over all flask IDs for a board of `flask_count` flasks.
    ///
    /// ```
    /// use flask_sort::core::FlaskId;
    ///
    /// let ids: Vec<_> = FlaskId::all(3).collect();
    /// assert_eq!(ids, vec![FlaskId::new(1), FlaskId::new(2), FlaskId::new(3)]);
    /// ```
    pub fn all(flask_count: usize) -> impl Iterator<Item = FlaskId> {
        (0..flask_count).map(FlaskId::from_index)
    }
}

impl std::fmt::Display for FlaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
