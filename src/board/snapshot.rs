//! Read-only board views handed to renderers.
//!
//! A snapshot is built once per move from the flasks themselves, so what a
//! renderer draws can never drift from the board it came from.

use serde::{Deserialize, Serialize};

use crate::core::{Chemical, FlaskId};

/// One flask as a renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlaskView {
    pub id: FlaskId,

    /// Units, bottom first.
    pub items: Vec<Chemical>,

    pub capacity: usize,

    pub is_complete: bool,

    /// Flask was poured from on the last move.
    pub is_pour_source: bool,

    /// Flask was poured into on the last move.
    pub is_pour_target: bool,
}

impl FlaskView {
    /// Unit at `level` (0 = bottom), if the flask is filled that high.
    #[must_use]
    pub fn unit_at(&self, level: usize) -> Option<&Chemical> {
        self.items.get(level)
    }
}

/// Every flask on the board, in board order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub flasks: Vec<FlaskView>,

    /// Pours applied so far.
    pub moves: u32,
}

impl BoardSnapshot {
    /// Get a flask view by number.
    #[must_use]
    pub fn flask(&self, id: FlaskId) -> Option<&FlaskView> {
        if id.in_range(self.flasks.len()) {
            self.flasks.get(id.index())
        } else {
            None
        }
    }

    /// Tallest flask capacity, i.e. how many rows a renderer needs.
    #[must_use]
    pub fn max_capacity(&self) -> usize {
        self.flasks.iter().map(|f| f.capacity).max().unwrap_or(0)
    }

    /// Number of complete flasks.
    #[must_use]
    pub fn complete_count(&self) -> usize {
        self.flasks.iter().filter(|f| f.is_complete).count()
    }
}
