//! Board of flasks.
//!
//! ## Key Types
//!
//! - `Board`: The flasks in play, numbered `1..=N`, and the last pour
//! - `BoardSnapshot`: Per-move, read-only view for renderers
//! - `FlaskView`: One flask inside a snapshot

pub mod state;
pub mod snapshot;

pub use state::Board;
pub use snapshot::{BoardSnapshot, FlaskView};
