//! Layout loading.
//!
//! Turns a puzzle description (header, chemical tokens, distribution
//! directives) into a filled `Board`. Reading the file is the caller's job;
//! this module only sees tokens or text.
//!
//! ## Key Types
//!
//! - `LayoutHeader`: `"<flasks> <chemical types>"`
//! - `LayoutToken`: A chemical or a distribution directive
//! - `LayoutLoader`: Incremental loader built around a `StagingBuffer`
//! - `Layout`: The loaded board and its counts

pub mod token;
pub mod loader;

pub use token::{LayoutHeader, LayoutToken};
pub use loader::{load_layout, parse_layout, Layout, LayoutLoader};
