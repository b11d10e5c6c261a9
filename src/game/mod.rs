//! Game sessions.
//!
//! A `Session` ties a board to the rules and to the number of chemical types
//! that must end up sorted. It is what front ends talk to: feed it raw input,
//! render its snapshots, stop calling it to quit.

mod session;

pub use session::{Session, SessionStatus};
