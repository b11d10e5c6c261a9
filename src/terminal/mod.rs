//! Terminal front end.
//!
//! Everything here consumes the engine: it renders `BoardSnapshot`s and
//! feeds player input into a `Session`. Colours for chemical codes live in
//! `palette`, not in the engine.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::io;
//!
//! use flask_sort::core::GameConfig;
//! use flask_sort::game::Session;
//! use flask_sort::layout::parse_layout;
//! use flask_sort::terminal::{BoardRenderer, Prompt};
//!
//! let text = std::fs::read_to_string("chemicals1.txt").unwrap();
//! let layout = parse_layout(&text, &GameConfig::default()).unwrap();
//! let mut session = Session::from_layout(layout);
//!
//! let mut prompt = Prompt::new(io::stdin().lock(), io::stdout(), BoardRenderer::default());
//! let outcome = prompt.run(&mut session).unwrap();
//! ```

pub mod palette;
pub mod render;
pub mod prompt;

pub use palette::chemical_color;
pub use render::{BoardRenderer, FLASKS_PER_ROW};
pub use prompt::{Outcome, Prompt};
