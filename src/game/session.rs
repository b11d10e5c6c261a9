//! A single game session: one board played until solved or abandoned.

use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardSnapshot};
use crate::core::{FlaskId, Pour, PourRecord};
use crate::layout::Layout;
use crate::rules::{FlaskRules, MoveError, RulesEngine};

/// Where a session stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Pours are still needed.
    InProgress,
    /// Every chemical type sits in its own complete flask.
    Solved,
}

/// One game in progress.
///
/// Owns the board and the number of chemical types that must be sorted.
/// Consumers drive it with raw input strings and render from `snapshot()`.
///
/// ## Example
///
/// ```
/// use flask_sort::core::GameConfig;
/// use flask_sort::game::{Session, SessionStatus};
/// use flask_sort::layout::parse_layout;
///
/// let text = "2 1\nAA\nAA\n21\nAA\n12\n";
/// let layout = parse_layout(text, &GameConfig::default()).unwrap();
/// let mut session = Session::from_layout(layout);
///
/// assert_eq!(session.status(), SessionStatus::InProgress);
/// session.attempt_move("2", "1").unwrap();
/// assert_eq!(session.status(), SessionStatus::Solved);
/// ```
#[derive(Clone, Debug)]
pub struct Session<R: RulesEngine = FlaskRules> {
    board: Board,
    total_chemical_types: usize,
    rules: R,
}

impl Session<FlaskRules> {
    /// Start a session on a board with the standard rules.
    #[must_use]
    pub fn new(board: Board, total_chemical_types: usize) -> Self {
        Self::with_rules(board, total_chemical_types, FlaskRules)
    }

    /// Start a session from a loaded layout.
    #[must_use]
    pub fn from_layout(layout: Layout) -> Self {
        Self::new(layout.board, layout.total_chemical_types)
    }
}

impl<R: RulesEngine> Session<R> {
    /// Start a session with custom rules.
    #[must_use]
    pub fn with_rules(board: Board, total_chemical_types: usize, rules: R) -> Self {
        Self {
            board,
            total_chemical_types,
            rules,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of complete flasks needed to win.
    #[must_use]
    pub fn total_chemical_types(&self) -> usize {
        self.total_chemical_types
    }

    /// Pours applied so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.board.moves()
    }

    /// First half of an interactive move.
    pub fn validate_source(&self, input: &str) -> Result<FlaskId, MoveError> {
        self.rules.validate_source(&self.board, input)
    }

    /// Second half of an interactive move.
    pub fn validate_target(&self, source: FlaskId, input: &str) -> Result<FlaskId, MoveError> {
        self.rules.validate_target(&self.board, source, input)
    }

    /// Validate and apply a pour given as raw input.
    pub fn attempt_move(&mut self, source: &str, target: &str) -> Result<PourRecord, MoveError> {
        self.rules.attempt_move(&mut self.board, source, target)
    }

    /// Apply a pour whose halves were validated with `validate_source` and
    /// `validate_target` on the current board.
    pub fn apply(&mut self, pour: Pour) -> PourRecord {
        self.rules.apply_pour(&mut self.board, pour)
    }

    /// Pours that would currently be accepted.
    #[must_use]
    pub fn legal_pours(&self) -> Vec<Pour> {
        self.rules.legal_pours(&self.board)
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.rules.is_solved(&self.board, self.total_chemical_types)
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        if self.is_solved() {
            SessionStatus::Solved
        } else {
            SessionStatus::InProgress
        }
    }

    /// Read-only view of the board for rendering.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }
}
