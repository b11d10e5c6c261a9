//! Move validation failures.
//!
//! Every rejected pour carries a `MoveErrorKind` for programmatic handling
//! and a message fit to show the player. Rejections never touch the board.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::FlaskId;

/// Which rule a rejected pour broke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveErrorKind {
    InvalidSourceIndex,
    SourceEmpty,
    SourceComplete,
    InvalidTargetIndex,
    SameFlask,
    TargetFull,
    TargetComplete,
}

/// A rejected pour.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("`{input}` is not a flask, enter a number from 1 to {flask_count}")]
    InvalidSourceIndex { input: String, flask_count: usize },

    #[error("flask {0} is empty, pour from a filled flask")]
    SourceEmpty(FlaskId),

    #[error("flask {0} is complete, cannot pour from it")]
    SourceComplete(FlaskId),

    #[error("`{input}` is not a flask, enter a number from 1 to {flask_count}")]
    InvalidTargetIndex { input: String, flask_count: usize },

    #[error("cannot pour flask {0} into itself")]
    SameFlask(FlaskId),

    #[error("flask {0} is full")]
    TargetFull(FlaskId),

    #[error("flask {0} is complete, cannot pour into it")]
    TargetComplete(FlaskId),
}

impl MoveError {
    #[must_use]
    pub fn kind(&self) -> MoveErrorKind {
        match self {
            MoveError::InvalidSourceIndex { .. } => MoveErrorKind::InvalidSourceIndex,
            MoveError::SourceEmpty(_) => MoveErrorKind::SourceEmpty,
            MoveError::SourceComplete(_) => MoveErrorKind::SourceComplete,
            MoveError::InvalidTargetIndex { .. } => MoveErrorKind::InvalidTargetIndex,
            MoveError::SameFlask(_) => MoveErrorKind::SameFlask,
            MoveError::TargetFull(_) => MoveErrorKind::TargetFull,
            MoveError::TargetComplete(_) => MoveErrorKind::TargetComplete,
        }
    }

    /// Message for the player.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check whether the error is about the source flask (as opposed to
    /// the target). The prompt loop uses this to decide what to re-ask.
    #[must_use]
    pub fn is_source_error(&self) -> bool {
        matches!(
            self.kind(),
            MoveErrorKind::InvalidSourceIndex
                | MoveErrorKind::SourceEmpty
                | MoveErrorKind::SourceComplete
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let cases = [
            (
                MoveError::InvalidSourceIndex { input: "x".into(), flask_count: 4 },
                MoveErrorKind::InvalidSourceIndex,
            ),
            (MoveError::SourceEmpty(FlaskId::new(1)), MoveErrorKind::SourceEmpty),
            (MoveError::SourceComplete(FlaskId::new(1)), MoveErrorKind::SourceComplete),
            (
                MoveError::InvalidTargetIndex { input: "9".into(), flask_count: 4 },
                MoveErrorKind::InvalidTargetIndex,
            ),
            (MoveError::SameFlask(FlaskId::new(2)), MoveErrorKind::SameFlask),
            (MoveError::TargetFull(FlaskId::new(3)), MoveErrorKind::TargetFull),
            (MoveError::TargetComplete(FlaskId::new(4)), MoveErrorKind::TargetComplete),
        ];

        for (error, kind) in cases {
            assert_eq!(error.kind(), kind);
            assert!(!error.message().is_empty());
        }
    }

    #[test]
    fn test_messages() {
        let err = MoveError::InvalidSourceIndex { input: "abc".into(), flask_count: 8 };
        assert_eq!(err.message(), "`abc` is not a flask, enter a number from 1 to 8");

        assert_eq!(
            MoveError::SameFlask(FlaskId::new(3)).to_string(),
            "cannot pour flask 3 into itself"
        );
    }

    #[test]
    fn test_is_source_error() {
        assert!(MoveError::SourceEmpty(FlaskId::new(1)).is_source_error());
        assert!(!MoveError::TargetFull(FlaskId::new(1)).is_source_error());
        assert!(!MoveError::SameFlask(FlaskId::new(1)).is_source_error());
    }
}
