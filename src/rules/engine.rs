//! Rules engine: pour validation, execution and win detection.
//!
//! The engine is the only thing allowed to mutate a board during play:
//! - Validate a proposed pour from raw player input
//! - Apply a validated pour
//! - Decide whether the puzzle is solved

use tracing::{debug, info};

use super::error::MoveError;
use crate::board::Board;
use crate::core::{FlaskId, Pour, PourRecord};

/// Parse a flask number typed by the player.
///
/// Accepts only ASCII digits (surrounding whitespace is ignored) naming a
/// flask in `1..=flask_count`.
fn parse_flask(input: &str, flask_count: usize) -> Option<FlaskId> {
    let text = input.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let id = FlaskId::new(text.parse::<u16>().ok()?);
    id.in_range(flask_count).then_some(id)
}

/// Check whether the number of complete flasks equals the number of
/// chemical types.
///
/// Always recomputed from the flasks; nothing is cached between moves.
///
/// ```
/// use flask_sort::board::Board;
/// use flask_sort::core::{Chemical, FlaskId, GameConfig};
/// use flask_sort::rules::is_game_solved;
///
/// let mut board = Board::new(2, &GameConfig::default());
/// for _ in 0..3 {
///     board.fill(FlaskId::new(1), Chemical::new("AA")).unwrap();
/// }
///
/// assert!(is_game_solved(&board, 1));
/// assert!(!is_game_solved(&board, 2));
/// ```
#[must_use]
pub fn is_game_solved(board: &Board, total_chemical_types: usize) -> bool {
    board.complete_flask_count() == total_chemical_types
}

/// Rules engine trait.
///
/// Validation is split in two so an interactive caller can reject a bad
/// source before asking for a target. `validate` and `attempt_move` run the
/// same checks in one go.
///
/// ## Implementation Notes
///
/// - Validation must not mutate the board
/// - `apply_pour` may assume the pour was validated
/// - `is_solved` must be derived from the board alone
pub trait RulesEngine {
    /// Check the source flask.
    ///
    /// Fails with `InvalidSourceIndex`, `SourceEmpty` or `SourceComplete`.
    fn validate_source(&self, board: &Board, input: &str) -> Result<FlaskId, MoveError>;

    /// Check the target flask for an already validated source.
    ///
    /// Fails with `InvalidTargetIndex`, `SameFlask`, `TargetFull` or
    /// `TargetComplete`.
    fn validate_target(
        &self,
        board: &Board,
        source: FlaskId,
        input: &str,
    ) -> Result<FlaskId, MoveError>;

    /// Apply a validated pour.
    fn apply_pour(&self, board: &mut Board, pour: Pour) -> PourRecord;

    /// Check whether the puzzle is solved.
    fn is_solved(&self, board: &Board, total_chemical_types: usize) -> bool {
        is_game_solved(board, total_chemical_types)
    }

    // === Convenience Methods ===

    /// Validate a full pour from raw input.
    ///
    /// A target that names the same flask as a well-formed source is
    /// rejected as `SameFlask` before either flask's contents are examined.
    fn validate(&self, board: &Board, source: &str, target: &str) -> Result<Pour, MoveError> {
        let flask_count = board.flask_count();
        let source_id =
            parse_flask(source, flask_count).ok_or_else(|| MoveError::InvalidSourceIndex {
                input: source.trim().to_string(),
                flask_count,
            })?;
        if parse_flask(target, flask_count) == Some(source_id) {
            return Err(MoveError::SameFlask(source_id));
        }

        let source_id = self.validate_source(board, source)?;
        let target_id = self.validate_target(board, source_id, target)?;
        Ok(Pour::new(source_id, target_id))
    }

    /// Validate and apply a pour. The board is untouched on error.
    fn attempt_move(
        &self,
        board: &mut Board,
        source: &str,
        target: &str,
    ) -> Result<PourRecord, MoveError> {
        let pour = self.validate(board, source, target)?;
        Ok(self.apply_pour(board, pour))
    }

    /// Enumerate every pour that would currently pass validation.
    fn legal_pours(&self, board: &Board) -> Vec<Pour> {
        let mut pours = Vec::new();

        for (source, _) in board.flasks() {
            let source_input = source.to_string();
            if self.validate_source(board, &source_input).is_err() {
                continue;
            }
            for (target, _) in board.flasks() {
                if self.validate_target(board, source, &target.to_string()).is_ok() {
                    pours.push(Pour::new(source, target));
                }
            }
        }

        pours
    }
}

/// The flask-sort rules.
///
/// Any top unit may be poured onto any other flask with room: the top units
/// of source and target do not have to match. Each pour moves one unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlaskRules;

impl FlaskRules {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RulesEngine for FlaskRules {
    fn validate_source(&self, board: &Board, input: &str) -> Result<FlaskId, MoveError> {
        let flask_count = board.flask_count();
        let invalid = || MoveError::InvalidSourceIndex {
            input: input.trim().to_string(),
            flask_count,
        };

        let id = parse_flask(input, flask_count).ok_or_else(invalid)?;
        let flask = board.flask(id).ok_or_else(invalid)?;

        if flask.is_empty() {
            return Err(MoveError::SourceEmpty(id));
        }
        if flask.is_complete() {
            return Err(MoveError::SourceComplete(id));
        }
        Ok(id)
    }

    fn validate_target(
        &self,
        board: &Board,
        source: FlaskId,
        input: &str,
    ) -> Result<FlaskId, MoveError> {
        let flask_count = board.flask_count();
        let invalid = || MoveError::InvalidTargetIndex {
            input: input.trim().to_string(),
            flask_count,
        };

        let id = parse_flask(input, flask_count).ok_or_else(invalid)?;
        if id == source {
            return Err(MoveError::SameFlask(id));
        }
        let flask = board.flask(id).ok_or_else(invalid)?;

        if flask.is_full() {
            return Err(MoveError::TargetFull(id));
        }
        if flask.is_complete() {
            return Err(MoveError::TargetComplete(id));
        }
        Ok(id)
    }

    fn apply_pour(&self, board: &mut Board, pour: Pour) -> PourRecord {
        match board.transfer(pour) {
            Ok(record) => {
                debug!(pour = %pour, complete = board.complete_flask_count(), "pour applied");
                record
            }
            Err(err) => panic!("pour {pour} bypassed validation: {err}"),
        }
    }

    fn is_solved(&self, board: &Board, total_chemical_types: usize) -> bool {
        let solved = is_game_solved(board, total_chemical_types);
        if solved {
            info!(moves = board.moves(), "puzzle solved");
        }
        solved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Chemical, GameConfig};
    use crate::rules::MoveErrorKind;

    fn board_with(contents: &[&[&str]]) -> Board {
        let mut board = Board::new(contents.len(), &GameConfig::default());
        for (i, units) in contents.iter().enumerate() {
            for code in *units {
                board.fill(FlaskId::from_index(i), Chemical::new(*code)).unwrap();
            }
        }
        board
    }

    fn kind_of(board: &Board, source: &str, target: &str) -> MoveErrorKind {
        FlaskRules.validate(board, source, target).unwrap_err().kind()
    }

    #[test]
    fn test_parse_flask() {
        assert_eq!(parse_flask("1", 4), Some(FlaskId::new(1)));
        assert_eq!(parse_flask(" 4 ", 4), Some(FlaskId::new(4)));
        assert_eq!(parse_flask("0", 4), None);
        assert_eq!(parse_flask("5", 4), None);
        assert_eq!(parse_flask("+1", 4), None);
        assert_eq!(parse_flask("-1", 4), None);
        assert_eq!(parse_flask("one", 4), None);
        assert_eq!(parse_flask("", 4), None);
        assert_eq!(parse_flask("99999999999", 4), None);
    }

    #[test]
    fn test_source_rules_in_order() {
        let board = board_with(&[&[], &["AA", "AA", "AA"], &["BB"], &[]]);

        assert_eq!(kind_of(&board, "x", "1"), MoveErrorKind::InvalidSourceIndex);
        assert_eq!(kind_of(&board, "5", "1"), MoveErrorKind::InvalidSourceIndex);
        assert_eq!(kind_of(&board, "1", "3"), MoveErrorKind::SourceEmpty);
        assert_eq!(kind_of(&board, "2", "4"), MoveErrorKind::SourceComplete);
        // Source checks come before target checks
        assert_eq!(kind_of(&board, "1", "x"), MoveErrorKind::SourceEmpty);
    }

    #[test]
    fn test_target_rules_in_order() {
        let board = board_with(&[
            &["AA"],
            &["BB", "BB", "BB"],
            &["AA", "BB", "AA", "BB"],
            &[],
        ]);

        assert_eq!(kind_of(&board, "1", ""), MoveErrorKind::InvalidTargetIndex);
        assert_eq!(kind_of(&board, "1", "9"), MoveErrorKind::InvalidTargetIndex);
        assert_eq!(kind_of(&board, "1", "1"), MoveErrorKind::SameFlask);
        assert_eq!(kind_of(&board, "1", "3"), MoveErrorKind::TargetFull);
        assert_eq!(kind_of(&board, "1", "2"), MoveErrorKind::TargetComplete);
        assert!(FlaskRules.validate(&board, "1", "4").is_ok());
    }

    #[test]
    fn test_same_flask_regardless_of_contents() {
        let board = board_with(&[&[], &["AA", "AA", "AA"], &["AA", "BB", "AA", "BB"]]);

        for n in ["1", "2", "3"] {
            assert_eq!(kind_of(&board, n, n), MoveErrorKind::SameFlask);
        }
    }

    #[test]
    fn test_mismatched_tops_are_allowed() {
        let mut board = board_with(&[&["AA"], &["BB"]]);

        let record = FlaskRules.attempt_move(&mut board, "1", "2").unwrap();

        assert_eq!(record.chemical, Chemical::new("AA"));
        assert_eq!(
            board.flask(FlaskId::new(2)).unwrap().items(),
            &[Chemical::new("BB"), Chemical::new("AA")]
        );
    }

    #[test]
    fn test_rejected_move_leaves_board_unchanged() {
        let mut board = board_with(&[&[], &["AA", "BB"]]);
        let before = board.clone();

        let err = FlaskRules.attempt_move(&mut board, "1", "2").unwrap_err();

        assert_eq!(err, MoveError::SourceEmpty(FlaskId::new(1)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_two_step_validation() {
        let board = board_with(&[&["AA"], &[]]);

        let source = FlaskRules.validate_source(&board, "1").unwrap();
        assert_eq!(
            FlaskRules.validate_target(&board, source, "1"),
            Err(MoveError::SameFlask(FlaskId::new(1)))
        );
        assert_eq!(FlaskRules.validate_target(&board, source, "2"), Ok(FlaskId::new(2)));
    }

    #[test]
    fn test_solved_detection() {
        let mut board = board_with(&[&["AA", "AA"], &["BB", "BB", "BB"], &["AA"]]);
        assert!(!FlaskRules.is_solved(&board, 2));

        FlaskRules.attempt_move(&mut board, "3", "1").unwrap();
        assert!(FlaskRules.is_solved(&board, 2));
    }

    #[test]
    fn test_legal_pours() {
        let board = board_with(&[&["AA"], &["BB", "BB", "BB"], &[]]);

        let pours = FlaskRules.legal_pours(&board);

        // Flask 2 is complete: neither a source nor a target
        assert_eq!(pours, vec![Pour::new(FlaskId::new(1), FlaskId::new(3))]);
    }

    #[test]
    #[should_panic(expected = "bypassed validation")]
    fn test_unvalidated_pour_panics() {
        let mut board = board_with(&[&[], &[]]);
        FlaskRules.apply_pour(&mut board, Pour::new(FlaskId::new(1), FlaskId::new(2)));
    }
}
