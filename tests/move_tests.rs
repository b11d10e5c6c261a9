//! Pour validation, execution and win detection integration tests.
//!
//! These tests drive whole sessions through the public API, including
//! randomized boards and move sequences.

use flask_sort::board::Board;
use flask_sort::core::{Chemical, FlaskId, GameConfig};
use flask_sort::game::{Session, SessionStatus};
use flask_sort::layout::parse_layout;
use flask_sort::rules::{is_game_solved, FlaskRules, MoveErrorKind, RulesEngine};
use proptest::prelude::*;

fn board_with(contents: &[Vec<&str>]) -> Board {
    let mut board = Board::new(contents.len(), &GameConfig::default());
    for (i, units) in contents.iter().enumerate() {
        for code in units {
            board.fill(FlaskId::from_index(i), Chemical::new(*code)).unwrap();
        }
    }
    board
}

/// Up to 6 flasks of up to 4 units drawn from three chemicals.
fn arbitrary_board() -> impl Strategy<Value = Board> {
    let flask = prop::collection::vec(prop::sample::select(vec!["AA", "BB", "CC"]), 0..=4);
    prop::collection::vec(flask, 1..=6).prop_map(|contents| board_with(&contents))
}

// =============================================================================
// Pour Properties
// =============================================================================

proptest! {
    /// An accepted pour moves exactly one unit; a rejected one changes nothing.
    #[test]
    fn prop_pour_moves_one_unit_or_nothing(
        board in arbitrary_board(),
        source in 0u16..8,
        target in 0u16..8
    ) {
        let mut board = board;
        let before = board.clone();
        let result = FlaskRules.attempt_move(&mut board, &source.to_string(), &target.to_string());

        match result {
            Ok(record) => {
                let s = record.pour.source;
                let t = record.pour.target;
                prop_assert_eq!(board.flask(s).unwrap().size() + 1, before.flask(s).unwrap().size());
                prop_assert_eq!(board.flask(t).unwrap().size(), before.flask(t).unwrap().size() + 1);
                prop_assert_eq!(board.flask(t).unwrap().peek(), before.flask(s).unwrap().peek());
                prop_assert_eq!(board.unit_count(), before.unit_count());
            }
            Err(_) => prop_assert_eq!(board, before),
        }
    }

    /// Pouring from an empty flask is always `SourceEmpty`.
    #[test]
    fn prop_empty_source_rejected(board in arbitrary_board(), target in 1u16..8) {
        let empty = board.flasks().find(|(_, f)| f.is_empty()).map(|(id, _)| id);
        prop_assume!(empty.is_some());
        let source = empty.unwrap();
        prop_assume!(source != FlaskId::new(target));

        let mut board = board;
        let before = board.clone();
        let err = FlaskRules
            .attempt_move(&mut board, &source.to_string(), &target.to_string())
            .unwrap_err();

        prop_assert_eq!(err.kind(), MoveErrorKind::SourceEmpty);
        prop_assert_eq!(board, before);
    }

    /// Pouring a flask into itself is always `SameFlask`.
    #[test]
    fn prop_same_flask_rejected(board in arbitrary_board(), flask in 1u16..=6) {
        prop_assume!(FlaskId::new(flask).in_range(board.flask_count()));

        let mut board = board;
        let before = board.clone();
        let err = FlaskRules
            .attempt_move(&mut board, &flask.to_string(), &flask.to_string())
            .unwrap_err();

        prop_assert_eq!(err.kind(), MoveErrorKind::SameFlask);
        prop_assert_eq!(board, before);
    }

    /// The solved check is exactly "complete flasks == chemical types".
    #[test]
    fn prop_solved_iff_complete_count_matches(board in arbitrary_board(), types in 0usize..6) {
        let complete = board.flasks().filter(|(_, f)| f.is_complete()).count();
        prop_assert_eq!(is_game_solved(&board, types), complete == types);
    }
}

// =============================================================================
// Validation Order
// =============================================================================

/// Each rule produces its own error kind.
#[test]
fn test_each_rule_has_its_own_kind() {
    let board = board_with(&[
        vec![],
        vec!["AA", "AA", "AA"],
        vec!["BB"],
        vec!["AA", "BB", "AA", "BB"],
        vec!["CC", "CC", "CC"],
        vec![],
    ]);
    let kind = |s: &str, t: &str| FlaskRules.validate(&board, s, t).unwrap_err().kind();

    assert_eq!(kind("seven", "3"), MoveErrorKind::InvalidSourceIndex);
    assert_eq!(kind("0", "3"), MoveErrorKind::InvalidSourceIndex);
    assert_eq!(kind("1", "3"), MoveErrorKind::SourceEmpty);
    assert_eq!(kind("2", "3"), MoveErrorKind::SourceComplete);
    assert_eq!(kind("3", "x"), MoveErrorKind::InvalidTargetIndex);
    assert_eq!(kind("3", "7"), MoveErrorKind::InvalidTargetIndex);
    assert_eq!(kind("3", "3"), MoveErrorKind::SameFlask);
    assert_eq!(kind("3", "4"), MoveErrorKind::TargetFull);
    assert_eq!(kind("3", "5"), MoveErrorKind::TargetComplete);
    assert!(FlaskRules.validate(&board, "3", "6").is_ok());
}

/// Messages are ready to show to the player.
#[test]
fn test_error_messages_are_readable() {
    let board = board_with(&[vec!["AA"], vec!["AA", "BB", "AA", "BB"]]);

    let err = FlaskRules.validate(&board, "1", "2").unwrap_err();
    assert_eq!(err.message(), "flask 2 is full");

    let err = FlaskRules.validate(&board, "abc", "2").unwrap_err();
    assert_eq!(err.message(), "`abc` is not a flask, enter a number from 1 to 2");
}

// =============================================================================
// Full Games
// =============================================================================

/// The bundled four-flask level can be played to a win.
#[test]
fn test_play_bundled_level_to_win() {
    let text = include_str!("../levels/chemicals1.txt");
    let layout = parse_layout(text, &GameConfig::default()).unwrap();
    let mut session = Session::from_layout(layout);

    // 1: AA BB | 2: BB AA | 3: BB AA | 4: -
    for (source, target) in [("2", "4"), ("3", "4"), ("1", "2"), ("1", "4"), ("3", "2")] {
        assert_eq!(session.status(), SessionStatus::InProgress);
        session.attempt_move(source, target).unwrap();
    }

    assert_eq!(session.status(), SessionStatus::Solved);
    assert_eq!(session.moves(), 5);
}

/// Snapshots track the latest pour and completeness.
#[test]
fn test_snapshot_after_move() {
    let mut session = Session::new(board_with(&[vec!["AA", "AA"], vec!["AA"], vec![]]), 1);

    session.attempt_move("2", "1").unwrap();
    let snapshot = session.snapshot();

    assert!(snapshot.flasks[0].is_complete);
    assert!(snapshot.flasks[0].is_pour_target);
    assert!(snapshot.flasks[1].is_pour_source);
    assert!(!snapshot.flasks[2].is_pour_source && !snapshot.flasks[2].is_pour_target);
    assert_eq!(snapshot.moves, 1);
}

/// Pours are allowed whatever the top units are.
#[test]
fn test_no_colour_matching_rule() {
    let mut session = Session::new(board_with(&[vec!["AA"], vec!["BB"]]), 2);

    session.attempt_move("1", "2").unwrap();

    let flask = session.board().flask(FlaskId::new(2)).unwrap();
    assert_eq!(flask.items(), &[Chemical::new("BB"), Chemical::new("AA")]);
}

/// A board of empty and uniform-full flasks is solved.
#[test]
fn test_uniform_or_empty_board_is_solved() {
    let board = board_with(&[
        vec!["AA", "AA", "AA"],
        vec![],
        vec!["BB", "BB", "BB"],
        vec!["CC", "CC", "CC"],
    ]);

    assert!(is_game_solved(&board, 3));
    assert_eq!(Session::new(board, 3).status(), SessionStatus::Solved);
}
