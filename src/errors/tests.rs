//! Unit tests for diagnostics.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        Position(10, Rc::new("test.txt".to_string())),
        1,
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.get_kind(), &ErrorImpl::UnrecognisedCharacter { character: '@' });
}

#[test]
fn test_error_position_and_line() {
    let pos = Position(42, Rc::new("test.txt".to_string()));
    let error = Error::new(ErrorImpl::UnrecognisedCharacter { character: '#' }, pos.clone(), 3);

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.txt");
    assert_eq!(error.get_line(), 3);
}

#[test]
fn test_unrecognised_character_message() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '#' },
        Position(2, Rc::new("test.txt".to_string())),
        1,
    );

    assert_eq!(error.to_string(), "[Line 1] could not identify: '#'");
}

#[test]
fn test_no_rule_matched_message() {
    let error = Error::new(
        ErrorImpl::NoRuleMatched,
        Position(17, Rc::new("test.txt".to_string())),
        4,
    );

    assert_eq!(error.get_error_name(), "NoRuleMatched");
    assert_eq!(error.to_string(), "[Line 4] could not identify character at position 17");
}

#[test]
fn test_error_tips() {
    let unrecognised = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '\r' },
        Position(0, Rc::new("test.txt".to_string())),
        1,
    );
    match unrecognised.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Remove or replace `\\r`"),
        ErrorTip::None => panic!("expected a suggestion"),
    }

    let no_match = Error::new(
        ErrorImpl::NoRuleMatched,
        Position(0, Rc::new("test.txt".to_string())),
        1,
    );
    assert!(matches!(no_match.get_tip(), ErrorTip::None));
    assert_eq!(no_match.get_tip().to_string(), "");
}
