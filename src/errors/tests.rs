//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, ValueError};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::DuplicateTableEntry {
            non_terminal: "Z".to_string(),
            terminal: "int".to_string(),
        },
        Position(0, Rc::new("grammar".to_string())),
    );

    assert_eq!(error.get_error_name(), "DuplicateTableEntry");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("shell".to_string()));
    let error = Error::new(
        ErrorImpl::TerminalMismatch {
            expected: "ID".to_string(),
            received: "#".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "shell");
}

#[test]
fn test_terminal_mismatch_tip() {
    let error = Error::new(
        ErrorImpl::TerminalMismatch {
            expected: "ID".to_string(),
            received: "9lives".to_string(),
        },
        Position(4, Rc::new("shell".to_string())),
    );

    assert_eq!(error.get_error_name(), "TerminalMismatch");
    assert_eq!(error.get_tip().to_string(), "Expected `ID`, received `9lives`");
}

#[test]
fn test_unexpected_token_tip_names_cell() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "counter".to_string(),
            non_terminal: "Z".to_string(),
            lookahead: "ID".to_string(),
        },
        Position(0, Rc::new("shell".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.get_tip().to_string(),
        "Unexpected token: `counter`, no production of `Z` starts with `ID`"
    );
}

#[test]
fn test_missing_identifier_error() {
    let error = Error::new(
        ErrorImpl::MissingIdentifier {
            token: "#".to_string(),
        },
        Position(0, Rc::new("shell".to_string())),
    );

    assert_eq!(error.get_error_name(), "MissingIdentifier");
}

#[test]
fn test_overflow_errors() {
    let stack = Error::new(
        ErrorImpl::StackOverflow { capacity: 100 },
        Position::null(),
    );
    let tokens = Error::new(
        ErrorImpl::TokenOverflow { capacity: 1000 },
        Position::null(),
    );

    assert_eq!(stack.get_error_name(), "StackOverflow");
    assert_eq!(tokens.get_error_name(), "TokenOverflow");
    assert!(tokens.get_tip().to_string().contains("1000"));
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::InputExhausted, Position::null());

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display_includes_source() {
    let error = Error::new(
        ErrorImpl::InputExhausted,
        Position(7, Rc::new("shell".to_string())),
    );

    assert_eq!(
        error.to_string(),
        "input exhausted before the derivation completed (shell:7)"
    );
}

#[test]
fn test_value_error_messages() {
    let error = ValueError::TypeMismatch {
        expected: "int".to_string(),
        received: "string".to_string(),
    };
    assert_eq!(error.to_string(), "Type mismatch: Expected int, got string");

    let error = ValueError::AllocationFailed { requested: 20 };
    assert_eq!(error.to_string(), "failed to allocate storage for 20 elements");
}
