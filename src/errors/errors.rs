use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::DuplicateTableEntry { .. } => "DuplicateTableEntry",
            ErrorImpl::TerminalMismatch { .. } => "TerminalMismatch",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::MissingIdentifier { .. } => "MissingIdentifier",
            ErrorImpl::InputExhausted => "InputExhausted",
            ErrorImpl::StackOverflow { .. } => "StackOverflow",
            ErrorImpl::TokenOverflow { .. } => "TokenOverflow",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::DuplicateTableEntry {
                non_terminal,
                terminal,
            } => ErrorTip::Suggestion(format!(
                "Cell ({}, {}) is claimed by two productions, the grammar is not LL(1)",
                non_terminal, terminal
            )),
            ErrorImpl::TerminalMismatch { expected, received } => ErrorTip::Suggestion(format!(
                "Expected `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::UnexpectedToken {
                token,
                non_terminal,
                lookahead,
            } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, no production of `{}` starts with `{}`",
                token, non_terminal, lookahead
            )),
            ErrorImpl::MissingIdentifier { token } => ErrorTip::Suggestion(format!(
                "Expected an identifier after `ID`, received `{}`",
                token
            )),
            ErrorImpl::InputExhausted => ErrorTip::None,
            ErrorImpl::StackOverflow { capacity } => ErrorTip::Suggestion(format!(
                "The parser stack is limited to {} symbols",
                capacity
            )),
            ErrorImpl::TokenOverflow { capacity } => ErrorTip::Suggestion(format!(
                "A declaration may not produce more than {} tokens",
                capacity
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}:{})",
            self.internal_error, self.position.1, self.position.0
        )
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("duplicate parse table entry for ({non_terminal}, {terminal})")]
    DuplicateTableEntry {
        non_terminal: String,
        terminal: String,
    },
    #[error("terminal mismatch: expected {expected:?}, received {received:?}")]
    TerminalMismatch { expected: String, received: String },
    #[error("unexpected token {token:?}: no entry for ({non_terminal}, {lookahead})")]
    UnexpectedToken {
        token: String,
        non_terminal: String,
        lookahead: String,
    },
    #[error("expected an identifier after ID, received {token:?}")]
    MissingIdentifier { token: String },
    #[error("input exhausted before the derivation completed")]
    InputExhausted,
    #[error("parser stack exceeded its capacity of {capacity}")]
    StackOverflow { capacity: usize },
    #[error("input exceeded the token limit of {capacity}")]
    TokenOverflow { capacity: usize },
}

/// Failures of the container operations. These never abort the caller: the
/// container is left exactly as it was before the failed call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("failed to allocate storage for {requested} elements")]
    AllocationFailed { requested: usize },
    #[error("element type mismatch: expected {expected}, received {received}")]
    ElementTypeMismatch { expected: String, received: String },
    #[error("Type mismatch: Expected {expected}, got {received}")]
    TypeMismatch { expected: String, received: String },
    #[error("unsupported key type {type_}")]
    UnsupportedKeyType { type_: String },
}
