use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A lexical diagnostic. Diagnostics are advisory: the scanner records them and
/// keeps going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    line: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position, line: usize) -> Self {
        Error {
            internal_error: error_impl,
            position,
            line,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::NoRuleMatched => "NoRuleMatched",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { character } => ErrorTip::Suggestion(format!(
                "Remove or replace `{}`",
                character.escape_debug()
            )),
            ErrorImpl::NoRuleMatched => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.internal_error {
            ErrorImpl::NoRuleMatched => write!(
                f,
                "[Line {}] could not identify character at position {}",
                self.line, self.position.0
            ),
            other => write!(f, "[Line {}] {}", self.line, other),
        }
    }
}

impl std::error::Error for Error {}

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
    #[error("could not identify: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("could not identify character")]
    NoRuleMatched,
}
