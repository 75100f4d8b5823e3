use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A terminal lexer or parser failure.
///
/// Parsing is all-or-nothing: the first failure anywhere in the descent
/// aborts the whole parse and surfaces as one of these. Lexical failures
/// travel through the same channel.
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

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedIdentifier { .. } => "ExpectedIdentifier",
            ErrorImpl::ExpectedValue { .. } => "ExpectedValue",
            ErrorImpl::UnreadableSource { .. } => "UnreadableSource",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}` but found `{}`, did you miss a semicolon?",
                expected, found
            )),
            ErrorImpl::ExpectedIdentifier { found } => ErrorTip::Suggestion(format!(
                "Expected an identifier after `val`, found `{}`",
                found
            )),
            ErrorImpl::ExpectedValue { found } => ErrorTip::Suggestion(format!(
                "Expected a value or `(`, found `{}`",
                found
            )),
            ErrorImpl::UnreadableSource { path } => {
                ErrorTip::Suggestion(format!("Could not read source file `{}`", path))
            }
        }
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

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("expected {expected:?} but found {found:?}")]
    UnexpectedToken { expected: String, found: String },
    #[error("expected identifier after `val`, found {found:?}")]
    ExpectedIdentifier { found: String },
    #[error("expected a value or `(`, found {found:?}")]
    ExpectedValue { found: String },
    #[error("could not read source file {path:?}")]
    UnreadableSource { path: String },
}
