use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A fatal lexical or syntax error, located at a byte offset.
///
/// Parsing stops at the first error; no partial tree is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at offset {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// The two failure families a parse can end with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Lex,
    Syntax,
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

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn class(&self) -> ErrorClass {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. }
            | ErrorImpl::UnterminatedString { .. }
            | ErrorImpl::UnterminatedBlockComment => ErrorClass::Lex,
            ErrorImpl::ExpectedToken { .. }
            | ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedKeyword { .. }
            | ErrorImpl::UnexpectedEndOfInput { .. } => ErrorClass::Syntax,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::UnterminatedBlockComment => "UnterminatedBlockComment",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedKeyword { .. } => "UnexpectedKeyword",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { character } => ErrorTip::Suggestion(format!(
                "`{}` is not part of the declaration grammar",
                character
            )),
            ErrorImpl::UnterminatedString { .. } => {
                ErrorTip::Suggestion(String::from("string literal is missing its closing `'`"))
            }
            ErrorImpl::UnterminatedBlockComment => ErrorTip::None,
            ErrorImpl::ExpectedToken {
                expected, token, ..
            } => ErrorTip::Suggestion(format!("expected `{}`, found `{}`", expected, token)),
            ErrorImpl::UnexpectedToken { kind, token } => {
                ErrorTip::Suggestion(format!("unexpected {} `{}`", kind, token))
            }
            ErrorImpl::UnexpectedKeyword { keyword } => {
                ErrorTip::Suggestion(format!("`{}` cannot start a declaration", keyword))
            }
            ErrorImpl::UnexpectedEndOfInput { expected } => {
                ErrorTip::Suggestion(format!("input ended while expecting {}", expected))
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

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    // Lexical
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: String },
    #[error("unterminated string literal: {literal:?}")]
    UnterminatedString { literal: String },
    #[error("unterminated block comment")]
    UnterminatedBlockComment,

    // Syntax
    #[error("expected kind {expected}, got {found} {token:?}")]
    ExpectedToken {
        expected: TokenKind,
        found: TokenKind,
        token: String,
    },
    #[error("unexpected token {kind} {token:?}")]
    UnexpectedToken { kind: TokenKind, token: String },
    #[error("unexpected keyword {keyword:?}")]
    UnexpectedKeyword { keyword: String },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: String },
}
