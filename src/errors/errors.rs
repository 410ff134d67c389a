use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

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
            ErrorImpl::Lex(_) => "LexError",
            ErrorImpl::Parse(_) => "ParseError",
        }
    }

    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::Lex(LexError::UnterminatedString) => ErrorTip::Suggestion(String::from(
                "string literal is never closed, did you forget a `\"`?",
            )),
            ErrorImpl::Lex(LexError::MissingSecondSemicolon) => ErrorTip::Suggestion(String::from(
                "comments start with `;;`, a lone `;` is not valid",
            )),
            ErrorImpl::Lex(LexError::UnrecognisedCharacter { character }) => {
                ErrorTip::Suggestion(format!("unrecognised character `{}`", character))
            }
            ErrorImpl::Lex(LexError::NumberParseError { token }) => ErrorTip::Suggestion(format!(
                "invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::Parse(ParseError::UnexpectedToken { expected, found }) => {
                ErrorTip::Suggestion(format!("expected {}, found {}", expected, found))
            }
            ErrorImpl::Parse(ParseError::InvalidFormHead { token }) => ErrorTip::Suggestion(
                format!("`{}` cannot start a form after `(`", token),
            ),
            ErrorImpl::Parse(ParseError::ExpectedExpression { token }) => {
                ErrorTip::Suggestion(format!("expected an atom or a list, found `{}`", token))
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
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Malformed input at the character level. Terminal: aborts the whole scan.
#[derive(Error, Debug, Clone)]
pub enum LexError {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("expected ';' after ';'")]
    MissingSecondSemicolon,
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
}

/// A token that does not fit the active grammar rule. Terminal: aborts the
/// whole parse, no resynchronisation.
#[derive(Error, Debug, Clone)]
pub enum ParseError {
    #[error("expected token: {expected}, found: {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("expected function name, operator or keyword after '(', found: {token}")]
    InvalidFormHead { token: String },
    #[error("expected expression (atom or list), found: {token}")]
    ExpectedExpression { token: String },
}
