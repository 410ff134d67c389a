use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("def", TokenKind::Def);
        map.insert("defn", TokenKind::Defn);
        map.insert("let", TokenKind::Let);
        map.insert("if", TokenKind::If);
        map.insert("do", TokenKind::Do);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,

    // Separators
    LeftParen,
    RightParen,

    // Arithmetic and comparison operators
    Plus,
    Minus,
    Mul,
    Div,
    Equal,
    Greater,
    Less,

    // Literals
    Integer,
    String,
    Boolean,
    Identifier,

    // Reserved
    Def,
    Defn,
    Let,
    If,
    Do,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Decoded literal payload. Only INTEGER, STRING and BOOLEAN tokens carry
/// one; punctuation and keywords have none.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Str(String),
    Bool(bool),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Int(value) => write!(f, "{}", value),
            Literal::Str(value) => write!(f, "{}", value),
            Literal::Bool(value) => write!(f, "{}", value),
        }
    }
}

/// Immutable lexical unit. `lexeme` is the exact source substring.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.literal {
            None => write!(f, "<{}, '{}'>", self.kind, self.lexeme),
            Some(literal) => write!(f, "<{}, '{}', {}>", self.kind, self.lexeme, literal),
        }
    }
}
