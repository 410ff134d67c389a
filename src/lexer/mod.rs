//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into tokens on demand. It handles:
//!
//! - Character-by-character scanning with one character of lookahead
//! - Recognition of keywords, identifiers, literals and operators
//! - The `-5` vs `(- 5 3)` disambiguation for negative integers
//! - `;;` line comments and whitespace
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
