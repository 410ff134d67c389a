//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms the
//! lexer's token stream into an AST. It handles:
//!
//! - Form dispatch on the token following `(`
//! - Keyword forms (`def`, `defn`, `let`, `if`, `do`) and calls
//! - Atom parsing from pre-decoded token literals
//!
//! The parser keeps a single token of lookahead, never backtracks and
//! aborts on the first grammar violation.

pub mod expr;
pub mod parser;
