//! Pretty-printers for the AST.
//!
//! Two independent tree-traversal consumers of `Expr`:
//!
//! - `source`: reconstructs concrete, re-parseable source text
//! - `tree`: renders an indented tree view for structural inspection

pub mod source;
pub mod tree;
