//! Error types and error handling for the parsing pipeline.
//!
//! This module defines the two terminal error kinds of the pipeline:
//!
//! - `LexError` for malformed input at the character level
//! - `ParseError` for grammar violations at the token level
//!
//! Both are wrapped in an `Error` carrying the source position at which
//! they were raised. There is no recovery; the first error aborts the
//! whole lex/parse attempt.

pub mod errors;
