//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords, identifiers and boolean literals
//! - Integer literals and the negative number special case
//! - String literals (verbatim, no escapes)
//! - Operators and parentheses
//! - `;;` comments
//! - Error cases and EOF idempotence

use super::{
    lexer::Lexer,
    tokens::{Literal, Token, TokenKind},
};

fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source.to_string(), Some("test.lisp".to_string()));
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token().unwrap();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

fn lex_error(source: &str) -> crate::errors::errors::Error {
    let mut lexer = Lexer::new(source.to_string(), Some("test.lisp".to_string()));
    loop {
        match lexer.next_token() {
            Ok(token) => assert_ne!(token.kind, TokenKind::EOF, "expected a lex error"),
            Err(error) => return error,
        }
    }
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("def defn let if do");

    assert_eq!(tokens[0].kind, TokenKind::Def);
    assert_eq!(tokens[1].kind, TokenKind::Defn);
    assert_eq!(tokens[2].kind, TokenKind::Let);
    assert_eq!(tokens[3].kind, TokenKind::If);
    assert_eq!(tokens[4].kind, TokenKind::Do);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_booleans() {
    let tokens = tokenize("true false");

    assert_eq!(tokens[0].kind, TokenKind::Boolean);
    assert_eq!(tokens[0].literal, Some(Literal::Bool(true)));
    assert_eq!(tokens[1].kind, TokenKind::Boolean);
    assert_eq!(tokens[1].literal, Some(Literal::Bool(false)));
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo list-len _tmp x2 truethy");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].lexeme, "list-len");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].lexeme, "_tmp");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].lexeme, "x2");
    // Keyword classification is by exact text match only
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].lexeme, "truethy");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 100");

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].lexeme, "42");
    assert_eq!(tokens[0].literal, Some(Literal::Int(42)));
    assert_eq!(tokens[1].literal, Some(Literal::Int(0)));
    assert_eq!(tokens[2].literal, Some(Literal::Int(100)));
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_negative_number() {
    let tokens = tokenize("-5");

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].lexeme, "-5");
    assert_eq!(tokens[0].literal, Some(Literal::Int(-5)));
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_minus_operator() {
    let tokens = tokenize("(- 5 3)");

    assert_eq!(tokens[0].kind, TokenKind::LeftParen);
    assert_eq!(tokens[1].kind, TokenKind::Minus);
    assert_eq!(tokens[1].literal, None);
    assert_eq!(tokens[2].kind, TokenKind::Integer);
    assert_eq!(tokens[2].literal, Some(Literal::Int(5)));
    assert_eq!(tokens[3].kind, TokenKind::Integer);
    assert_eq!(tokens[3].literal, Some(Literal::Int(3)));
    assert_eq!(tokens[4].kind, TokenKind::RightParen);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("+ - * / = < >");

    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[1].kind, TokenKind::Minus);
    assert_eq!(tokens[2].kind, TokenKind::Mul);
    assert_eq!(tokens[3].kind, TokenKind::Div);
    assert_eq!(tokens[4].kind, TokenKind::Equal);
    assert_eq!(tokens[5].kind, TokenKind::Less);
    assert_eq!(tokens[6].kind, TokenKind::Greater);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" "multiple words""#);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].literal, Some(Literal::Str("hello".to_string())));
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(
        tokens[1].literal,
        Some(Literal::Str("multiple words".to_string()))
    );
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_empty_string() {
    let tokens = tokenize(r#""""#);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].literal, Some(Literal::Str(String::new())));
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_no_escape_processing() {
    // Backslash sequences are captured verbatim
    let tokens = tokenize(r#""a\nb""#);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].literal, Some(Literal::Str(r"a\nb".to_string())));
}

#[test]
fn test_tokenize_unterminated_string() {
    let error = lex_error(r#""not closed"#);

    assert_eq!(error.get_error_name(), "LexError");
    assert!(error.get_message().contains("unterminated"));
}

#[test]
fn test_tokenize_lone_semicolon() {
    let error = lex_error("; comment");

    assert_eq!(error.get_error_name(), "LexError");
    assert!(error.get_message().contains("';'"));
}

#[test]
fn test_tokenize_comment() {
    let tokens = tokenize(";; a comment\n(def x 1)");

    assert_eq!(tokens[0].kind, TokenKind::LeftParen);
    assert_eq!(tokens[1].kind, TokenKind::Def);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].lexeme, "x");
    assert_eq!(tokens[3].kind, TokenKind::Integer);
    assert_eq!(tokens[4].kind, TokenKind::RightParen);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_comment_at_end_of_input() {
    let tokens = tokenize(";; runs to the end");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unrecognised_character() {
    let error = lex_error("(def x @)");

    assert_eq!(error.get_error_name(), "LexError");
    assert!(error.get_message().contains('@'));
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("x".to_string(), Some("test.lisp".to_string()));

    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize("");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = tokenize("  \t(\r\n )  ");

    assert_eq!(tokens[0].kind, TokenKind::LeftParen);
    assert_eq!(tokens[1].kind, TokenKind::RightParen);
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_number_overflow() {
    let error = lex_error("99999999999999999999999");

    assert_eq!(error.get_error_name(), "LexError");
    assert!(error.get_message().contains("number"));
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("(def x");

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 1);
    assert_eq!(tokens[1].span.start.0, 1);
    assert_eq!(tokens[1].span.end.0, 4);
    assert_eq!(tokens[2].span.start.0, 5);
    assert_eq!(tokens[2].span.end.0, 6);
}

#[test]
fn test_token_display() {
    let tokens = tokenize(r#"42 - "hi" foo"#);

    assert_eq!(tokens[0].to_string(), "<Integer, '42', 42>");
    assert_eq!(tokens[1].to_string(), "<Minus, '-'>");
    assert_eq!(tokens[2].to_string(), "<String, 'hi', hi>");
    assert_eq!(tokens[3].to_string(), "<Identifier, 'foo'>");
    assert_eq!(tokens[4].to_string(), "<EOF, '<EOF>'>");
}
