use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ParseError},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::expr::parse_expr;

/// The main parser structure.
///
/// Owns the lexer it pulls tokens from and holds exactly one token of
/// lookahead. Every grammar rule either consumes `current` against an
/// expected kind or fails immediately.
pub struct Parser {
    lexer: Lexer,
    current: Token,
}

impl Parser {
    /// Creates a parser and pulls the first token from the lexer.
    pub fn new(mut lexer: Lexer) -> Result<Parser, Error> {
        let current = lexer.next_token()?;
        Ok(Parser { lexer, current })
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Advances to the next token and returns the previous one.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Expects a token of the specified kind, consuming it.
    ///
    /// Returns the consumed token, or an error naming the expected and the
    /// actual kind.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current.kind == expected_kind {
            self.advance()
        } else {
            Err(Error::new(
                ParseError::UnexpectedToken {
                    expected: expected_kind,
                    found: self.current.kind,
                }
                .into(),
                self.current.span.start.clone(),
            ))
        }
    }
}

/// Parses the entire token stream into a `Program` node.
///
/// This is the main entry point for parsing. Top-level expressions are
/// collected in source order until EOF; the first violation aborts the
/// whole parse.
pub fn parse(lexer: Lexer) -> Result<Expr, Error> {
    let mut parser = Parser::new(lexer)?;

    let mut expressions = vec![];
    while parser.current_token_kind() != TokenKind::EOF {
        expressions.push(parse_expr(&mut parser)?);
    }

    Ok(Expr::Program(expressions))
}
