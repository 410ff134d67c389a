use std::rc::Rc;

use crate::{
    errors::errors::{Error, LexError},
    Position, Span,
};

use super::tokens::{Literal, Token, TokenKind, RESERVED_LOOKUP};

/// Pull-based lexer over an in-memory source buffer.
///
/// Each call to [`next_token`](Lexer::next_token) scans exactly one token,
/// advancing a private cursor. `peek` holds the one character of lookahead;
/// `pos` is one past it. A single Lexer instance is consumed by exactly one
/// parser, sequentially.
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    peek: Option<char>,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut lexer = Lexer {
            chars: source.chars().collect(),
            pos: 0,
            peek: None,
            file: file_name,
        };
        lexer.consume();
        lexer
    }

    /// Scans and returns the next token.
    ///
    /// At end of input this returns an EOF token, and keeps returning EOF
    /// tokens on every further call.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        while let Some(c) = self.peek {
            match c {
                ' ' | '\t' | '\r' | '\n' => self.whitespace(),

                '(' => return Ok(self.single(TokenKind::LeftParen, "(")),
                ')' => return Ok(self.single(TokenKind::RightParen, ")")),
                '+' => return Ok(self.single(TokenKind::Plus, "+")),
                '*' => return Ok(self.single(TokenKind::Mul, "*")),
                '/' => return Ok(self.single(TokenKind::Div, "/")),
                '=' => return Ok(self.single(TokenKind::Equal, "=")),
                '<' => return Ok(self.single(TokenKind::Less, "<")),
                '>' => return Ok(self.single(TokenKind::Greater, ">")),

                // Either a negative integer literal or the minus operator
                '-' => return self.minus(),

                '"' => return self.string(),

                // `;;` opens a line comment, a lone `;` is an error
                ';' => {
                    let start = self.offset();
                    self.consume();
                    if self.matches(';') {
                        self.comment();
                    } else {
                        return Err(Error::new(
                            LexError::MissingSecondSemicolon.into(),
                            Position(start, Rc::clone(&self.file)),
                        ));
                    }
                }

                _ if c.is_ascii_digit() => return self.number(),
                _ if is_letter(c) => return Ok(self.name()),

                _ => {
                    return Err(Error::new(
                        LexError::UnrecognisedCharacter { character: c }.into(),
                        self.position(),
                    ))
                }
            }
        }

        let at = self.offset();
        Ok(Token {
            kind: TokenKind::EOF,
            lexeme: String::from("<EOF>"),
            literal: None,
            span: self.span(at),
        })
    }

    fn whitespace(&mut self) {
        while matches!(self.peek, Some(' ' | '\t' | '\n' | '\r')) {
            self.consume();
        }
    }

    fn comment(&mut self) {
        while !matches!(self.peek, Some('\n') | None) {
            self.consume();
        }
    }

    fn single(&mut self, kind: TokenKind, lexeme: &str) -> Token {
        let start = self.offset();
        self.consume();
        Token {
            kind,
            lexeme: String::from(lexeme),
            literal: None,
            span: self.span(start),
        }
    }

    fn name(&mut self) -> Token {
        let start = self.offset();
        let mut buff = String::new();

        while let Some(c) = self.peek {
            if is_letter(c) || c.is_ascii_digit() || c == '-' {
                buff.push(c);
                self.consume();
            } else {
                break;
            }
        }

        let span = self.span(start);
        let (kind, literal) = if let Some(kind) = RESERVED_LOOKUP.get(buff.as_str()) {
            (*kind, None)
        } else {
            match buff.as_str() {
                "true" => (TokenKind::Boolean, Some(Literal::Bool(true))),
                "false" => (TokenKind::Boolean, Some(Literal::Bool(false))),
                _ => (TokenKind::Identifier, None),
            }
        };

        Token {
            kind,
            lexeme: buff,
            literal,
            span,
        }
    }

    fn number(&mut self) -> Result<Token, Error> {
        let start = self.offset();
        let digits = self.digits();
        let span = self.span(start);

        match digits.parse::<i64>() {
            Ok(value) => Ok(Token {
                kind: TokenKind::Integer,
                lexeme: digits,
                literal: Some(Literal::Int(value)),
                span,
            }),
            Err(_) => Err(Error::new(
                LexError::NumberParseError { token: digits }.into(),
                Position(start, Rc::clone(&self.file)),
            )),
        }
    }

    fn minus(&mut self) -> Result<Token, Error> {
        let start = self.offset();
        self.consume();

        // One character of lookahead decides: `-5` is a literal, `-` alone
        // is the operator
        if matches!(self.peek, Some(c) if c.is_ascii_digit()) {
            let digits = self.digits();
            let lexeme = format!("-{}", digits);
            let span = self.span(start);

            return match lexeme.parse::<i64>() {
                Ok(value) => Ok(Token {
                    kind: TokenKind::Integer,
                    lexeme,
                    literal: Some(Literal::Int(value)),
                    span,
                }),
                Err(_) => Err(Error::new(
                    LexError::NumberParseError { token: lexeme }.into(),
                    Position(start, Rc::clone(&self.file)),
                )),
            };
        }

        Ok(Token {
            kind: TokenKind::Minus,
            lexeme: String::from("-"),
            literal: None,
            span: self.span(start),
        })
    }

    fn string(&mut self) -> Result<Token, Error> {
        let start = self.offset();
        self.consume();

        // Captured verbatim, no escape sequence processing
        let mut buff = String::new();
        while let Some(c) = self.peek {
            if c == '"' {
                break;
            }
            buff.push(c);
            self.consume();
        }

        if self.peek == Some('"') {
            self.consume();
            Ok(Token {
                kind: TokenKind::String,
                lexeme: buff.clone(),
                literal: Some(Literal::Str(buff)),
                span: self.span(start),
            })
        } else {
            Err(Error::new(
                LexError::UnterminatedString.into(),
                Position(start, Rc::clone(&self.file)),
            ))
        }
    }

    fn digits(&mut self) -> String {
        let mut buff = String::new();
        while let Some(c) = self.peek {
            if c.is_ascii_digit() {
                buff.push(c);
                self.consume();
            } else {
                break;
            }
        }
        buff
    }

    fn consume(&mut self) {
        self.peek = self.chars.get(self.pos).copied();
        if self.peek.is_some() {
            self.pos += 1;
        }
    }

    fn matches(&mut self, c: char) -> bool {
        if self.peek == Some(c) {
            self.consume();
            true
        } else {
            false
        }
    }

    /// Character offset of the lookahead character.
    fn offset(&self) -> u32 {
        if self.peek.is_some() {
            (self.pos - 1) as u32
        } else {
            self.pos as u32
        }
    }

    fn position(&self) -> Position {
        Position(self.offset(), Rc::clone(&self.file))
    }

    fn span(&self, start: u32) -> Span {
        Span {
            start: Position(start, Rc::clone(&self.file)),
            end: Position(self.offset(), Rc::clone(&self.file)),
        }
    }
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}
