use crate::{
    ast::ast::{Binding, Expr},
    errors::errors::{Error, ParseError},
    lexer::tokens::{Literal, TokenKind},
};

use super::parser::Parser;

/// Expr ::= INTEGER | STRING | BOOLEAN | IDENTIFIER | '(' Form ')'
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Integer => parse_int(parser),
        TokenKind::String => parse_string(parser),
        TokenKind::Boolean => parse_bool(parser),
        TokenKind::Identifier => parse_variable(parser),
        TokenKind::LeftParen => parse_s_expr(parser),
        _ => Err(Error::new(
            ParseError::ExpectedExpression {
                token: parser.current_token().to_string(),
            }
            .into(),
            parser.current_token().span.start.clone(),
        )),
    }
}

/// SExpr ::= '(' Form ')'
///
/// The token after `(` alone decides which form this is: keywords route to
/// their dedicated rule, identifiers and operators to a call.
fn parse_s_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::LeftParen)?;

    let result = match parser.current_token_kind() {
        TokenKind::Def => parse_def(parser),
        TokenKind::Defn => parse_defn(parser),
        TokenKind::Let => parse_let(parser),
        TokenKind::If => parse_if(parser),
        TokenKind::Do => parse_do(parser),

        TokenKind::Identifier
        | TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Mul
        | TokenKind::Div
        | TokenKind::Equal
        | TokenKind::Less
        | TokenKind::Greater => parse_call(parser),

        _ => Err(Error::new(
            ParseError::InvalidFormHead {
                token: parser.current_token().to_string(),
            }
            .into(),
            parser.current_token().span.start.clone(),
        )),
    }?;

    parser.expect(TokenKind::RightParen)?;
    Ok(result)
}

// DefForm ::= 'def' IDENTIFIER Expr
fn parse_def(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::Def)?;
    let name = parser.expect(TokenKind::Identifier)?.lexeme;
    let value = parse_expr(parser)?;

    Ok(Expr::Def {
        name,
        value: Box::new(value),
    })
}

// DefnForm ::= 'defn' IDENTIFIER '(' IDENTIFIER* ')' Expr
fn parse_defn(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::Defn)?;
    let name = parser.expect(TokenKind::Identifier)?.lexeme;

    parser.expect(TokenKind::LeftParen)?;
    let mut params = vec![];
    while parser.current_token_kind() == TokenKind::Identifier {
        params.push(parser.expect(TokenKind::Identifier)?.lexeme);
    }
    parser.expect(TokenKind::RightParen)?;

    let body = parse_expr(parser)?;

    Ok(Expr::Defn {
        name,
        params,
        body: Box::new(body),
    })
}

// LetForm ::= 'let' '(' (IDENTIFIER Expr)* ')' Expr
fn parse_let(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::Let)?;
    parser.expect(TokenKind::LeftParen)?;

    // As long as identifiers follow, bindings keep coming in name/value pairs
    let mut bindings = vec![];
    while parser.current_token_kind() == TokenKind::Identifier {
        let name = parser.expect(TokenKind::Identifier)?.lexeme;
        let value = parse_expr(parser)?;
        bindings.push(Binding { name, value });
    }
    parser.expect(TokenKind::RightParen)?;

    let body = parse_expr(parser)?;

    Ok(Expr::Let {
        bindings,
        body: Box::new(body),
    })
}

// IfForm ::= 'if' Expr Expr [Expr]
fn parse_if(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::If)?;
    let condition = parse_expr(parser)?;
    let then_branch = parse_expr(parser)?;

    // The else branch is present iff the form is not closed yet
    let else_branch = if parser.current_token_kind() != TokenKind::RightParen {
        Some(Box::new(parse_expr(parser)?))
    } else {
        None
    };

    Ok(Expr::If {
        condition: Box::new(condition),
        then_branch: Box::new(then_branch),
        else_branch,
    })
}

// DoForm ::= 'do' Expr*
fn parse_do(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::Do)?;

    let mut expressions = vec![];
    while parser.current_token_kind() != TokenKind::RightParen
        && parser.current_token_kind() != TokenKind::EOF
    {
        expressions.push(parse_expr(parser)?);
    }

    Ok(Expr::Do(expressions))
}

// CallForm ::= (IDENTIFIER | OPERATOR) Expr*
fn parse_call(parser: &mut Parser) -> Result<Expr, Error> {
    // The callee is whatever headed the form, identifier or operator
    let function_name = parser.advance()?.lexeme;

    let mut arguments = vec![];
    while parser.current_token_kind() != TokenKind::RightParen
        && parser.current_token_kind() != TokenKind::EOF
    {
        arguments.push(parse_expr(parser)?);
    }

    Ok(Expr::Call {
        function_name,
        arguments,
    })
}

fn parse_int(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.expect(TokenKind::Integer)?;
    match token.literal {
        Some(Literal::Int(value)) => Ok(Expr::IntLiteral(value)),
        _ => unreachable!("integer token without decoded value"),
    }
}

fn parse_string(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.expect(TokenKind::String)?;
    match token.literal {
        Some(Literal::Str(value)) => Ok(Expr::StringLiteral(value)),
        _ => unreachable!("string token without decoded value"),
    }
}

fn parse_bool(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.expect(TokenKind::Boolean)?;
    match token.literal {
        Some(Literal::Bool(value)) => Ok(Expr::BoolLiteral(value)),
        _ => unreachable!("boolean token without decoded value"),
    }
}

fn parse_variable(parser: &mut Parser) -> Result<Expr, Error> {
    let name = parser.expect(TokenKind::Identifier)?.lexeme;
    Ok(Expr::Variable(name))
}
