//! Statement-level grammar functions.

use crate::{
    ast::ast::SyntaxNode,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// Parses a `<prog>`:
///
/// `<prog> → <val> ; { <val> ; }`
///
/// At least one statement is required, so empty input fails. Statements
/// are collected in source order.
pub fn parse_prog(parser: &mut Parser) -> Result<SyntaxNode, Error> {
    let line = parser.current_line();
    let mut statements = vec![parse_val(parser)?];
    parser.match_token(TokenKind::Semicolon, ";")?;

    while !parser.token_is(TokenKind::EOF) {
        statements.push(parse_val(parser)?);
        parser.match_token(TokenKind::Semicolon, ";")?;
    }

    Ok(SyntaxNode::Prog { line, statements })
}

/// Parses a `<val>`:
///
/// `<val> → val <id> := <expr> | <expr>`
///
/// A binding is represented as `BinOp` with an `Assign` operator whose
/// left operand is a synthetic `Token` node wrapping the identifier,
/// reusing the general binary node instead of a dedicated one.
pub fn parse_val(parser: &mut Parser) -> Result<SyntaxNode, Error> {
    let line = parser.current_line();

    if !parser.check_match(TokenKind::Val) {
        // Case 2: a bare expression statement.
        return parse_expr(parser);
    }

    if !parser.token_is(TokenKind::Identifier) {
        let found = parser.current_token().value.clone();
        log::error!(
            "line {}: expected identifier after `val`, found `{}`",
            parser.current_line(),
            found
        );

        return Err(Error::new(
            ErrorImpl::ExpectedIdentifier { found },
            parser.get_position(),
        ));
    }

    let name = parser.advance().clone();
    parser.match_token(TokenKind::Assign, ":=")?;
    let rhs = parse_expr(parser)?;

    Ok(SyntaxNode::BinOp {
        line,
        left: Box::new(SyntaxNode::Token { line, token: name }),
        right: Box::new(rhs),
        op: TokenKind::Assign,
    })
}
