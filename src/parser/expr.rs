//! Expression-level grammar functions.
//!
//! Precedence is encoded in the call structure, low to high:
//! `and`/`or`, relational comparison, additive, multiplicative, factor.
//! Repeated operators at one level are folded left-to-right, each
//! iteration wrapping the accumulated result as the left child of a new
//! binary node, which yields left-associativity without grammar
//! left-recursion.

use crate::{
    ast::ast::SyntaxNode,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Parses an `<expr>`:
///
/// `<expr> → <unary> { ( and | or ) <unary> }`
///
/// `and` and `or` share one precedence level.
pub fn parse_expr(parser: &mut Parser) -> Result<SyntaxNode, Error> {
    let mut left = parse_unary_op(parser)?;

    while parser.token_is(TokenKind::And) || parser.token_is(TokenKind::Or) {
        let line = parser.current_line();
        let op = parser.advance().kind;
        let right = parse_unary_op(parser)?;

        left = SyntaxNode::BinOp {
            line,
            left: Box::new(left),
            right: Box::new(right),
            op,
        };
    }

    Ok(left)
}

/// Parses a `<unary>`:
///
/// `<unary> → not <factor> [ <relop> <mexpr> ] | <rexpr>`
///
/// `not` binds to a single factor, tighter than comparison, so
/// `not a < b` parses as `(not a) < b`.
pub fn parse_unary_op(parser: &mut Parser) -> Result<SyntaxNode, Error> {
    if parser.token_is(TokenKind::Not) {
        let line = parser.current_line();
        parser.advance();
        let operand = parse_factor(parser)?;

        let node = SyntaxNode::UnaryOp {
            line,
            operand: Box::new(operand),
            op: TokenKind::Not,
        };

        return parse_rel_op(parser, node);
    }

    let left = parse_mexpr(parser)?;
    parse_rel_op(parser, left)
}

/// Parses the optional relational tail of an `<rexpr>`:
///
/// `<rexpr> → <mexpr> [ ( < | > | <= | >= | = | != ) <mexpr> ]`
///
/// At most one relational operator is consumed per call, so relational
/// operators are non-associative: `a < b < c` is a syntax error at the
/// second operator.
pub fn parse_rel_op(parser: &mut Parser, left: SyntaxNode) -> Result<SyntaxNode, Error> {
    if parser.current_token_kind().is_rel_op() {
        let line = parser.current_line();
        let op = parser.advance().kind;
        let right = parse_mexpr(parser)?;

        return Ok(SyntaxNode::RelOp {
            line,
            left: Box::new(left),
            right: Box::new(right),
            op,
        });
    }

    Ok(left)
}

/// Parses an `<mexpr>`:
///
/// `<mexpr> → <term> { ( + | - ) <term> }`
pub fn parse_mexpr(parser: &mut Parser) -> Result<SyntaxNode, Error> {
    let mut left = parse_term(parser)?;

    while parser.token_is(TokenKind::Plus) || parser.token_is(TokenKind::Dash) {
        let line = parser.current_line();
        let op = parser.advance().kind;
        let right = parse_term(parser)?;

        left = SyntaxNode::BinOp {
            line,
            left: Box::new(left),
            right: Box::new(right),
            op,
        };
    }

    Ok(left)
}

/// Parses a `<term>`:
///
/// `<term> → <factor> { ( * | / ) <factor> }`
pub fn parse_term(parser: &mut Parser) -> Result<SyntaxNode, Error> {
    let mut left = parse_factor(parser)?;

    while parser.token_is(TokenKind::Star) || parser.token_is(TokenKind::Slash) {
        let line = parser.current_line();
        let op = parser.advance().kind;
        let right = parse_factor(parser)?;

        left = SyntaxNode::BinOp {
            line,
            left: Box::new(left),
            right: Box::new(right),
            op,
        };
    }

    Ok(left)
}

/// Parses a `<factor>`:
///
/// `<factor> → <int> | <real> | true | false | <id> | ( <expr> )`
///
/// Parentheses are transparent: the inner expression subtree is returned
/// directly, with no wrapper node. A missing `)` is a parse error.
pub fn parse_factor(parser: &mut Parser) -> Result<SyntaxNode, Error> {
    let line = parser.current_line();

    if parser.token_is(TokenKind::True)
        || parser.token_is(TokenKind::False)
        || parser.token_is(TokenKind::Int)
        || parser.token_is(TokenKind::Real)
        || parser.token_is(TokenKind::Identifier)
    {
        let token = parser.advance().clone();
        return Ok(SyntaxNode::Token { line, token });
    }

    if parser.check_match(TokenKind::OpenParen) {
        let expr = parse_expr(parser)?;
        parser.match_token(TokenKind::CloseParen, ")")?;
        return Ok(expr);
    }

    let found = parser.current_token().value.clone();
    log::error!(
        "line {}: expected a value or `(`, found `{}`",
        line,
        found
    );

    Err(Error::new(
        ErrorImpl::ExpectedValue { found },
        parser.get_position(),
    ))
}
