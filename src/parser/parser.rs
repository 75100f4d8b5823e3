//! The parser cursor and parse entry point.
//!
//! The [`Parser`] struct owns the token stream and the position of the
//! next unconsumed token. Grammar functions in [`super::stmt`] and
//! [`super::expr`] take the parser by mutable reference, so the cursor
//! discipline is explicit in every signature: a call consumes exactly the
//! tokens of the construct it recognized, nothing more.

use std::rc::Rc;

use crate::{
    ast::ast::{SyntaxNode, SyntaxTree},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::stmt::parse_prog;

/// A cursor over a finite token stream.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: i32,
    /// The name of the source file being parsed
    file: Rc<String>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos as usize]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens[self.pos as usize].kind
    }

    /// Returns the source line of the current token.
    pub fn current_line(&self) -> u32 {
        self.tokens[self.pos as usize].line
    }

    /// Advances to the next token and returns the consumed token.
    ///
    /// The cursor never advances past the terminal EOF token.
    pub fn advance(&mut self) -> &Token {
        if self.current_token_kind() != TokenKind::EOF {
            self.pos += 1;
            return &self.tokens[(self.pos - 1) as usize];
        }

        &self.tokens[self.pos as usize]
    }

    /// Non-consuming lookahead: does the current token have this kind?
    pub fn token_is(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == kind
    }

    /// If the current token has the given kind, consumes it and returns
    /// true; otherwise leaves the cursor alone and returns false.
    ///
    /// Used for optional and alternative productions.
    pub fn check_match(&mut self, kind: TokenKind) -> bool {
        if self.token_is(kind) {
            self.advance();
            return true;
        }

        false
    }

    /// Consumes the current token if it has the expected kind; otherwise
    /// logs the violated expectation and fails with the current line.
    pub fn match_token(&mut self, kind: TokenKind, expected: &str) -> Result<Token, Error> {
        if self.token_is(kind) {
            return Ok(self.advance().clone());
        }

        let found = self.current_token().value.clone();
        log::error!(
            "line {}: expected `{}`, found `{}`",
            self.current_line(),
            expected,
            found
        );

        Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: expected.to_string(),
                found,
            },
            self.get_position(),
        ))
    }

    /// Returns the position of the current token in the source file.
    pub fn get_position(&self) -> Position {
        Position(self.current_line(), Rc::clone(&self.file))
    }
}

/// Parses a stream of tokens into a complete syntax tree.
///
/// This is the main entry point for parsing. It parses the whole program,
/// then requires the terminal EOF token, so trailing input after the last
/// statement is an error.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<SyntaxTree, Error> {
    let mut parser = Parser::new(tokens, file);

    let root: SyntaxNode = parse_prog(&mut parser)?;
    parser.match_token(TokenKind::EOF, "EOF")?;

    Ok(SyntaxTree::new(root))
}
