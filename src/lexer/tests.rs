//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and reals)
//! - Operators and punctuation
//! - Line tracking and comments
//! - Error cases

use super::{lexer::tokenize, tokens::TokenKind};

#[test]
fn test_tokenize_keywords() {
    let source = "val not and or true false".to_string();
    let tokens = tokenize(source, Some("test.mfl".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Val);
    assert_eq!(tokens[1].kind, TokenKind::Not);
    assert_eq!(tokens[2].kind, TokenKind::And);
    assert_eq!(tokens[3].kind, TokenKind::Or);
    assert_eq!(tokens[4].kind, TokenKind::True);
    assert_eq!(tokens[5].kind, TokenKind::False);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore valve".to_string();
    let tokens = tokenize(source, Some("test.mfl".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "_underscore");
    // A keyword prefix does not make an identifier a keyword.
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "valve");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 100.5".to_string();
    let tokens = tokenize(source, Some("test.mfl".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Real);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Int);
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].kind, TokenKind::Real);
    assert_eq!(tokens[3].value, "100.5");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let source = ":= + - * / < <= > >= = != ; ( )".to_string();
    let tokens = tokenize(source, Some("test.mfl".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Assign);
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[2].kind, TokenKind::Dash);
    assert_eq!(tokens[3].kind, TokenKind::Star);
    assert_eq!(tokens[4].kind, TokenKind::Slash);
    assert_eq!(tokens[5].kind, TokenKind::Less);
    assert_eq!(tokens[6].kind, TokenKind::LessEquals);
    assert_eq!(tokens[7].kind, TokenKind::Greater);
    assert_eq!(tokens[8].kind, TokenKind::GreaterEquals);
    assert_eq!(tokens[9].kind, TokenKind::Equals);
    assert_eq!(tokens[10].kind, TokenKind::NotEquals);
    assert_eq!(tokens[11].kind, TokenKind::Semicolon);
    assert_eq!(tokens[12].kind, TokenKind::OpenParen);
    assert_eq!(tokens[13].kind, TokenKind::CloseParen);
    assert_eq!(tokens[14].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_statement() {
    let source = "val x := 1 + 2;".to_string();
    let tokens = tokenize(source, Some("test.mfl".to_string())).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Val,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Int,
            TokenKind::Plus,
            TokenKind::Int,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_line_tracking() {
    let source = "val x := 1;\nval y := 2;\n\nx < y;".to_string();
    let tokens = tokenize(source, Some("test.mfl".to_string())).unwrap();

    assert_eq!(tokens[0].line, 1); // val
    assert_eq!(tokens[5].line, 2); // second val
    assert_eq!(tokens[10].line, 4); // x
    assert_eq!(tokens.last().unwrap().kind, TokenKind::EOF);
    assert_eq!(tokens.last().unwrap().line, 4);
}

#[test]
fn test_tokenize_comments() {
    let source = "// leading comment\nval x := 1; // trailing comment".to_string();
    let tokens = tokenize(source, Some("test.mfl".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Val);
    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_empty_source() {
    let source = "".to_string();
    let tokens = tokenize(source, Some("test.mfl".to_string())).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unrecognised_token() {
    let source = "val x := @;".to_string();
    let result = tokenize(source, Some("test.mfl".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_tokenize_lone_bang_is_an_error() {
    // `!` only exists as part of `!=`.
    let source = "a ! b".to_string();
    let result = tokenize(source, Some("test.mfl".to_string()));

    assert!(result.is_err());
}

#[test]
fn test_tokenize_no_whitespace() {
    let source = "(1+2)*3<=x".to_string();
    let tokens = tokenize(source, Some("test.mfl".to_string())).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::OpenParen,
            TokenKind::Int,
            TokenKind::Plus,
            TokenKind::Int,
            TokenKind::CloseParen,
            TokenKind::Star,
            TokenKind::Int,
            TokenKind::LessEquals,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}
