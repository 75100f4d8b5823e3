//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into an Abstract Syntax Tree, one parsing function
//! per grammar non-terminal:
//!
//! - Statement parsing (programs, `val` bindings, bare expressions)
//! - Expression parsing (logical, relational, additive, multiplicative,
//!   unary, and parenthesized forms) with precedence encoded in the
//!   call structure
//!
//! Every parsing function maintains the cursor invariant: on entry and on
//! exit the current token is the next unconsumed token. A function either
//! returns a fully-formed subtree or fails with the first error; there is
//! no recovery and no partial tree ever escapes.

pub mod expr;
pub mod parser;
pub mod stmt;
