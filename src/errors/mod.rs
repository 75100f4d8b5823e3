//! Error types and error handling for the MFL front-end.
//!
//! This module defines the error types used by the lexer and parser.
//! It includes:
//!
//! - An error structure carrying the source line of the failure
//! - Specific error variants for lexical and grammatical failures
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
