#![allow(clippy::module_inception)]

use std::{fs, path::PathBuf, rc::Rc};

use crate::{
    ast::ast::SyntaxTree,
    errors::errors::{Error, ErrorImpl, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A source location: line number plus the name of the file it belongs to.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

/// Parses an in-memory source string into a syntax tree.
pub fn parse_source(source: String, file: Option<String>) -> Result<SyntaxTree, Error> {
    let name = file.unwrap_or_else(|| String::from("shell"));
    let tokens = tokenize(source, Some(name.clone()))?;
    parse(tokens, Rc::new(name))
}

/// Reads and parses a source file into a syntax tree.
pub fn parse_file(path: PathBuf) -> Result<SyntaxTree, Error> {
    let source = fs::read_to_string(&path).map_err(|_| {
        Error::new(
            ErrorImpl::UnreadableSource {
                path: path.to_string_lossy().to_string(),
            },
            Position::null(),
        )
    })?;

    parse_source(source, Some(path.to_string_lossy().to_string()))
}

pub fn get_source_line(file: PathBuf, line_number: u32) -> String {
    let content = fs::read_to_string(&file).unwrap();

    for (index, line) in content.lines().enumerate() {
        if index + 1 == line_number as usize {
            return line.to_string();
        }
    }

    panic!("Failed to find line {} in file", line_number);
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_source_line() {
        let line = super::get_source_line(std::path::PathBuf::from("tests/test_file.mfl"), 1);
        assert_eq!(line, "val x := 1 + 2;");

        let line = super::get_source_line(std::path::PathBuf::from("tests/test_file.mfl"), 3);
        assert_eq!(line, "val flag := not done and x < 10;");
    }
}

pub fn display_error(error: Error, file: PathBuf) {
    /*
        Error: message
        -> demo.mfl
          |
        3 | (1 + 2
          |
    */

    let position = error.get_position();
    let line_text = get_source_line(file.clone(), position.0);

    let line_string = position.0.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file.as_os_str().to_string_lossy());
    println!("{:>padding$}", "|");
    println!("{} | {}", line_string, line_text.trim());
    println!("{:>padding$}", "|");
}
