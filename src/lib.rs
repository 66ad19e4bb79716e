#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::CompilerError;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

/// A 1-based line/column pair, as reported by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {} pos {}", self.line, self.column)
    }
}

pub fn get_line(source: &str, line: u32) -> Option<&str> {
    source.lines().nth((line as usize).checked_sub(1)?)
}


pub fn display_error(error: &CompilerError, source: &str, file: &str) {
    /*
        Error: AlreadyDeclared (line 2 pos 5: "x" already in symbol table)
        -> demo.pixl
           |
         2 | int x;
           | ----^
    */

    let position = error.position();

    println!("Error: {} ({})", error.error_name(), error);
    println!("-> {}", file);

    let line_text = match get_line(source, position.line) {
        Some(text) => text,
        None => return,
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
