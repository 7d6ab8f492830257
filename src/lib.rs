#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Byte offset into the scanned source, tagged with the source label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub usize, pub Rc<String>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
    /// 1-based line the span starts on.
    pub line: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end.0 - self.start.0
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Finds the line containing the byte offset `position`.
///
/// Returns the 1-based line number, the full text of that line (including its
/// terminator) and the byte offset of `position` within the line.
pub fn get_line_at_position(content: &str, position: usize) -> Option<(usize, String, usize)> {
    if position >= content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            let line_pos = position - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}

/// Renders a diagnostic against the source it was produced from.
pub fn format_error(error: &Error, source: &str) -> String {
    /*
        Error: UnrecognisedCharacter (...)
        -> programa.txt
          |
        3 | num x = 5 # 2;
          | ----------^
    */

    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        out.push_str(&format!("{}\n", error));
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    // Positions inside a multi-byte character point at that character.
    let column = line_text
        .char_indices()
        .take_while(|(offset, character)| offset + character.len_utf8() <= line_pos)
        .count();
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

pub fn display_error(error: &Error, source: &str) {
    eprint!("{}", format_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
