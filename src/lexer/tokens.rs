use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::Span;

/// Reserved words of the language, in the order they appear in the keyword rule.
pub const RESERVED_KEYWORDS: [&str; 6] = ["fun", "num", "input", "print", "for", "to"];

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = RESERVED_KEYWORDS.iter().copied().collect();
}

/// Returns true if `word` is one of the reserved keywords. Case-sensitive.
pub fn is_reserved(word: &str) -> bool {
    RESERVED_LOOKUP.contains(word)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    Keyword,

    Equals,        // ==
    NotEquals,     // !=
    GreaterEquals, // >=
    LessEquals,    // <=
    Greater,       // >
    Less,          // <
    Assignment,    // =

    Star,
    Dash,
    OpenParen,
    CloseParen,
    Colon,
    Semicolon,

    Newline,
    Identifier,

    // Never emitted by `tokenize`
    Skip,
    Unknown,
}

impl TokenKind {
    /// Tag name of the kind, also used as the capture group name in the master pattern.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Equals => "EQ",
            TokenKind::NotEquals => "NEQ",
            TokenKind::GreaterEquals => "GTE",
            TokenKind::LessEquals => "LTE",
            TokenKind::Greater => "GT",
            TokenKind::Less => "LT",
            TokenKind::Assignment => "ASSIGN",
            TokenKind::Star => "MULT",
            TokenKind::Dash => "MINUS",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Skip => "SKIP",
            TokenKind::Unknown => "UNKNOWN",
        }
    }

    /// Kinds that are consumed by the scanner but never appear in its output.
    pub fn is_discarded(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Skip | TokenKind::Unknown)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {:?})", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    pub fn debug(&self) {
        if self.is_one_of_many(&[
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Number,
        ]) {
            println!("{} ({})", self.kind, self.value);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
