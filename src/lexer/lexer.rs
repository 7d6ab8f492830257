use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_RULE, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_KEYWORDS};

pub type RegexHandler = fn(&mut Lexer, TokenKind, &str);

#[derive(Clone)]
pub struct RegexPattern {
    pub kind: TokenKind,
    pub pattern: String,
    pub handler: RegexHandler,
}

lazy_static! {
    /// Token rules in precedence order. The first rule that matches at the
    /// cursor wins, so multi-character operators sit above their prefixes and
    /// keywords sit above identifiers. The catch-all stays last.
    pub static ref TOKEN_SPECS: Vec<RegexPattern> = vec![
        MK_RULE!(TokenKind::Number, r"\b\d+(?:\.\d+)?\b"),
        MK_RULE!(TokenKind::Keyword, format!(r"\b(?:{})\b", RESERVED_KEYWORDS.join("|"))),
        MK_RULE!(TokenKind::Equals, "=="),
        MK_RULE!(TokenKind::NotEquals, "!="),
        MK_RULE!(TokenKind::GreaterEquals, ">="),
        MK_RULE!(TokenKind::LessEquals, "<="),
        MK_RULE!(TokenKind::Greater, ">"),
        MK_RULE!(TokenKind::Less, "<"),
        MK_RULE!(TokenKind::Assignment, "="),
        MK_RULE!(TokenKind::Star, r"\*"),
        MK_RULE!(TokenKind::Dash, "-"),
        MK_RULE!(TokenKind::OpenParen, r"\("),
        MK_RULE!(TokenKind::CloseParen, r"\)"),
        MK_RULE!(TokenKind::Colon, ":"),
        MK_RULE!(TokenKind::Semicolon, ";"),
        MK_RULE!(TokenKind::Newline, r"\n", newline_handler),
        MK_RULE!(TokenKind::Identifier, r"\b[a-zA-Z_]\w*\b"),
        MK_RULE!(TokenKind::Skip, r"[ \t]+", skip_handler),
        MK_RULE!(TokenKind::Unknown, r".", unknown_handler),
    ];

    /// All rules joined into one leftmost-first alternation of named groups.
    static ref MASTER_PATTERN: Regex = {
        let alternation = TOKEN_SPECS
            .iter()
            .map(|rule| format!("(?P<{}>{})", rule.kind.as_str(), rule.pattern))
            .collect::<Vec<String>>()
            .join("|");

        Regex::new(&alternation).expect("token rule table must compile")
    };
}

/// Output of a scan: the emitted tokens and every diagnostic recorded on the way.
#[derive(Debug, Clone, Default)]
pub struct Tokenized {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Error>,
}

impl Tokenized {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    diagnostics: Vec<Error>,
    source: &'a str,
    pos: usize,
    line: usize,
    file: Rc<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file: Option<String>) -> Lexer<'a> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            diagnostics: vec![],
            source,
            pos: 0,
            line: 1,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn report(&mut self, error: ErrorImpl) {
        let position = Position(self.pos, Rc::clone(&self.file));
        self.diagnostics.push(Error::new(error, position, self.line()));
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    fn span(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos, Rc::clone(&self.file)),
            end: Position(self.pos + len, Rc::clone(&self.file)),
            line: self.line(),
        }
    }

    /// Matches the rule table at the cursor.
    ///
    /// Word boundaries see the character before the cursor, as they would for
    /// an anchored match inside the whole buffer. Returns `None` only when the
    /// leftmost match does not begin at the cursor or is empty.
    fn match_at(&self) -> Option<(&'static RegexPattern, &'a str)> {
        let captures = MASTER_PATTERN.captures_at(self.source, self.pos)?;
        let whole = captures.get(0)?;

        if whole.start() != self.pos || whole.is_empty() {
            return None;
        }

        TOKEN_SPECS
            .iter()
            .find_map(|rule| captures.name(rule.kind.as_str()).map(|m| (rule, m.as_str())))
    }

    fn run<F>(&mut self, mut on_match: F)
    where
        F: FnMut(&mut Lexer<'a>, &'static RegexPattern, &'a str),
    {
        while !self.at_eof() {
            match self.match_at() {
                Some((rule, value)) => {
                    on_match(self, rule, value);
                    self.advance_n(value.len());
                }
                None => {
                    self.report(ErrorImpl::NoRuleMatched);
                    let width = self.at().map_or(1, char::len_utf8);
                    self.advance_n(width);
                }
            }
        }
    }
}

pub fn default_handler(lexer: &mut Lexer, kind: TokenKind, value: &str) {
    let token = MK_TOKEN!(kind, String::from(value), lexer.span(value.len()));
    lexer.push(token);
}

fn newline_handler(lexer: &mut Lexer, _kind: TokenKind, _value: &str) {
    lexer.line += 1;
}

fn skip_handler(_lexer: &mut Lexer, _kind: TokenKind, _value: &str) {}

fn unknown_handler(lexer: &mut Lexer, _kind: TokenKind, value: &str) {
    match value.chars().next() {
        Some(character) => lexer.report(ErrorImpl::UnrecognisedCharacter { character }),
        None => lexer.report(ErrorImpl::NoRuleMatched),
    }
}

/// Scans `source` into tokens.
///
/// Whitespace and newlines are consumed without producing tokens; characters
/// no rule accepts are recorded in `diagnostics` and skipped one at a time.
/// `file` labels positions and defaults to `"shell"`.
pub fn tokenize(source: &str, file: Option<String>) -> Tokenized {
    let mut lex = Lexer::new(source, file);

    lex.run(|lexer, rule, value| (rule.handler)(lexer, rule.kind, value));

    Tokenized {
        tokens: lex.tokens,
        diagnostics: lex.diagnostics,
    }
}

/// Scans `source` keeping every matched span, including newlines, whitespace
/// runs and unknown characters. The values concatenate back to `source`.
pub fn lexemes(source: &str, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);

    lex.run(|lexer, rule, value| {
        default_handler(lexer, rule.kind, value);
        if rule.kind == TokenKind::Newline {
            lexer.line += 1;
        }
    });

    lex.tokens
}
