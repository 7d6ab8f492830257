//! Lexical analysis.
//!
//! This module contains the scanner that turns source text into a flat
//! stream of tokens. It handles:
//!
//! - The ordered rule table and the single alternation it compiles into
//! - Recognition of keywords, identifiers, numbers and operators
//! - Line tracking and token spans
//! - Skipping whitespace and reporting unrecognised characters

pub mod lexer;
pub mod tokens;
