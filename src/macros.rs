//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Creates an entry of the token rule table

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a rule for the token table.
///
/// Without a handler the rule emits its match as a token of `$kind`.
///
/// ```ignore
/// MK_RULE!(TokenKind::Equals, "==")
/// MK_RULE!(TokenKind::Skip, "[ \t]+", skip_handler)
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($kind:expr, $pattern:expr) => {
        $crate::MK_RULE!($kind, $pattern, $crate::lexer::lexer::default_handler)
    };
    ($kind:expr, $pattern:expr, $handler:expr) => {
        $crate::lexer::lexer::RegexPattern {
            kind: $kind,
            pattern: String::from($pattern),
            handler: $handler,
        }
    };
}
