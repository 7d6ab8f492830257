//! Diagnostics produced while scanning.
//!
//! Scanning never fails outright. Characters that no token rule accepts are
//! recorded as diagnostics carrying the line and byte position, and the
//! scanner moves on to the next character.

pub mod errors;

#[cfg(test)]
mod tests;
