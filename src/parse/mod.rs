mod error;
mod grammar;
mod options;

use std::str::FromStr;

pub use error::{Expected, ParseError};
pub use options::ParseOptions;

use crate::lex::{tokenize, Token};
use crate::Condition;

/// Rebuild a condition from a token sequence using default [`ParseOptions`].
///
/// # Errors
///
/// Returns [`ParseError`] if the tokens do not form exactly one condition.
pub fn parse(tokens: &[Token]) -> Result<Condition, ParseError> {
    parse_with(tokens, &ParseOptions::default())
}

/// Rebuild a condition from a token sequence.
///
/// # Errors
///
/// Returns [`ParseError`] if the tokens do not form exactly one condition or
/// nest deeper than `options` allow.
pub fn parse_with(tokens: &[Token], options: &ParseOptions) -> Result<Condition, ParseError> {
    let result = grammar::parse_condition(tokens, options.max_depth());
    match &result {
        Ok(cond) => tracing::trace!(depth = cond.depth(), "parsed condition"),
        Err(err) => tracing::debug!(%err, "rejected notation"),
    }
    result
}

impl Condition {
    /// Tokenize and parse `text` with default [`ParseOptions`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if `text` is not valid notation.
    pub fn from_notation(text: &str) -> Result<Self, ParseError> {
        parse(&tokenize(text))
    }

    /// Tokenize and parse `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if `text` is not valid notation.
    pub fn from_notation_with(text: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        parse_with(&tokenize(text), options)
    }
}

impl FromStr for Condition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s)
    }
}
