use std::fmt;

use thiserror::Error;

use crate::lex::TokenKind;
use crate::{ConstructionError, LogicalOp};

/// What the parser was looking for when it gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Kind(TokenKind),
    /// A property name, or one of `AND`, `OR`, `NOT`.
    NodeStart,
    /// One of the comparison, numeric, string or non-value keywords.
    LeafOperator,
    /// `,` or `]`.
    DelimiterOrClose,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Kind(kind) => write!(f, "{kind}"),
            Expected::NodeStart => write!(f, "property or AND/OR/NOT"),
            Expected::LeafOperator => write!(f, "comparison operator"),
            Expected::DelimiterOrClose => write!(f, "',' or ']'"),
        }
    }
}

/// Errors produced when parsing notation tokens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("parse error at offset {offset}: expected {expected}, found {found}")]
    UnexpectedToken {
        expected: Expected,
        found: String,
        offset: usize,
    },

    #[error("parse error: expected {expected}, found end of input")]
    UnexpectedEnd { expected: Expected },

    #[error("parse error at offset {offset}: operator '{keyword}' is not valid here, expected {expected}")]
    UnknownOperator {
        keyword: String,
        expected: Expected,
        offset: usize,
    },

    #[error("parse error at offset {offset}: {op} requires at least one child condition, expected {expected}")]
    EmptyLogical {
        op: LogicalOp,
        expected: Expected,
        offset: usize,
    },

    #[error("parse error at offset {offset}: {source}")]
    InvalidOperand {
        offset: usize,
        #[source]
        source: ConstructionError,
    },

    #[error("parse error at offset {offset}: trailing {found} after a complete condition")]
    TrailingInput { found: String, offset: usize },

    #[error("parse error at offset {offset}: nesting deeper than {max_depth}")]
    TooDeep { max_depth: usize, offset: usize },
}

impl ParseError {
    /// Byte offset of the offending token, if there was one.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedEnd { .. } => None,
            ParseError::UnexpectedToken { offset, .. }
            | ParseError::UnknownOperator { offset, .. }
            | ParseError::EmptyLogical { offset, .. }
            | ParseError::InvalidOperand { offset, .. }
            | ParseError::TrailingInput { offset, .. }
            | ParseError::TooDeep { offset, .. } => Some(*offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_token_display() {
        let err = ParseError::UnexpectedToken {
            expected: Expected::Kind(TokenKind::Separator),
            found: "operand '30'".into(),
            offset: 7,
        };
        assert_eq!(
            err.to_string(),
            "parse error at offset 7: expected '^', found operand '30'"
        );
        assert_eq!(err.offset(), Some(7));
    }

    #[test]
    fn unexpected_end_display() {
        let err = ParseError::UnexpectedEnd {
            expected: Expected::Kind(TokenKind::OpenParen),
        };
        assert_eq!(
            err.to_string(),
            "parse error: expected '(', found end of input"
        );
        assert_eq!(err.offset(), None);
    }

    #[test]
    fn empty_logical_display() {
        let err = ParseError::EmptyLogical {
            op: LogicalOp::And,
            expected: Expected::Kind(TokenKind::OpenParen),
            offset: 5,
        };
        assert_eq!(
            err.to_string(),
            "parse error at offset 5: AND requires at least one child condition, expected '('"
        );
    }
}
