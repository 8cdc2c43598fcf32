use thiserror::Error;

use super::LogicalOp;

/// Errors raised while building a condition node.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstructionError {
    #[error("value must be a number or a numeric string, received '{value}'")]
    NotNumeric { value: String },

    #[error("{op} condition requires at least one child")]
    EmptyLogical { op: LogicalOp },
}

/// Errors raised while evaluating a condition against a record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluateError {
    #[error("property '{property}' holds a {found}, expected {expected}")]
    TypeMismatch {
        property: String,
        expected: &'static str,
        found: &'static str,
    },
}
