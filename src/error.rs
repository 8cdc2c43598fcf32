use thiserror::Error;

use crate::parse::ParseError;
use crate::{ConstructionError, EvaluateError};

/// Unified error type covering construction, parsing and evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Evaluate(#[from] EvaluateError),
}
