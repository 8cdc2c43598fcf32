mod condition;
mod error;
mod record;
mod value;

pub use condition::{
    Condition, EqualityOp, LogicalOp, NonValueOp, NumericOp, Operator, PropertyExpr, StringOp,
    UnknownKeyword, property,
};
pub use error::{ConstructionError, EvaluateError};
pub use record::{Lookup, Record};
pub use value::Value;
