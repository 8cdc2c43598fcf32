//! A small boolean condition language.
//!
//! Conditions are trees of comparisons, presence tests, logical combinators
//! and negations, evaluated against a [`Record`]. Every tree has a canonical
//! caret notation such as `(AND[(age^GT^30),(NOT(status^EQ^unemployed))])`
//! that [`serialize`] writes and [`tokenize`] + [`parse`] read back.
//!
//! ```
//! use predicat::{property, Condition, Record};
//!
//! let adult = property("age").gte(18).unwrap();
//! let named = property("FirstName").starts_with("Jo");
//! let condition = adult.and(named);
//!
//! let record = Record::new().set("age", 42).set("FirstName", "John");
//! assert!(condition.matches(&record));
//!
//! let text = condition.to_string();
//! assert_eq!(text, "(AND[(age^GTE^18),(FirstName^SW^Jo)])");
//! assert_eq!(Condition::from_notation(&text).unwrap(), condition);
//! ```

mod error;
mod evaluate;
mod lex;
mod parse;
#[cfg(feature = "serde")]
mod serde_impls;
mod serialize;
mod types;

pub use error::Error;
pub use lex::{tokenize, Token, TokenKind};
pub use parse::{parse, parse_with, Expected, ParseError, ParseOptions};
pub use serialize::serialize;
pub use types::{
    Condition, ConstructionError, EqualityOp, EvaluateError, LogicalOp, Lookup, NonValueOp,
    NumericOp, Operator, PropertyExpr, Record, StringOp, UnknownKeyword, Value, property,
};
