use std::borrow::Cow;

use crate::{
    Condition, EqualityOp, EvaluateError, LogicalOp, Lookup, NonValueOp, NumericOp, StringOp,
    Value,
};

impl Condition {
    /// Test this condition against `record`.
    ///
    /// Children of logical nodes are evaluated left to right and evaluation
    /// stops at the first child that decides the result.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluateError::TypeMismatch`] when a numeric or string test
    /// meets a record value it cannot compare against.
    pub fn evaluate<L: Lookup + ?Sized>(&self, record: &L) -> Result<bool, EvaluateError> {
        eval_condition(self, record)
    }

    /// Like [`Condition::evaluate`], but a type mismatch counts as `false`.
    #[must_use]
    pub fn matches<L: Lookup + ?Sized>(&self, record: &L) -> bool {
        self.evaluate(record).unwrap_or_else(|err| {
            tracing::debug!(%err, "condition did not match");
            false
        })
    }
}

fn eval_condition<L: Lookup + ?Sized>(cond: &Condition, record: &L) -> Result<bool, EvaluateError> {
    match cond {
        Condition::Comparison {
            property,
            op,
            value,
        } => {
            let actual = record.lookup(property).unwrap_or(&Value::Null);
            let equal = actual.loose_eq(value);
            Ok(match op {
                EqualityOp::Eq => equal,
                EqualityOp::Ne => !equal,
            })
        }
        Condition::Numeric {
            property,
            op,
            value,
        } => eval_numeric(property, *op, *value, record.lookup(property)),
        Condition::StringMatch {
            property,
            op,
            value,
        } => eval_string(property, *op, value, record.lookup(property)),
        Condition::NonValue { property, op } => {
            let actual = record.lookup(property);
            let is_null = matches!(actual, None | Some(Value::Null));
            let is_blank = matches!(actual, Some(Value::String(s)) if s.is_empty());
            Ok(match op {
                NonValueOp::Null => is_null,
                NonValueOp::Blank => is_blank,
                NonValueOp::Empty => is_null || is_blank,
            })
        }
        Condition::Logical { op, children } => match op {
            LogicalOp::And => {
                for child in children {
                    if !eval_condition(child, record)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            LogicalOp::Or => {
                for child in children {
                    if eval_condition(child, record)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        },
        Condition::Negation { child } => Ok(!eval_condition(child, record)?),
    }
}

fn eval_numeric(
    property: &str,
    op: NumericOp,
    threshold: f64,
    actual: Option<&Value>,
) -> Result<bool, EvaluateError> {
    let actual = match actual {
        None | Some(Value::Null) => return Ok(false),
        Some(v) => v,
    };
    let Some(n) = actual.as_number() else {
        return Err(EvaluateError::TypeMismatch {
            property: property.to_owned(),
            expected: "a numeric value",
            found: actual.kind(),
        });
    };
    Ok(match op {
        NumericOp::Lt => n < threshold,
        NumericOp::Lte => n <= threshold,
        NumericOp::Gt => n > threshold,
        NumericOp::Gte => n >= threshold,
    })
}

fn eval_string(
    property: &str,
    op: StringOp,
    needle: &str,
    actual: Option<&Value>,
) -> Result<bool, EvaluateError> {
    let haystack = match actual {
        None | Some(Value::Null) => return Ok(false),
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(v @ Value::Number(_)) => Cow::Owned(v.to_string()),
        Some(v @ Value::Bool(_)) => {
            return Err(EvaluateError::TypeMismatch {
                property: property.to_owned(),
                expected: "a string or number",
                found: v.kind(),
            });
        }
    };
    Ok(match op {
        StringOp::StartsWith => haystack.starts_with(needle),
        StringOp::Contains => haystack.contains(needle),
        StringOp::EndsWith => haystack.ends_with(needle),
    })
}
