use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Values carried by records and by equality comparisons.
///
/// Comparison semantics between variants are loose: see [`Value::loose_eq`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Value {
    /// An explicit null. Absent properties behave the same way.
    Null,
    /// A boolean value.
    Bool(bool),
    /// A 64-bit floating-point number.
    Number(f64),
    /// A UTF-8 string.
    String(String),
}

impl Value {
    /// Coerce this value to a finite number.
    ///
    /// Numbers pass through; strings are trimmed and parsed. Empty strings,
    /// booleans, null and non-finite results are not coercible.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) if n.is_finite() => Some(*n),
            Value::String(s) => coerce_str(s),
            _ => None,
        }
    }

    /// Loose equality used by `EQ`/`NE`.
    ///
    /// Both sides are first read the way the notation would read them back:
    /// the strings `null`, `true` and `false` stand for null and the two
    /// bools, and strings that parse as numbers stand for those numbers.
    /// Then:
    ///
    /// - null only equals null
    /// - numbers compare numerically (`NaN` equals `NaN`)
    /// - bool vs number treats the bool as `1`/`0`
    /// - remaining strings compare exactly
    ///
    /// So a comparand and its notation text always compare the same way.
    #[must_use]
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self.loose(), other.loose()) {
            (Loose::Null, Loose::Null) => true,
            (Loose::Bool(a), Loose::Bool(b)) => a == b,
            (Loose::Number(a), Loose::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Loose::Text(a), Loose::Text(b)) => a == b,
            (Loose::Bool(b), Loose::Number(n)) | (Loose::Number(n), Loose::Bool(b)) => {
                f64::from(u8::from(b)) == n
            }
            _ => false,
        }
    }

    fn loose(&self) -> Loose<'_> {
        match self {
            Value::Null => Loose::Null,
            Value::Bool(b) => Loose::Bool(*b),
            Value::Number(n) => Loose::Number(*n),
            Value::String(s) => match s.as_str() {
                "null" => Loose::Null,
                "true" => Loose::Bool(true),
                "false" => Loose::Bool(false),
                text => match text.trim() {
                    "" => Loose::Text(text),
                    trimmed => trimmed.parse::<f64>().map_or(Loose::Text(text), Loose::Number),
                },
            },
        }
    }

    /// Short name of the variant, used in type mismatch diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
        }
    }
}

/// A value as loose equality sees it.
enum Loose<'a> {
    Null,
    Bool(bool),
    Number(f64),
    Text(&'a str),
}

fn coerce_str(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Renders the bare text used in the notation: strings are not quoted and
/// integral numbers carry no fractional part.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Number(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v}"),
        }
    }
}
