//! Canonical notation writer.
//!
//! ```text
//! (property^OP^value)          comparison, numeric, string match
//! (property^OP)                null / blank / empty
//! (AND[child,child,...])       logical
//! (NOT(child))                 negation
//! ```
//!
//! Values are written bare. Text that is not made of word characters
//! (`[A-Za-z0-9_]`), fractional or negative numbers, and operands that are
//! themselves keywords do not survive a trip through the tokenizer; build
//! such conditions directly instead of through notation.
//! [`Condition::exact_notation`] tells the two cases apart.

use std::fmt::{self, Write};

use crate::Condition;

/// Render `condition` in canonical notation.
#[must_use]
pub fn serialize(condition: &Condition) -> String {
    condition.to_string()
}

fn write_condition(f: &mut impl Write, condition: &Condition) -> fmt::Result {
    match condition {
        Condition::Comparison {
            property,
            op,
            value,
        } => write!(f, "({property}^{op}^{value})"),
        Condition::Numeric {
            property,
            op,
            value,
        } => write!(f, "({property}^{op}^{value})"),
        Condition::StringMatch {
            property,
            op,
            value,
        } => write!(f, "({property}^{op}^{value})"),
        Condition::NonValue { property, op } => write!(f, "({property}^{op})"),
        Condition::Logical { op, children } => {
            write!(f, "({op}[")?;
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    f.write_char(',')?;
                }
                write_condition(f, child)?;
            }
            f.write_str("])")
        }
        Condition::Negation { child } => {
            f.write_str("(NOT")?;
            write_condition(f, child)?;
            f.write_char(')')
        }
    }
}

impl Condition {
    /// Render in notation only if the text reads back as the same condition.
    ///
    /// Returns `None` when some part of the tree crosses one of the notation
    /// boundaries above, or nests deeper than the default parse depth.
    #[must_use]
    pub fn exact_notation(&self) -> Option<String> {
        let text = self.to_string();
        let back = Condition::from_notation(&text).ok()?;
        (back.to_string() == text).then_some(text)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_condition(f, self)
    }
}
