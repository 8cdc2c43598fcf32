use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use super::error::ConstructionError;
use super::Value;

macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $kw:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every operator of this class, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The keyword used for this operator in the notation.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $kw),+
                }
            }

            /// Look up an operator by its notation keyword. Case-sensitive.
            #[must_use]
            pub fn from_keyword(keyword: &str) -> Option<Self> {
                match keyword {
                    $($kw => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownKeyword;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_keyword(s).ok_or_else(|| UnknownKeyword(s.to_owned()))
            }
        }
    };
}

keyword_enum! {
    /// Generic equality operators.
    EqualityOp { Eq => "EQ", Ne => "NE" }
}

keyword_enum! {
    /// Ordering operators over numbers.
    NumericOp { Lt => "LT", Lte => "LTE", Gt => "GT", Gte => "GTE" }
}

keyword_enum! {
    /// Positional substring operators.
    StringOp { StartsWith => "SW", Contains => "CT", EndsWith => "EW" }
}

keyword_enum! {
    /// Presence tests that take no comparand.
    NonValueOp { Null => "NULL", Blank => "BLANK", Empty => "EMPTY" }
}

keyword_enum! {
    /// Combinators over an ordered list of children.
    LogicalOp { And => "AND", Or => "OR" }
}

/// Keyword that is not part of the operator set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator keyword '{0}'")]
pub struct UnknownKeyword(pub String);

/// Any keyword of the notation, classified by the node kind it builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equality(EqualityOp),
    Numeric(NumericOp),
    String(StringOp),
    NonValue(NonValueOp),
    Logical(LogicalOp),
    Not,
}

impl Operator {
    /// Classify a notation keyword, or `None` if it is not one.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        if keyword == "NOT" {
            return Some(Operator::Not);
        }
        EqualityOp::from_keyword(keyword)
            .map(Operator::Equality)
            .or_else(|| NumericOp::from_keyword(keyword).map(Operator::Numeric))
            .or_else(|| StringOp::from_keyword(keyword).map(Operator::String))
            .or_else(|| NonValueOp::from_keyword(keyword).map(Operator::NonValue))
            .or_else(|| LogicalOp::from_keyword(keyword).map(Operator::Logical))
    }

    /// The keyword as written in notation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Equality(op) => op.as_str(),
            Operator::Numeric(op) => op.as_str(),
            Operator::String(op) => op.as_str(),
            Operator::NonValue(op) => op.as_str(),
            Operator::Logical(op) => op.as_str(),
            Operator::Not => "NOT",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of the condition tree.
///
/// Variants can be matched from outside the crate but only built through the
/// constructors below, so a `Numeric` value is always a finite number and a
/// `Logical` node always has at least one child.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Loose equality test, see [`Value::loose_eq`].
    #[non_exhaustive]
    Comparison {
        property: String,
        op: EqualityOp,
        value: Value,
    },
    #[non_exhaustive]
    Numeric {
        property: String,
        op: NumericOp,
        value: f64,
    },
    #[non_exhaustive]
    StringMatch {
        property: String,
        op: StringOp,
        value: String,
    },
    #[non_exhaustive]
    NonValue { property: String, op: NonValueOp },
    /// Children are evaluated in insertion order.
    #[non_exhaustive]
    Logical {
        op: LogicalOp,
        children: Vec<Condition>,
    },
    #[non_exhaustive]
    Negation { child: Box<Condition> },
}

impl Condition {
    /// Build an `EQ`/`NE` test against `value`.
    #[must_use]
    pub fn comparison(property: &str, op: EqualityOp, value: impl Into<Value>) -> Self {
        Condition::Comparison {
            property: property.to_owned(),
            op,
            value: value.into(),
        }
    }

    /// Build a numeric comparison, coercing `value` to a number.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::NotNumeric`] if `value` is neither a finite
    /// number nor a string that parses as one.
    pub fn numeric(
        property: &str,
        op: NumericOp,
        value: impl Into<Value>,
    ) -> Result<Self, ConstructionError> {
        let value = value.into();
        let number = value
            .as_number()
            .ok_or_else(|| ConstructionError::NotNumeric {
                value: value.to_string(),
            })?;
        Ok(Condition::Numeric {
            property: property.to_owned(),
            op,
            value: number,
        })
    }

    /// Build a starts-with, contains or ends-with test.
    #[must_use]
    pub fn string_match(property: &str, op: StringOp, value: impl Into<String>) -> Self {
        Condition::StringMatch {
            property: property.to_owned(),
            op,
            value: value.into(),
        }
    }

    /// Build a null, blank or empty test. No comparand.
    #[must_use]
    pub fn non_value(property: &str, op: NonValueOp) -> Self {
        Condition::NonValue {
            property: property.to_owned(),
            op,
        }
    }

    /// Combine `children` under a logical operator.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::EmptyLogical`] if `children` is empty.
    pub fn logical(
        op: LogicalOp,
        children: impl IntoIterator<Item = Condition>,
    ) -> Result<Self, ConstructionError> {
        let children: Vec<Condition> = children.into_iter().collect();
        if children.is_empty() {
            return Err(ConstructionError::EmptyLogical { op });
        }
        Ok(Condition::Logical { op, children })
    }

    /// Conjunction of `children`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::EmptyLogical`] if `children` is empty.
    pub fn all(children: impl IntoIterator<Item = Condition>) -> Result<Self, ConstructionError> {
        Self::logical(LogicalOp::And, children)
    }

    /// Disjunction of `children`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::EmptyLogical`] if `children` is empty.
    pub fn any(children: impl IntoIterator<Item = Condition>) -> Result<Self, ConstructionError> {
        Self::logical(LogicalOp::Or, children)
    }

    /// Wrap `child` in `NOT`.
    #[must_use]
    pub fn negate(child: Condition) -> Self {
        Condition::Negation {
            child: Box::new(child),
        }
    }

    /// `self AND other`. Appends to `self` when it already is an `AND` node.
    #[must_use]
    pub fn and(self, other: Condition) -> Self {
        self.join(LogicalOp::And, other)
    }

    /// `self OR other`. Appends to `self` when it already is an `OR` node.
    #[must_use]
    pub fn or(self, other: Condition) -> Self {
        self.join(LogicalOp::Or, other)
    }

    fn join(self, op: LogicalOp, other: Condition) -> Self {
        match self {
            Condition::Logical {
                op: existing,
                mut children,
            } if existing == op => {
                children.push(other);
                Condition::Logical { op, children }
            }
            lhs => Condition::Logical {
                op,
                children: vec![lhs, other],
            },
        }
    }

    /// The property tested by a leaf node, `None` for logical and negation nodes.
    #[must_use]
    pub fn property(&self) -> Option<&str> {
        match self {
            Condition::Comparison { property, .. }
            | Condition::Numeric { property, .. }
            | Condition::StringMatch { property, .. }
            | Condition::NonValue { property, .. } => Some(property),
            Condition::Logical { .. } | Condition::Negation { .. } => None,
        }
    }

    /// The keyword of this node's operator.
    #[must_use]
    pub fn operator(&self) -> Operator {
        match self {
            Condition::Comparison { op, .. } => Operator::Equality(*op),
            Condition::Numeric { op, .. } => Operator::Numeric(*op),
            Condition::StringMatch { op, .. } => Operator::String(*op),
            Condition::NonValue { op, .. } => Operator::NonValue(*op),
            Condition::Logical { op, .. } => Operator::Logical(*op),
            Condition::Negation { .. } => Operator::Not,
        }
    }

    /// Nesting depth; a leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Condition::Logical { children, .. } => {
                1 + children.iter().map(Condition::depth).max().unwrap_or(0)
            }
            Condition::Negation { child } => 1 + child.depth(),
            _ => 1,
        }
    }
}

impl Not for Condition {
    type Output = Condition;

    fn not(self) -> Condition {
        Condition::negate(self)
    }
}

/// Intermediate builder for leaf conditions on one property.
/// Created by [`property()`].
#[derive(Debug, Clone)]
pub struct PropertyExpr {
    name: String,
}

impl PropertyExpr {
    #[must_use]
    pub fn eq(self, value: impl Into<Value>) -> Condition {
        Condition::comparison(&self.name, EqualityOp::Eq, value)
    }

    #[must_use]
    pub fn ne(self, value: impl Into<Value>) -> Condition {
        Condition::comparison(&self.name, EqualityOp::Ne, value)
    }

    /// # Errors
    ///
    /// Returns [`ConstructionError::NotNumeric`] for a non-numeric value.
    pub fn lt(self, value: impl Into<Value>) -> Result<Condition, ConstructionError> {
        Condition::numeric(&self.name, NumericOp::Lt, value)
    }

    /// # Errors
    ///
    /// Returns [`ConstructionError::NotNumeric`] for a non-numeric value.
    pub fn lte(self, value: impl Into<Value>) -> Result<Condition, ConstructionError> {
        Condition::numeric(&self.name, NumericOp::Lte, value)
    }

    /// # Errors
    ///
    /// Returns [`ConstructionError::NotNumeric`] for a non-numeric value.
    pub fn gt(self, value: impl Into<Value>) -> Result<Condition, ConstructionError> {
        Condition::numeric(&self.name, NumericOp::Gt, value)
    }

    /// # Errors
    ///
    /// Returns [`ConstructionError::NotNumeric`] for a non-numeric value.
    pub fn gte(self, value: impl Into<Value>) -> Result<Condition, ConstructionError> {
        Condition::numeric(&self.name, NumericOp::Gte, value)
    }

    #[must_use]
    pub fn starts_with(self, value: impl Into<String>) -> Condition {
        Condition::string_match(&self.name, StringOp::StartsWith, value)
    }

    #[must_use]
    pub fn contains(self, value: impl Into<String>) -> Condition {
        Condition::string_match(&self.name, StringOp::Contains, value)
    }

    #[must_use]
    pub fn ends_with(self, value: impl Into<String>) -> Condition {
        Condition::string_match(&self.name, StringOp::EndsWith, value)
    }

    #[must_use]
    pub fn is_null(self) -> Condition {
        Condition::non_value(&self.name, NonValueOp::Null)
    }

    #[must_use]
    pub fn is_blank(self) -> Condition {
        Condition::non_value(&self.name, NonValueOp::Blank)
    }

    #[must_use]
    pub fn is_empty(self) -> Condition {
        Condition::non_value(&self.name, NonValueOp::Empty)
    }
}

#[must_use]
pub fn property(name: &str) -> PropertyExpr {
    PropertyExpr {
        name: name.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_eq_str() {
        let cond = property("FirstName").eq("John");
        assert_eq!(
            cond,
            Condition::Comparison {
                property: "FirstName".to_owned(),
                op: EqualityOp::Eq,
                value: Value::from("John"),
            }
        );
    }

    #[test]
    fn numeric_coerces_string() {
        let cond = property("Height").lt("73").unwrap();
        assert_eq!(
            cond,
            Condition::Numeric {
                property: "Height".to_owned(),
                op: NumericOp::Lt,
                value: 73.0,
            }
        );
    }

    #[test]
    fn numeric_rejects_non_numeric() {
        let err = property("Height").gt("foo").unwrap_err();
        assert_eq!(
            err,
            ConstructionError::NotNumeric {
                value: "foo".into()
            }
        );
        assert!(property("Height").gte(true).is_err());
        assert!(property("Height").lte(Value::Null).is_err());
        assert!(property("Height").lt(f64::INFINITY).is_err());
    }

    #[test]
    fn logical_rejects_empty_children() {
        assert_eq!(
            Condition::all(Vec::new()).unwrap_err(),
            ConstructionError::EmptyLogical { op: LogicalOp::And }
        );
        assert_eq!(
            Condition::any(Vec::new()).unwrap_err(),
            ConstructionError::EmptyLogical { op: LogicalOp::Or }
        );
    }

    #[test]
    fn and_chaining_flattens() {
        let cond = property("a")
            .is_null()
            .and(property("b").is_null())
            .and(property("c").is_null());
        match &cond {
            Condition::Logical { op, children } => {
                assert_eq!(*op, LogicalOp::And);
                assert_eq!(children.len(), 3);
                assert_eq!(children[2].property(), Some("c"));
            }
            other => panic!("expected Logical, got {other:?}"),
        }
    }

    #[test]
    fn mixed_chaining_nests() {
        let cond = property("a")
            .is_null()
            .and(property("b").is_null())
            .or(property("c").is_null());
        match &cond {
            Condition::Logical { op, children } => {
                assert_eq!(*op, LogicalOp::Or);
                assert_eq!(children.len(), 2);
                assert_eq!(children[0].operator(), Operator::Logical(LogicalOp::And));
            }
            other => panic!("expected Logical, got {other:?}"),
        }
    }

    #[test]
    fn not_operator_wraps() {
        let cond = !property("banned").eq(true);
        assert_eq!(cond.operator(), Operator::Not);
        assert_eq!(cond.property(), None);
        assert_eq!(cond.depth(), 2);
    }

    #[test]
    fn keyword_lookup() {
        for op in NumericOp::ALL {
            assert_eq!(NumericOp::from_keyword(op.as_str()), Some(*op));
        }
        assert_eq!("CT".parse::<StringOp>(), Ok(StringOp::Contains));
        assert_eq!(
            "ct".parse::<StringOp>(),
            Err(UnknownKeyword("ct".to_owned()))
        );
    }

    #[test]
    fn operator_classification() {
        assert_eq!(
            Operator::from_keyword("EQ"),
            Some(Operator::Equality(EqualityOp::Eq))
        );
        assert_eq!(
            Operator::from_keyword("GTE"),
            Some(Operator::Numeric(NumericOp::Gte))
        );
        assert_eq!(
            Operator::from_keyword("EW"),
            Some(Operator::String(StringOp::EndsWith))
        );
        assert_eq!(
            Operator::from_keyword("EMPTY"),
            Some(Operator::NonValue(NonValueOp::Empty))
        );
        assert_eq!(
            Operator::from_keyword("OR"),
            Some(Operator::Logical(LogicalOp::Or))
        );
        assert_eq!(Operator::from_keyword("NOT"), Some(Operator::Not));
        assert_eq!(Operator::from_keyword("XOR"), None);
    }

    #[test]
    fn depth_of_nested_tree() {
        let cond = Condition::all([
            property("a").is_null(),
            !Condition::any([property("b").is_blank()]).unwrap(),
        ])
        .unwrap();
        assert_eq!(cond.depth(), 4);
    }
}
