//! `Condition` crosses serde boundaries as its notation string. Serializing
//! fails for conditions whose notation would not read back unchanged, and
//! deserializing goes through the parser and its checks.

use std::fmt;

use serde::de::{self, Visitor};
use serde::ser;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Condition;

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.exact_notation() {
            Some(text) => serializer.serialize_str(&text),
            None => Err(ser::Error::custom(format!(
                "condition {self} has no exact notation"
            ))),
        }
    }
}

struct NotationVisitor;

impl Visitor<'_> for NotationVisitor {
    type Value = Condition;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a condition in caret notation")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Condition, E> {
        Condition::from_notation(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(NotationVisitor)
    }
}
