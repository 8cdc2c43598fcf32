use std::collections::{BTreeMap, HashMap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Value;

/// Read access to the properties a condition is tested against.
///
/// Returning `None` means the property is absent, which conditions treat the
/// same as [`Value::Null`].
pub trait Lookup {
    /// The value stored under `property`, if any.
    fn lookup(&self, property: &str) -> Option<&Value>;
}

/// Owned mapping from property names to [`Value`]s.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Record {
    data: HashMap<String, Value>,
}

impl Record {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value.
    #[must_use]
    pub fn set(mut self, property: &str, value: impl Into<Value>) -> Self {
        self.insert(property, value.into());
        self
    }

    /// Insert a property (mutable reference version).
    pub fn insert(&mut self, property: &str, value: Value) {
        self.data.insert(property.to_owned(), value);
    }

    #[must_use]
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.data.get(property)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            data: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, Value>> for Record {
    fn from(data: HashMap<String, Value>) -> Self {
        Self { data }
    }
}

impl Lookup for Record {
    fn lookup(&self, property: &str) -> Option<&Value> {
        self.get(property)
    }
}

impl Lookup for HashMap<String, Value> {
    fn lookup(&self, property: &str) -> Option<&Value> {
        self.get(property)
    }
}

impl Lookup for BTreeMap<String, Value> {
    fn lookup(&self, property: &str) -> Option<&Value> {
        self.get(property)
    }
}

impl<L: Lookup + ?Sized> Lookup for &L {
    fn lookup(&self, property: &str) -> Option<&Value> {
        (**self).lookup(property)
    }
}
