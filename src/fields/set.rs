//! The field set attached to a log record.

use std::collections::hash_map::{self, HashMap};

use crate::fields::value::Value;

/// Unordered mapping from field name to value.
///
/// Owned by the caller. Nothing here locks; share across threads behind
/// your own synchronisation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    entries: HashMap<String, Value>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Builder form of [`FieldSet::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a field, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(name.into(), value.into())
    }

    /// Presence-aware lookup. `None` means missing; `Some(Value::Null)` means
    /// present but null.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.entries.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
        self.entries.iter()
    }
}

impl From<HashMap<String, Value>> for FieldSet {
    fn from(entries: HashMap<String, Value>) -> Self {
        Self { entries }
    }
}

impl From<FieldSet> for HashMap<String, Value> {
    fn from(set: FieldSet) -> Self {
        set.entries
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for FieldSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = FieldSet::new();
        set.extend(iter);
        set
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for FieldSet {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl IntoIterator for FieldSet {
    type Item = (String, Value);
    type IntoIter = hash_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = (&'a String, &'a Value);
    type IntoIter = hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
