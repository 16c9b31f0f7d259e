//! Set-level transformations. Each returns a fresh set and leaves its input
//! untouched.

use crate::fields::set::FieldSet;

/// Keep only entries whose value is not structurally empty.
pub fn filter_with_values(fields: &FieldSet) -> FieldSet {
    fields
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Copy every entry except those named in `exclude`.
///
/// A missing input yields an empty set, never `None`.
pub fn clone_excluding(fields: Option<&FieldSet>, exclude: &[&str]) -> FieldSet {
    let Some(fields) = fields else {
        return FieldSet::new();
    };

    let mut cloned = FieldSet::with_capacity(fields.len());
    for (name, value) in fields {
        if contains_name(exclude, name) {
            continue;
        }
        cloned.insert(name.clone(), value.clone());
    }
    cloned
}

/// Shallow clone; `clone_excluding` with nothing excluded.
pub fn clone_fields(fields: Option<&FieldSet>) -> FieldSet {
    clone_excluding(fields, &[])
}

pub fn contains_name(names: &[&str], target: &str) -> bool {
    names.iter().any(|name| *name == target)
}

impl FieldSet {
    /// See [`filter_with_values`].
    pub fn with_values(&self) -> FieldSet {
        filter_with_values(self)
    }

    /// See [`clone_excluding`].
    pub fn excluding(&self, exclude: &[&str]) -> FieldSet {
        clone_excluding(Some(self), exclude)
    }
}
