//! Operation options
//!
//! An [`OptionMap`] maps option names to [`Value`]s. Presence is part of the
//! contract: a field that is absent, a field present as `Undefined` and a
//! field present as `Null` are three different states, and backends may
//! branch on any of them.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

use crate::value::Value;

/// Well-known option names read or written by the encoding layer.
pub mod names {
    /// Lower bound, exclusive
    pub const GT: &str = "gt";
    /// Lower bound, inclusive
    pub const GTE: &str = "gte";
    /// Upper bound, exclusive
    pub const LT: &str = "lt";
    /// Upper bound, inclusive
    pub const LTE: &str = "lte";
    /// Deliver `get` results as bytes
    pub const AS_BUFFER: &str = "asBuffer";
    /// Deliver iterator keys as bytes
    pub const KEY_AS_BUFFER: &str = "keyAsBuffer";
    /// Deliver iterator values as bytes
    pub const VALUE_AS_BUFFER: &str = "valueAsBuffer";
    /// Include keys in iterator entries
    pub const KEYS: &str = "keys";
    /// Include values in iterator entries
    pub const VALUES: &str = "values";
    /// Iterate / clear in reverse order
    pub const REVERSE: &str = "reverse";
    /// Maximum number of entries (negative = unlimited)
    pub const LIMIT: &str = "limit";
}

/// The four range bounds scoping an iteration or a range delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeBound {
    /// `gt`
    GreaterThan,
    /// `gte`
    GreaterOrEqual,
    /// `lt`
    LessThan,
    /// `lte`
    LessOrEqual,
}

impl RangeBound {
    /// All four bounds in a fixed order
    pub const ALL: [RangeBound; 4] = [
        RangeBound::GreaterThan,
        RangeBound::GreaterOrEqual,
        RangeBound::LessThan,
        RangeBound::LessOrEqual,
    ];

    /// Option field name of this bound
    pub fn field_name(self) -> &'static str {
        match self {
            RangeBound::GreaterThan => names::GT,
            RangeBound::GreaterOrEqual => names::GTE,
            RangeBound::LessThan => names::LT,
            RangeBound::LessOrEqual => names::LTE,
        }
    }
}

/// Presence-preserving mapping of option name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionMap(BTreeMap<String, Value>);

impl OptionMap {
    /// Empty option map
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a field, returning the previous value if present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    /// Insert a field only if it is absent.
    ///
    /// A field present as `Null` or `Undefined` counts as present and is kept.
    pub fn insert_default(&mut self, name: &str, value: impl Into<Value>) {
        if !self.0.contains_key(name) {
            self.0.insert(name.to_string(), value.into());
        }
    }

    /// Field value, `None` when absent
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Whether the field is present (regardless of its value)
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Remove a field
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    /// Boolean field; `None` when absent or not a `Bool`.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    /// Integer field; `None` when absent or not an `Int`.
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_int)
    }

    /// Flag that is on unless explicitly set to `false`.
    pub fn flag_unless_false(&self, name: &str) -> bool {
        self.get_bool(name) != Some(false)
    }

    /// Range bound value; `None` when absent, `Some(Null)` / `Some(Undefined)`
    /// when present but nullish.
    pub fn bound(&self, bound: RangeBound) -> Option<&Value> {
        self.get(bound.field_name())
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate fields in name order
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for OptionMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        OptionMap(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a OptionMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
