//! Range selection from iterator / clear options
//!
//! Reads the four range bounds plus `reverse` and `limit` from an
//! [`OptionMap`]. A bound that is absent, `Null` or `Undefined` leaves that
//! side of the range open.

use std::collections::BTreeMap;
use std::ops::Bound;

use encodedb_core::{names, OptionMap, RangeBound, Value};

/// Key range selected by a set of options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRange {
    lower: Bound<Vec<u8>>,
    upper: Bound<Vec<u8>>,
    /// Visit keys in descending order
    pub reverse: bool,
    /// Maximum number of keys (`None` = unlimited)
    pub limit: Option<usize>,
}

impl Default for KeyRange {
    fn default() -> Self {
        Self {
            lower: Bound::Unbounded,
            upper: Bound::Unbounded,
            reverse: false,
            limit: None,
        }
    }
}

/// Byte form of a bound, `None` for nullish bounds
fn bound_bytes(value: &Value) -> Option<Vec<u8>> {
    match value {
        Value::Null | Value::Undefined => None,
        Value::Bytes(b) => Some(b.clone()),
        Value::String(s) => Some(s.as_bytes().to_vec()),
        other => Some(other.to_text().into_bytes()),
    }
}

impl KeyRange {
    /// Build the range described by `options`.
    ///
    /// When both an exclusive and an inclusive bound are given for the same
    /// side, the exclusive one (`gt` / `lt`) wins.
    pub fn from_options(options: &OptionMap) -> Self {
        let pick = |exclusive: RangeBound, inclusive: RangeBound| {
            if let Some(key) = options.bound(exclusive).and_then(bound_bytes) {
                Bound::Excluded(key)
            } else if let Some(key) = options.bound(inclusive).and_then(bound_bytes) {
                Bound::Included(key)
            } else {
                Bound::Unbounded
            }
        };

        let limit = options
            .get_int(names::LIMIT)
            .and_then(|n| usize::try_from(n).ok());

        Self {
            lower: pick(RangeBound::GreaterThan, RangeBound::GreaterOrEqual),
            upper: pick(RangeBound::LessThan, RangeBound::LessOrEqual),
            reverse: options.get_bool(names::REVERSE).unwrap_or(false),
            limit,
        }
    }

    /// Whether `key` is inside the bounds (ignores `limit`)
    pub fn contains(&self, key: &[u8]) -> bool {
        let above = match &self.lower {
            Bound::Included(b) => key >= b.as_slice(),
            Bound::Excluded(b) => key > b.as_slice(),
            Bound::Unbounded => true,
        };
        let below = match &self.upper {
            Bound::Included(b) => key <= b.as_slice(),
            Bound::Excluded(b) => key < b.as_slice(),
            Bound::Unbounded => true,
        };
        above && below
    }

    /// Entries of `data` inside the bounds, in visiting order.
    ///
    /// `limit` is not applied; callers that stream entries count them
    /// themselves.
    pub fn select<V: Clone>(&self, data: &BTreeMap<Vec<u8>, V>) -> Vec<(Vec<u8>, V)> {
        // Open upper end: never hands BTreeMap::range an inverted range
        let mut entries: Vec<(Vec<u8>, V)> = data
            .range((self.lower.clone(), Bound::Unbounded))
            .take_while(|(k, _)| self.contains(k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        if self.reverse {
            entries.reverse();
        }
        entries
    }

    /// Keys of `data` inside the bounds, in visiting order, truncated to
    /// `limit`.
    pub fn select_keys<V>(&self, data: &BTreeMap<Vec<u8>, V>) -> Vec<Vec<u8>> {
        let in_range = data
            .range((self.lower.clone(), Bound::Unbounded))
            .take_while(|(k, _)| self.contains(k))
            .map(|(k, _)| k.clone());
        let limit = self.limit.unwrap_or(usize::MAX);
        if self.reverse {
            let mut keys: Vec<Vec<u8>> = in_range.collect();
            keys.reverse();
            keys.truncate(limit);
            keys
        } else {
            in_range.take(limit).collect()
        }
    }
}
