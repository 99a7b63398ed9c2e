//! Grouping and reduction of typed records.
//!
//! Two reductions exist: averaging a measure per group and counting records
//! per group. Both return [`Buckets`], which iterate in first-seen key order;
//! that order only matters as the tie-break for the ranker's stable sort.

use std::borrow::Cow;
use std::collections::HashMap;

use chartkit_model::{FieldValue, TypedRecord, UNKNOWN_KEY};

use crate::normalization::measure_value;

/// What to do with records whose group key resolves to [`UNKNOWN_KEY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownPolicy {
    /// Group them under `"Unknown"`.
    Keep,
    /// Leave them out of the reduction entirely.
    Exclude,
}

/// What to do with records whose group key is a placeholder token such as `"-"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderPolicy {
    /// Treat the placeholder as a missing value, i.e. [`UNKNOWN_KEY`].
    AsUnknown,
    /// Leave the record out, independently of [`UnknownPolicy`].
    Exclude,
}

/// How a record's group key is derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRule {
    /// Column holding the category.
    pub field: String,
    /// Column consulted when `field` is missing or blank.
    pub fallback: Option<String>,
    /// Values that mean "no category".
    pub placeholders: Vec<String>,
    /// Whether missing categories are grouped under `"Unknown"` or dropped.
    pub unknown: UnknownPolicy,
    /// Whether placeholder values count as unknown or drop the record.
    pub placeholder: PlaceholderPolicy,
}

enum Resolved<'a> {
    Present(Cow<'a, str>),
    Missing,
    Placeholder,
}

impl KeyRule {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            fallback: None,
            placeholders: Vec::new(),
            unknown: UnknownPolicy::Keep,
            placeholder: PlaceholderPolicy::AsUnknown,
        }
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: Option<String>) -> Self {
        self.fallback = fallback;
        self
    }

    #[must_use]
    pub fn with_placeholders(mut self, placeholders: Vec<String>) -> Self {
        self.placeholders = placeholders;
        self
    }

    #[must_use]
    pub fn with_unknown(mut self, unknown: UnknownPolicy) -> Self {
        self.unknown = unknown;
        self
    }

    #[must_use]
    pub fn with_placeholder_policy(mut self, placeholder: PlaceholderPolicy) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Resolves the group key, substituting [`UNKNOWN_KEY`] for missing,
    /// blank and placeholder values.
    pub fn resolve<'a>(&self, record: &'a TypedRecord) -> Cow<'a, str> {
        match self.classify(record) {
            Resolved::Present(key) => key,
            Resolved::Missing | Resolved::Placeholder => Cow::Borrowed(UNKNOWN_KEY),
        }
    }

    /// Resolves the key, or `None` when the rule drops the record.
    pub fn resolve_included<'a>(&self, record: &'a TypedRecord) -> Option<Cow<'a, str>> {
        let unknown = match self.classify(record) {
            Resolved::Present(key) => return Some(key),
            Resolved::Placeholder if self.placeholder == PlaceholderPolicy::Exclude => {
                return None;
            }
            Resolved::Missing | Resolved::Placeholder => Cow::Borrowed(UNKNOWN_KEY),
        };
        (self.unknown == UnknownPolicy::Keep).then_some(unknown)
    }

    fn classify<'a>(&self, record: &'a TypedRecord) -> Resolved<'a> {
        let value = present(record.get(&self.field)).or_else(|| {
            self.fallback
                .as_deref()
                .and_then(|fallback| present(record.get(fallback)))
        });
        let Some(value) = value else {
            return Resolved::Missing;
        };
        let key = value.to_key();
        if self.is_placeholder(&key) {
            Resolved::Placeholder
        } else if key == UNKNOWN_KEY {
            Resolved::Missing
        } else {
            Resolved::Present(key)
        }
    }

    fn is_placeholder(&self, key: &str) -> bool {
        let trimmed = key.trim();
        self.placeholders
            .iter()
            .any(|placeholder| placeholder.trim() == trimmed)
    }
}

fn present(value: Option<&FieldValue>) -> Option<&FieldValue> {
    value.filter(|value| !value.is_blank())
}

/// Per-group accumulator. Count-only reductions leave `sum` at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bucket {
    pub sum: f64,
    pub count: u64,
}

impl Bucket {
    fn accumulate(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn tally(&mut self) {
        self.count += 1;
    }

    /// `round(sum / count)`, or `None` for an empty bucket or a sum that
    /// overflowed to infinity.
    pub fn rounded_mean(&self) -> Option<f64> {
        (self.count > 0)
            .then(|| (self.sum / self.count as f64).round())
            .filter(|mean| mean.is_finite())
    }
}

/// Group key -> bucket map that remembers first-seen key order.
#[derive(Debug, Clone, Default)]
pub struct Buckets {
    entries: Vec<(String, Bucket)>,
    index: HashMap<String, usize>,
}

impl Buckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bucket for `key`, creating an empty one on first sight.
    pub fn entry(&mut self, key: &str) -> &mut Bucket {
        let slot = match self.index.get(key) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.entries.push((key.to_string(), Bucket::default()));
                self.index.insert(key.to_string(), slot);
                slot
            }
        };
        &mut self.entries[slot].1
    }

    pub fn get(&self, key: &str) -> Option<&Bucket> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates buckets in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Bucket)> {
        self.entries.iter().map(|(key, bucket)| (key.as_str(), bucket))
    }
}

/// Average mode: sums strictly positive measures per group.
///
/// Every included record creates its group's bucket, even when its measure is
/// unparseable or not positive; such records just don't add to `sum`/`count`.
pub fn aggregate_average(records: &[TypedRecord], key: &KeyRule, value_field: &str) -> Buckets {
    let mut buckets = Buckets::new();
    for record in records {
        let Some(group) = key.resolve_included(record) else {
            continue;
        };
        let bucket = buckets.entry(&group);
        if let Some(value) = record.get(value_field).and_then(measure_value)
            && value > 0.0
        {
            bucket.accumulate(value);
        }
    }
    buckets
}

/// Count mode: one tally per included record.
pub fn aggregate_count(records: &[TypedRecord], key: &KeyRule) -> Buckets {
    let mut buckets = Buckets::new();
    for record in records {
        if let Some(group) = key.resolve_included(record) {
            buckets.entry(&group).tally();
        }
    }
    buckets
}
