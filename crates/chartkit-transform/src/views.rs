//! The view table: one declarative entry per chart series.
//!
//! [`VIEW_SPECS`] is the single place that says how each [`ViewKind`] groups,
//! reduces and ranks. A [`ViewTable`] binds those entries to the column names
//! of a [`DatasetSchema`]; adding a view means adding a spec entry.

use chartkit_model::{DatasetSchema, SeriesPoint, TypedRecord, ViewKind};

use crate::aggregate::{
    KeyRule, PlaceholderPolicy, UnknownPolicy, aggregate_average, aggregate_count,
};
use crate::rank::{Metric, RankPolicy, SortOrder, rank};

/// Which schema column supplies the group key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyColumn {
    Category,
    Time,
    /// Secondary category, with the schema's fallback column.
    Secondary,
}

/// Dataset-independent description of a view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSpec {
    pub kind: ViewKind,
    pub key: KeyColumn,
    pub unknown: UnknownPolicy,
    pub placeholder: PlaceholderPolicy,
    pub rank: RankPolicy,
}

pub const VIEW_SPECS: [ViewSpec; 4] = [
    ViewSpec {
        kind: ViewKind::ByCategoryAverage,
        key: KeyColumn::Category,
        unknown: UnknownPolicy::Keep,
        placeholder: PlaceholderPolicy::AsUnknown,
        rank: RankPolicy {
            metric: Metric::Average,
            order: SortOrder::DescValue,
            limit: Some(10),
            min_value: 0.0,
        },
    },
    ViewSpec {
        kind: ViewKind::ByTimeAverage,
        key: KeyColumn::Time,
        unknown: UnknownPolicy::Exclude,
        placeholder: PlaceholderPolicy::AsUnknown,
        rank: RankPolicy {
            metric: Metric::Average,
            order: SortOrder::AscKey,
            limit: None,
            min_value: 0.0,
        },
    },
    ViewSpec {
        kind: ViewKind::BySecondaryCategoryDistribution,
        key: KeyColumn::Secondary,
        unknown: UnknownPolicy::Keep,
        placeholder: PlaceholderPolicy::Exclude,
        rank: RankPolicy {
            metric: Metric::Count,
            order: SortOrder::DescValue,
            limit: Some(8),
            min_value: 0.0,
        },
    },
    ViewSpec {
        kind: ViewKind::ByCategoryFrequency,
        key: KeyColumn::Category,
        unknown: UnknownPolicy::Exclude,
        placeholder: PlaceholderPolicy::AsUnknown,
        rank: RankPolicy {
            metric: Metric::Count,
            order: SortOrder::DescValue,
            limit: Some(15),
            min_value: 0.0,
        },
    },
];

/// Reduction applied to each group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reduction {
    /// Mean of the named measure column.
    Average { value_field: String },
    Count,
}

/// A view spec bound to concrete column names.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewPolicy {
    pub kind: ViewKind,
    pub key: KeyRule,
    pub reduction: Reduction,
    pub rank: RankPolicy,
}

impl ViewPolicy {
    pub fn bind(spec: &ViewSpec, schema: &DatasetSchema) -> Self {
        let key = match spec.key {
            KeyColumn::Category => KeyRule::new(&schema.category_field),
            KeyColumn::Time => KeyRule::new(&schema.time_field),
            KeyColumn::Secondary => KeyRule::new(&schema.secondary_field)
                .with_fallback(schema.secondary_fallback_field.clone()),
        }
        .with_placeholders(schema.placeholders.clone())
        .with_unknown(spec.unknown)
        .with_placeholder_policy(spec.placeholder);

        let reduction = match spec.rank.metric {
            Metric::Average => Reduction::Average {
                value_field: schema.value_field.clone(),
            },
            Metric::Count => Reduction::Count,
        };

        Self {
            kind: spec.kind,
            key,
            reduction,
            rank: spec.rank,
        }
    }

    /// Aggregates and ranks `records` into this view's series.
    pub fn compute(&self, records: &[TypedRecord]) -> Vec<SeriesPoint> {
        let buckets = match &self.reduction {
            Reduction::Average { value_field } => {
                aggregate_average(records, &self.key, value_field)
            }
            Reduction::Count => aggregate_count(records, &self.key),
        };
        rank(&buckets, &self.rank)
    }

    /// Human-readable title, e.g. `Average Price by Brand (top 10)`.
    pub fn title(&self) -> String {
        let base = match &self.reduction {
            Reduction::Average { value_field } => {
                format!("Average {value_field} by {}", self.key.field)
            }
            Reduction::Count => format!("Count by {}", self.key.field),
        };
        match self.rank.limit {
            Some(limit) => format!("{base} (top {limit})"),
            None => base,
        }
    }
}

/// All configured views for one dataset schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTable {
    views: Vec<ViewPolicy>,
}

impl ViewTable {
    /// Binds every entry of [`VIEW_SPECS`] to `schema`.
    pub fn from_schema(schema: &DatasetSchema) -> Self {
        Self::from_specs(&VIEW_SPECS, schema)
    }

    /// Binds an arbitrary set of specs. Later duplicates of a kind are ignored
    /// by [`ViewTable::policy`].
    pub fn from_specs<'a, I>(specs: I, schema: &DatasetSchema) -> Self
    where
        I: IntoIterator<Item = &'a ViewSpec>,
    {
        Self {
            views: specs
                .into_iter()
                .map(|spec| ViewPolicy::bind(spec, schema))
                .collect(),
        }
    }

    pub fn policy(&self, kind: ViewKind) -> Option<&ViewPolicy> {
        self.views.iter().find(|view| view.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ViewPolicy> {
        self.views.iter()
    }
}

impl Default for ViewTable {
    fn default() -> Self {
        Self::from_schema(&DatasetSchema::default())
    }
}
