//! Ranking and truncation of aggregated buckets.

use chartkit_model::SeriesPoint;

use crate::aggregate::Buckets;

/// Which statistic becomes a point's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Rounded mean; the point also carries the contributing record count.
    Average,
    /// Number of records in the group.
    Count,
}

/// Ordering applied before truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Highest value first; equal values keep first-seen order.
    DescValue,
    /// Names ascending by plain string comparison (`"10" < "9"`).
    AscKey,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankPolicy {
    pub metric: Metric,
    pub order: SortOrder,
    /// Maximum number of points; `None` keeps them all.
    pub limit: Option<usize>,
    /// Points whose value is not strictly greater than this are dropped, as
    /// are non-finite values.
    pub min_value: f64,
}

/// Turns buckets into an ordered, truncated series.
pub fn rank(buckets: &Buckets, policy: &RankPolicy) -> Vec<SeriesPoint> {
    let mut points: Vec<SeriesPoint> = buckets
        .iter()
        .filter_map(|(name, bucket)| {
            let point = match policy.metric {
                Metric::Average => {
                    SeriesPoint::new(name, bucket.rounded_mean()?).with_count(bucket.count)
                }
                Metric::Count => SeriesPoint::new(name, bucket.count as f64),
            };
            (point.value.is_finite() && point.value > policy.min_value).then_some(point)
        })
        .collect();

    // sort_by is stable, which keeps first-seen order among ties
    match policy.order {
        SortOrder::DescValue => points.sort_by(|a, b| b.value.total_cmp(&a.value)),
        SortOrder::AscKey => points.sort_by(|a, b| a.name.cmp(&b.name)),
    }

    if let Some(limit) = policy.limit {
        points.truncate(limit);
    }
    points
}
