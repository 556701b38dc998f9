//! Frequency helpers shared by the aggregators.
//!
//! Callers pass only present values, so missing cells never take part in a
//! count. When several values share the highest count, the smallest one wins.

use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Occurrence count of each distinct value, keyed in ascending order.
pub fn counts<T, I>(values: I) -> BTreeMap<T, usize>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Most frequent value, or `None` for an empty input.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts(values) {
        // Ascending iteration plus a strict comparison keeps the smallest tie.
        if best.as_ref().map_or(true, |(_, top)| count > *top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Distinct values with their counts, most frequent first.
///
/// Values with equal counts stay in ascending order.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut ranked: Vec<(T, usize)> = counts(values).into_iter().collect();
    ranked.sort_by_key(|(_, count)| Reverse(*count));
    ranked
}
