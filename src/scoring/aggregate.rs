//! Weighted aggregation.

use indexmap::IndexMap;
use std::hash::Hash;

/// Weighted mean of `(value, weight)` pairs.
///
/// Returns `0.0` when the weights sum to zero or less, which covers empty
/// groups and groups whose members were all excluded.
#[must_use]
pub fn weighted_mean<I>(pairs: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let (total, weight) = pairs
        .into_iter()
        .fold((0.0, 0.0), |(total, weight), (v, w)| (total + v * w, weight + w));
    finish(total, weight)
}

/// Weighted mean per group, in the order groups are first seen.
///
/// `key` selects the group of an item, `value` and `weight` its contribution.
/// Each group is reduced exactly like [`weighted_mean`].
pub fn grouped_weighted_mean<T, K, FK, FV, FW>(
    items: impl IntoIterator<Item = T>,
    key: FK,
    value: FV,
    weight: FW,
) -> IndexMap<K, f64>
where
    K: Hash + Eq,
    FK: Fn(&T) -> K,
    FV: Fn(&T) -> f64,
    FW: Fn(&T) -> f64,
{
    let mut sums: IndexMap<K, (f64, f64)> = IndexMap::new();
    for item in items {
        let w = weight(&item);
        let entry = sums.entry(key(&item)).or_insert((0.0, 0.0));
        entry.0 += value(&item) * w;
        entry.1 += w;
    }
    sums.into_iter()
        .map(|(k, (total, weight))| (k, finish(total, weight)))
        .collect()
}

/// `numerator / denominator`, or `0.0` when the denominator is zero or less.
#[must_use]
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    finish(numerator, denominator)
}

fn finish(total: f64, weight: f64) -> f64 {
    if weight <= 0.0 {
        tracing::debug!("Zero denominator in weighted mean, resolving to 0");
        return 0.0;
    }
    total / weight
}
