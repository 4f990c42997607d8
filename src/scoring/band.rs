//! Threshold banding.

/// One entry of a band table: values strictly below `upper` score `score`.
pub type Band<T> = (f64, T);

/// Map `value` to the score of the first band whose upper bound strictly
/// exceeds it.
///
/// The table must be sorted ascending by upper bound. A value equal to a bound
/// falls into the next band. When no bound exceeds the value (including NaN),
/// the last entry's score is returned, so tables conventionally end with an
/// `f64::INFINITY` catch-all. Returns `None` only for an empty table.
#[must_use]
pub fn band<T: Copy>(value: f64, table: &[Band<T>]) -> Option<T> {
    table
        .iter()
        .find(|(upper, _)| value < *upper)
        .or_else(|| table.last())
        .map(|&(_, score)| score)
}
