//! Boundary conversions between id containers.
//!
//! Batch internals keep id sets in [`FxHashSet`], which is tuned for
//! small integer keys; the std [`HashSet`] is the general-purpose
//! container at the public boundary. These functions translate between
//! the two, plus the sorted-array dedup pass the batch pipeline runs
//! before handing ids to a writer.

use std::collections::HashSet;

use rustc_hash::FxHashSet;

/// Collect ids from any general-purpose container into the fast set.
///
/// Duplicates collapse: membership in the result means the id appeared
/// at least once in the input.
pub fn as_set<I>(values: I) -> FxHashSet<i64>
where
    I: IntoIterator<Item = i64>,
{
    values.into_iter().collect()
}

/// Copy a fast id set back into the std general-purpose set.
///
/// Membership is preserved exactly; neither set has a meaningful
/// iteration order.
pub fn to_set(ids: &FxHashSet<i64>) -> HashSet<i64> {
    ids.iter().copied().collect()
}

/// Drop adjacent duplicates from a sorted id slice.
///
/// One forward pass keeping each id that differs from the last id
/// kept, so every distinct value survives exactly once, in order.
///
/// # Contract
///
/// `sorted` must be non-decreasing. Debug builds panic on unsorted
/// input, naming the offending position; release builds skip the check
/// and quietly produce garbage.
pub fn deduplicate(sorted: &[i64]) -> Vec<i64> {
    #[cfg(debug_assertions)]
    {
        if let Some(i) = sorted.windows(2).position(|pair| pair[0] > pair[1]) {
            panic!(
                "deduplicate input is not sorted: {} at index {} follows {}",
                sorted[i + 1],
                i + 1,
                sorted[i]
            );
        }
    }
    let mut unique = Vec::with_capacity(sorted.len());
    for &id in sorted {
        if unique.last() != Some(&id) {
            unique.push(id);
        }
    }
    unique
}
