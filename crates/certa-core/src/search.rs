//! Binary search over sorted slices.

use std::cmp::Ordering;

/// Index of `target` in `sorted`, or `None` if absent.
///
/// `sorted` must be in ascending order; results are unspecified otherwise.
/// With duplicates, any matching index may be returned.
pub fn binary_search<T: Ord>(sorted: &[T], target: &T) -> Option<usize> {
    let mut low = 0;
    let mut high = sorted.len();

    // Half-open [low, high) avoids underflow on `mid - 1`.
    while low < high {
        let mid = low + (high - low) / 2;
        match sorted[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}
