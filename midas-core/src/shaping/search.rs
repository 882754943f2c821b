/// Result of [`binary_search_insertion_point`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The target is at this index. With duplicates, any matching index.
    Found(usize),
    /// The target is absent. The index is where it would be inserted,
    /// clamped to the last valid index of the array.
    NotFound(usize),
}

impl SearchOutcome {
    /// The found index or the (clamped) insertion index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Found(i) | Self::NotFound(i) => i,
        }
    }

    /// True for `Found`.
    #[must_use]
    pub const fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Sign-encoded form used by chart scripts.
    ///
    /// `Found(i)` is `i`; `NotFound(i)` is `-i`. `NotFound(0)` encodes as `0`
    /// and is therefore indistinguishable from `Found(0)` in this form.
    #[must_use]
    pub fn to_legacy_code(self) -> i64 {
        match self {
            Self::Found(i) => i64::try_from(i).unwrap_or(i64::MAX),
            Self::NotFound(i) => -i64::try_from(i).unwrap_or(i64::MAX),
        }
    }
}

/// Binary search over a non-decreasing slice.
///
/// Returns `Found(i)` when `sorted[i] == target`. Otherwise returns
/// `NotFound(p)` where `p` is the index of the first element greater than
/// `target`; if every element is smaller, `p` is clamped to the last index so
/// it can be used directly for lookups. Empty and single-element slices
/// always report `NotFound(0)` on a miss.
///
/// ```
/// use midas_core::{binary_search_insertion_point, SearchOutcome};
///
/// let keys = [10, 20, 30];
/// assert_eq!(binary_search_insertion_point(&keys, &20), SearchOutcome::Found(1));
/// assert_eq!(binary_search_insertion_point(&keys, &15), SearchOutcome::NotFound(1));
/// assert_eq!(binary_search_insertion_point(&keys, &99), SearchOutcome::NotFound(2));
/// assert_eq!(binary_search_insertion_point(&keys, &99).to_legacy_code(), -2);
/// ```
pub fn binary_search_insertion_point<T: PartialOrd>(sorted: &[T], target: &T) -> SearchOutcome {
    let mut lo = 0usize;
    let mut hi = sorted.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let probe = &sorted[mid];
        if probe < target {
            lo = mid + 1;
        } else if probe > target {
            hi = mid;
        } else {
            return SearchOutcome::Found(mid);
        }
    }
    SearchOutcome::NotFound(lo.min(sorted.len().saturating_sub(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_first_element_inserts_at_zero() {
        let out = binary_search_insertion_point(&[10, 20, 30], &5);
        assert_eq!(out, SearchOutcome::NotFound(0));
        assert_eq!(out.to_legacy_code(), 0);
    }

    #[test]
    fn single_element_miss_is_zero_on_both_sides() {
        assert_eq!(binary_search_insertion_point(&[10], &5), SearchOutcome::NotFound(0));
        assert_eq!(binary_search_insertion_point(&[10], &50), SearchOutcome::NotFound(0));
        assert_eq!(binary_search_insertion_point(&[10], &10), SearchOutcome::Found(0));
    }

    #[test]
    fn empty_slice_reports_zero() {
        let empty: [i32; 0] = [];
        assert_eq!(binary_search_insertion_point(&empty, &1), SearchOutcome::NotFound(0));
    }

    #[test]
    fn duplicates_return_a_matching_index() {
        let keys = [1, 2, 2, 2, 3];
        let out = binary_search_insertion_point(&keys, &2);
        assert!(out.is_found());
        assert_eq!(keys[out.index()], 2);
    }
}
