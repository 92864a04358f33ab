//! Lomuto-partition quicksort over `&mut [i32]`.
//!
//! The pivot is always the last element of the current sub-slice, and
//! elements equal to the pivot land in the left (`<=`) partition. Recursion
//! works on disjoint halves obtained with `split_at_mut`, so each call holds
//! exclusive access to exactly the range it sorts.
//!
//! Average cost is O(n log n); already-sorted and reverse-sorted input hit
//! the O(n²) worst case, with recursion depth growing to O(n).

use crate::{SortError, SortResult};

/// Partition `seq` around its last element and return the pivot's final index.
///
/// On return every element left of the index is `<=` the pivot and every
/// element right of it is `>` the pivot.
///
/// # Panics
/// Panics if `seq` is empty.
pub fn partition(seq: &mut [i32]) -> usize {
    assert!(!seq.is_empty(), "partition: empty slice has no pivot");
    let high = seq.len() - 1;
    let pivot = seq[high];

    // `boundary` is one past the end of the `<= pivot` region.
    let mut boundary = 0;
    for j in 0..high {
        if seq[j] <= pivot {
            seq.swap(boundary, j);
            boundary += 1;
        }
    }
    seq.swap(boundary, high);
    boundary
}

/// Sort the whole slice in non-decreasing order, in place.
///
/// Empty and single-element slices are left as they are.
pub fn quicksort(seq: &mut [i32]) {
    if seq.len() <= 1 {
        return;
    }
    let pivot = partition(seq);
    let (left, right) = seq.split_at_mut(pivot);
    quicksort(left);
    // right[0] is the pivot, already in its final position.
    quicksort(&mut right[1..]);
}

/// Sort the inclusive range `[low, high]` of `seq` in place.
///
/// `low >= high` describes zero or one element and is a no-op. Elements
/// outside the range are never touched.
///
/// # Panics
/// Panics if the range is non-empty and `high` is not a valid index.
/// Use [`try_sort_range`] to get the same check as an error.
pub fn sort_range(seq: &mut [i32], low: usize, high: usize) {
    if let Err(err) = try_sort_range(seq, low, high) {
        panic!("sort_range({low}, {high}): {err}");
    }
}

/// Checked form of [`sort_range`].
///
/// # Errors
/// Returns `SortError::IndexOutOfBounds` if the range is non-empty and
/// `high >= seq.len()`. The slice is left unmodified in that case.
pub fn try_sort_range(seq: &mut [i32], low: usize, high: usize) -> SortResult<()> {
    if low >= high {
        return Ok(());
    }
    if high >= seq.len() {
        return Err(SortError::IndexOutOfBounds {
            index: high,
            len: seq.len(),
        });
    }
    quicksort(&mut seq[low..=high]);
    Ok(())
}

/// Returns `true` if every adjacent pair in `seq` is in non-decreasing order.
#[inline]
pub fn is_sorted(seq: &[i32]) -> bool {
    seq.windows(2).all(|pair| pair[0] <= pair[1])
}


// ============================================================================
// Kani Formal Verification Proofs
// ============================================================================
//
// Bounded model checking of the sort with Kani. Run with: cargo kani -p armsort-core
//
// The proofs establish, for every input of the checked sizes, that:
// - quicksort output is non-decreasing
// - quicksort output is a permutation of its input
// - partition leaves `<= pivot` on the left and `> pivot` on the right
// - try_sort_range never panics and never touches elements outside the range

#[cfg(kani)]
mod proofs {
    use super::*;

    fn count(seq: &[i32], value: i32) -> usize {
        seq.iter().filter(|&&x| x == value).count()
    }

    /// Proof: quicksort output is sorted for any 5-element input.
    #[kani::proof]
    #[kani::unwind(7)]
    fn quicksort_output_is_sorted() {
        let mut data: [i32; 5] = kani::any();
        quicksort(&mut data);
        kani::assert(is_sorted(&data), "quicksort output must be non-decreasing");
    }

    /// Proof: quicksort preserves the multiset of values.
    /// Checked for an arbitrary probe value, which covers every value.
    #[kani::proof]
    #[kani::unwind(6)]
    fn quicksort_is_permutation() {
        let original: [i32; 4] = kani::any();
        let mut data = original;
        quicksort(&mut data);

        let probe: i32 = kani::any();
        kani::assert(
            count(&data, probe) == count(&original, probe),
            "quicksort must not add, drop or change values",
        );
    }

    /// Proof: partition postcondition holds for any non-empty input.
    #[kani::proof]
    #[kani::unwind(6)]
    fn partition_splits_around_pivot() {
        let mut data: [i32; 4] = kani::any();
        let pivot_value = data[3];
        let p = partition(&mut data);

        kani::assert(p < data.len(), "pivot index must be in bounds");
        kani::assert(data[p] == pivot_value, "pivot must land at returned index");
        for (i, &x) in data.iter().enumerate() {
            if i < p {
                kani::assert(x <= pivot_value, "left partition must be <= pivot");
            } else if i > p {
                kani::assert(x > pivot_value, "right partition must be > pivot");
            }
        }
    }

    /// Proof: try_sort_range never panics for any low/high, and leaves
    /// everything outside the requested range untouched.
    #[kani::proof]
    #[kani::unwind(6)]
    fn try_sort_range_never_panics() {
        let original: [i32; 4] = kani::any();
        let mut data = original;
        let low: usize = kani::any();
        let high: usize = kani::any();

        let result = try_sort_range(&mut data, low, high);

        if result.is_err() {
            kani::assert(data == original, "failed range sort must not mutate");
        } else if low < high {
            for i in 0..data.len() {
                if i < low || i > high {
                    kani::assert(data[i] == original[i], "outside range must be untouched");
                }
            }
            kani::assert(is_sorted(&data[low..=high]), "range must be sorted");
        }
    }
}
