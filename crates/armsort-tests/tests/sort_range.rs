//! Integration tests for inclusive sub-range sorting.

use armsort_core::{is_sorted, sort_range, try_sort_range, SortError};
use armsort_tests::{lcg_values, sorted_ref};

#[test]
fn test_range_sorted_rest_untouched() {
    let original = lcg_values(40, 11);
    for (low, high) in [(0, 39), (0, 0), (5, 20), (20, 39), (38, 39), (10, 11)] {
        let mut data = original.clone();
        sort_range(&mut data, low, high);

        assert_eq!(data[..low], original[..low], "prefix, range [{low}, {high}]");
        assert_eq!(data[high + 1..], original[high + 1..], "suffix, range [{low}, {high}]");
        assert_eq!(data[low..=high], sorted_ref(&original[low..=high])[..]);
        assert!(is_sorted(&data[low..=high]));
    }
}

#[test]
fn test_low_greater_than_high_is_noop() {
    let original = lcg_values(10, 3);
    let mut data = original.clone();
    sort_range(&mut data, 7, 2);
    assert_eq!(data, original);
}

#[test]
fn test_empty_slice_degenerate_range() {
    let mut data: Vec<i32> = Vec::new();
    sort_range(&mut data, 0, 0);
    assert_eq!(try_sort_range(&mut data, 0, 0), Ok(()));
    assert!(data.is_empty());
}

#[test]
fn test_try_sort_range_out_of_bounds() {
    let original = lcg_values(10, 3);
    let mut data = original.clone();
    assert_eq!(
        try_sort_range(&mut data, 0, 10),
        Err(SortError::IndexOutOfBounds { index: 10, len: 10 })
    );
    assert_eq!(data, original);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_sort_range_out_of_bounds_panics() {
    let mut data = lcg_values(10, 3);
    sort_range(&mut data, 2, 10);
}
