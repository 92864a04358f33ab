//! `armsort-core` — in-place quicksort for the armsort demo.
//!
//! This crate is `#![no_std]` and never allocates. It provides:
//! - `quicksort` / `sort_range` / `try_sort_range` over `&mut [i32]`
//! - `partition`, the Lomuto step the sort is built from
//! - `SortError` / `SortResult<T>` for the checked range entry point

#![no_std]

use core::fmt;

/// Length of the fixed demo array.
pub const ARRAY_SIZE: usize = 10;

mod sort;
pub use sort::{is_sorted, partition, quicksort, sort_range, try_sort_range};

/// Range errors reported by [`try_sort_range`].
///
/// These are caller bugs, not runtime conditions: `sort_range` turns the same
/// cases into a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// A non-empty range names an index past the end of the slice.
    IndexOutOfBounds { index: usize, len: usize },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for slice of length {len}")
            }
        }
    }
}

/// Result type for checked sort operations — `Result<T, SortError>`.
pub type SortResult<T> = Result<T, SortError>;
