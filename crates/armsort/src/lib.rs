//! armsort — quicksort demo for ARM cross-compilation.
//!
//! This crate wraps `armsort-core` with the demo program's configuration and
//! output format. The report written by [`run_demo`] is the program's only
//! standard-output contract; diagnostics go through `tracing`.

use std::io::Write;

// Re-export key types for convenience
pub use anyhow::{Context, Result};
pub use armsort_core::ARRAY_SIZE;
use armsort_core::{is_sorted, quicksort};

/// Unsorted contents of the demo array.
pub const DEMO_DATA: [i32; ARRAY_SIZE] = [64, 34, 25, 12, 22, 11, 90, 88, 76, 50];

/// Configuration options for a demo run
#[derive(Debug, Clone)]
pub struct DemoOptions {
    /// Array to sort
    pub data: [i32; ARRAY_SIZE],
    /// Print the title, algorithm and size lines plus the closing message
    /// around the two array lines
    pub banner: bool,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            data: DEMO_DATA,
            banner: true,
        }
    }
}

/// The array before and after a demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub original: [i32; ARRAY_SIZE],
    pub sorted: [i32; ARRAY_SIZE],
}

/// Render values as base-10 integers separated by `", "`.
pub fn format_array(values: &[i32]) -> String {
    values
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Sort a copy of `options.data` and write the report to `out`.
///
/// # Errors
/// Fails if writing to `out` fails, or if the sorted array does not pass the
/// sortedness self-check.
pub fn run_demo<W: Write>(options: &DemoOptions, out: &mut W) -> Result<DemoReport> {
    let original = options.data;
    let mut sorted = original;

    if options.banner {
        write!(
            out,
            "ARM Cross-Compilation Sorting Demo\nAlgorithm: Quicksort\nArray size: {ARRAY_SIZE}\n\n"
        )
        .context("failed to write banner")?;
    }

    writeln!(out, "Original array: {}", format_array(&original))
        .context("failed to write original array")?;

    tracing::debug!(len = sorted.len(), "sorting array");
    quicksort(&mut sorted);
    if !is_sorted(&sorted) {
        anyhow::bail!("quicksort produced unsorted output: {}", format_array(&sorted));
    }
    tracing::debug!(sorted = %format_array(&sorted), "sort complete");

    writeln!(out, "Sorted array:   {}", format_array(&sorted))
        .context("failed to write sorted array")?;

    if options.banner {
        write!(out, "\nSorting completed successfully!\n").context("failed to write summary")?;
    }
    out.flush().context("failed to flush output")?;

    Ok(DemoReport { original, sorted })
}
