//! Shared inputs and reference helpers for the armsort integration tests
//! and benchmarks.

/// Fill a vector with `n` pseudo-random values from a wrapping LCG.
///
/// Same generator constants as the C library `rand()` reference, so inputs
/// are reproducible across runs and platforms.
pub fn lcg_values(n: usize, seed: i32) -> Vec<i32> {
    let mut rng = seed;
    let mut values = Vec::with_capacity(n);
    for _ in 0..n {
        rng = rng.wrapping_mul(1103515245).wrapping_add(12345);
        values.push(rng);
    }
    values
}

/// LCG values folded into `0..modulus`, for inputs with many duplicates.
pub fn lcg_values_mod(n: usize, seed: i32, modulus: i32) -> Vec<i32> {
    lcg_values(n, seed)
        .into_iter()
        .map(|v| v.rem_euclid(modulus))
        .collect()
}

/// Ground-truth sort using the standard library.
pub fn sorted_ref(values: &[i32]) -> Vec<i32> {
    let mut out = values.to_vec();
    out.sort_unstable();
    out
}

/// Sort with `armsort_core::quicksort` and return a wrapping checksum.
pub fn fill_sort_sum(n: usize, seed: i32) -> i32 {
    let mut values = lcg_values(n, seed);
    armsort_core::quicksort(&mut values);
    values.iter().fold(0i32, |sum, v| sum.wrapping_add(*v))
}
