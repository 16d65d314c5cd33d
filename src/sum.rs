// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Summation strategies.
//!
//! All strategies compute the exact same total: the sum of the input
//! elements, each widened to [`u64`] before accumulation so that the default
//! configuration (10,000,000 elements below 100) is nowhere near overflow.
//! They differ only in loop structure.

use std::num::NonZeroUsize;

/// Unroll factors benchmarked by default.
pub const DEFAULT_UNROLL_FACTORS: [NonZeroUsize; 2] = [unroll_factor(4), unroll_factor(8)];

const fn unroll_factor(factor: usize) -> NonZeroUsize {
    match NonZeroUsize::new(factor) {
        Some(factor) => factor,
        None => panic!("unroll factor must be non-zero"),
    }
}

/// Sums the elements of a slice one index at a time.
///
/// This is the baseline strategy: a plain indexed loop with a single
/// accumulator, giving the compiler no grouping hint.
///
/// ```
/// # use sumbench::basic_loop_sum;
/// assert_eq!(basic_loop_sum(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]), 55);
/// ```
#[allow(clippy::needless_range_loop)]
pub fn basic_loop_sum(values: &[u32]) -> u64 {
    let mut total = 0u64;
    for i in 0..values.len() {
        total += u64::from(values[i]);
    }
    total
}

/// Sums the elements of a slice in unrolled blocks of `step` elements.
///
/// The first `len - (len % step)` elements are processed in blocks of
/// `step` additions per outer iteration, reducing per-iteration control
/// overhead; the final `len % step` elements are accumulated by a tail
/// loop. The total is identical to [`basic_loop_sum`] for any input and any
/// step, since integer addition is associative and commutative.
///
/// ```
/// # use sumbench::unrolled_loop_sum;
/// # use std::num::NonZeroUsize;
/// let step = NonZeroUsize::new(4).unwrap();
/// assert_eq!(unrolled_loop_sum(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], step), 55);
/// ```
pub fn unrolled_loop_sum(values: &[u32], step: NonZeroUsize) -> u64 {
    let step = step.get();
    let remainder = values.len() % step;
    let split = values.len() - remainder;

    let mut total = 0u64;
    let mut i = 0;
    while i < split {
        for j in 0..step {
            total += u64::from(values[i + j]);
        }
        i += step;
    }

    // The last `len % step` elements.
    for &x in &values[split..] {
        total += u64::from(x);
    }

    total
}

/// Sums the elements of a slice via the iterator reduction.
///
/// This delegates to [`Iterator::sum()`], which the compiler autovectorizes
/// into SIMD code for this element type. Same total as the scalar
/// strategies.
///
/// ```
/// # use sumbench::vectorized_sum;
/// assert_eq!(vectorized_sum(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]), 55);
/// ```
pub fn vectorized_sum(values: &[u32]) -> u64 {
    values.iter().map(|&x| u64::from(x)).sum()
}
