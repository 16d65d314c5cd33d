// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Timing harness.

use crate::macros::log_debug;
use std::hint::black_box;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

/// Number of back-to-back runs averaged by default.
pub const DEFAULT_NUM_RUNS: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(n) => n,
    None => unreachable!(),
};

/// Invokes `f` exactly `num_runs` times back-to-back and returns the mean
/// wall-clock duration of one invocation.
///
/// The result of each invocation is passed through
/// [`black_box`](std::hint::black_box) and then discarded: only timing
/// matters, but the computation must not be optimized away. A panic in `f`
/// propagates; there are no retries.
pub fn measure_mean<R>(mut f: impl FnMut() -> R, num_runs: NonZeroUsize) -> Duration {
    let mut total = Duration::ZERO;
    for _run in 0..num_runs.get() {
        let start = Instant::now();
        black_box(f());
        let elapsed = start.elapsed();
        log_debug!("Run #{_run}: {elapsed:?}");
        total += elapsed;
    }
    total.div_f64(num_runs.get() as f64)
}

/// Returns the percentage improvement of `candidate` over `baseline`,
/// computed as `(baseline - candidate) / baseline * 100` in seconds.
///
/// Positive values mean the candidate is faster, negative values mean a
/// regression. Returns [`f64::NAN`] when the baseline measures as exactly
/// zero, in which case the ratio is undefined.
pub fn improvement_percent(baseline: Duration, candidate: Duration) -> f64 {
    let baseline = baseline.as_secs_f64();
    if baseline == 0.0 {
        return f64::NAN;
    }
    (baseline - candidate.as_secs_f64()) / baseline * 100.0
}
