// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Formatting of measurement results.

use crate::measure::improvement_percent;
use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::time::Duration;

/// A summation strategy, as displayed in the report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Indexed loop with a single accumulator.
    BasicLoop,
    /// Manually unrolled loop.
    UnrolledLoop {
        /// Number of elements accumulated per unrolled block.
        factor: NonZeroUsize,
    },
    /// Iterator reduction vectorized by the compiler.
    Vectorized,
}

impl Strategy {
    /// Label used on the absolute timing lines.
    pub fn label(&self) -> String {
        match self {
            Strategy::BasicLoop => "Basic Loop".to_string(),
            Strategy::UnrolledLoop { factor } => format!("Unrolled Loop (Factor {factor})"),
            Strategy::Vectorized => "Vectorized (Iterator)".to_string(),
        }
    }

    /// Label used on the percentage improvement lines.
    pub fn short_label(&self) -> String {
        match self {
            Strategy::BasicLoop => "Basic Loop".to_string(),
            Strategy::UnrolledLoop { factor } => format!("Unrolled (Factor {factor})"),
            Strategy::Vectorized => "Vectorized (Iterator)".to_string(),
        }
    }
}

/// Mean timing of one strategy.
#[derive(Clone, Copy, Debug)]
pub struct Measurement {
    /// The strategy that was measured.
    pub strategy: Strategy,
    /// Mean wall-clock duration of one invocation.
    pub mean: Duration,
}

/// Writes the benchmark report: one absolute timing line per strategy
/// (baseline first), then each candidate's percentage improvement over the
/// baseline.
///
/// A baseline that measured as exactly zero renders the improvements as
/// `NaN` rather than raising.
pub fn write_report(
    w: &mut impl Write,
    baseline: &Measurement,
    candidates: &[Measurement],
) -> io::Result<()> {
    for m in std::iter::once(baseline).chain(candidates) {
        writeln!(
            w,
            "{}: Average Time: {:.6} seconds",
            m.strategy.label(),
            m.mean.as_secs_f64()
        )?;
    }

    writeln!(w)?;
    writeln!(w, "Performance Improvement:")?;
    for m in candidates {
        writeln!(
            w,
            "  {}: {:.2}%",
            m.strategy.short_label(),
            improvement_percent(baseline.mean, m.mean)
        )?;
    }

    Ok(())
}
