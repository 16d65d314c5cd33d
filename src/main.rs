// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI driver comparing the summation strategies on one random input.

use clap::{Parser, ValueEnum};
use std::hint::black_box;
use std::io::{self, Write};
use std::num::NonZeroUsize;
use sumbench::{
    basic_loop_sum, generate_input, measure_mean, pin_current_thread, unrolled_loop_sum,
    vectorized_sum, write_report, CpuPinningPolicy, Measurement, Strategy, DEFAULT_INPUT_SIZE,
    DEFAULT_NUM_RUNS, DEFAULT_UNROLL_FACTORS,
};

fn main() -> io::Result<()> {
    #[cfg(feature = "log")]
    env_logger::init();

    let cli = Cli::parse();
    pin_current_thread(match cli.cpu_pinning {
        CpuPinningCli::No => CpuPinningPolicy::No,
        CpuPinningCli::IfSupported => CpuPinningPolicy::IfSupported,
        CpuPinningCli::Always => CpuPinningPolicy::Always,
    });

    let input = generate_input(cli.input_size, cli.seed);
    let input_slice = input.as_slice();

    let baseline = Measurement {
        strategy: Strategy::BasicLoop,
        mean: measure_mean(|| basic_loop_sum(black_box(input_slice)), cli.num_runs),
    };

    let mut candidates = Vec::with_capacity(cli.unroll_factors.len() + 1);
    for &factor in &cli.unroll_factors {
        candidates.push(Measurement {
            strategy: Strategy::UnrolledLoop { factor },
            mean: measure_mean(
                || unrolled_loop_sum(black_box(input_slice), factor),
                cli.num_runs,
            ),
        });
    }
    candidates.push(Measurement {
        strategy: Strategy::Vectorized,
        mean: measure_mean(|| vectorized_sum(black_box(input_slice)), cli.num_runs),
    });

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    write_report(&mut stdout, &baseline, &candidates)?;
    stdout.flush()
}

/// CLI tool comparing summation strategies on a large random array.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(version)]
struct Cli {
    /// Number of elements in the input array.
    #[arg(long, default_value_t = DEFAULT_INPUT_SIZE)]
    input_size: usize,

    /// Number of back-to-back runs averaged for each strategy.
    #[arg(long, default_value_t = DEFAULT_NUM_RUNS)]
    num_runs: NonZeroUsize,

    /// Unroll factors to benchmark, in order.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_UNROLL_FACTORS)]
    unroll_factors: Vec<NonZeroUsize>,

    /// Seed for the input generator. Defaults to OS entropy.
    #[arg(long)]
    seed: Option<u64>,

    /// Whether to pin the measuring thread to a CPU.
    #[arg(long, value_enum, default_value = "no")]
    cpu_pinning: CpuPinningCli,
}

/// Policy to pin the measuring thread to a CPU.
#[derive(ValueEnum, Clone, Debug, PartialEq, Eq)]
enum CpuPinningCli {
    /// Don't pin the measuring thread.
    No,
    /// Pin the measuring thread, if supported on this platform.
    IfSupported,
    /// Pin the measuring thread, panicking if unsupported.
    Always,
}
