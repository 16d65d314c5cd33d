// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![doc = include_str!("../README.md")]
#![forbid(missing_docs, unsafe_code)]

mod input;
mod macros;
mod measure;
mod pinning;
mod report;
mod sum;

pub use input::{generate_input, DEFAULT_INPUT_SIZE, MAX_VALUE, MIN_VALUE};
pub use measure::{improvement_percent, measure_mean, DEFAULT_NUM_RUNS};
pub use pinning::{pin_current_thread, CpuPinningPolicy};
pub use report::{write_report, Measurement, Strategy};
pub use sum::{basic_loop_sum, unrolled_loop_sum, vectorized_sum, DEFAULT_UNROLL_FACTORS};
