// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

fn main() {
    divan::main();
}

const LENGTHS: &[usize] = &[10_000, 100_000, 1_000_000];
const STEPS: &[usize] = &[4, 8];

/// Benchmarks of the individual summation strategies, on a seeded random
/// input so that all strategies see the same data.
mod strategies {
    use super::{LENGTHS, STEPS};
    use divan::counter::BytesCount;
    use divan::{black_box, Bencher};
    use std::num::NonZeroUsize;
    use sumbench::{basic_loop_sum, generate_input, unrolled_loop_sum, vectorized_sum};

    #[divan::bench(args = LENGTHS)]
    fn sum_basic(bencher: Bencher, len: usize) {
        let input = generate_input(len, Some(42));
        let input_slice = input.as_slice();
        bencher
            .counter(BytesCount::of_many::<u32>(len))
            .bench_local(|| basic_loop_sum(black_box(input_slice)))
    }

    #[divan::bench(consts = STEPS, args = LENGTHS)]
    fn sum_unrolled<const STEP: usize>(bencher: Bencher, len: usize) {
        let step = NonZeroUsize::new(STEP).unwrap();
        let input = generate_input(len, Some(42));
        let input_slice = input.as_slice();
        bencher
            .counter(BytesCount::of_many::<u32>(len))
            .bench_local(|| unrolled_loop_sum(black_box(input_slice), step))
    }

    #[divan::bench(args = LENGTHS)]
    fn sum_vectorized(bencher: Bencher, len: usize) {
        let input = generate_input(len, Some(42));
        let input_slice = input.as_slice();
        bencher
            .counter(BytesCount::of_many::<u32>(len))
            .bench_local(|| vectorized_sum(black_box(input_slice)))
    }
}
