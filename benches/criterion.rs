// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::mem::size_of;

const LENGTHS: &[usize] = &[10_000, 100_000, 1_000_000, 10_000_000];
const STEPS: &[usize] = &[4, 8];

fn sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");
    for len in LENGTHS {
        group.throughput(Throughput::Bytes((len * size_of::<u32>()) as u64));
        group.bench_with_input(BenchmarkId::new("basic_loop", len), len, strategies::basic);
        for &step in STEPS {
            group.bench_with_input(
                BenchmarkId::new(format!("unrolled@{step}"), len),
                len,
                |bencher, len| strategies::unrolled(bencher, step, len),
            );
        }
        group.bench_with_input(
            BenchmarkId::new("vectorized", len),
            len,
            strategies::vectorized,
        );
    }
    group.finish();
}

/// Benchmarks of the individual summation strategies, on a seeded random
/// input so that all strategies see the same data.
mod strategies {
    use criterion::{black_box, Bencher};
    use std::num::NonZeroUsize;
    use sumbench::{basic_loop_sum, generate_input, unrolled_loop_sum, vectorized_sum};

    pub fn basic(bencher: &mut Bencher, len: &usize) {
        let input = generate_input(*len, Some(42));
        let input_slice = input.as_slice();
        bencher.iter(|| basic_loop_sum(black_box(input_slice)));
    }

    pub fn unrolled(bencher: &mut Bencher, step: usize, len: &usize) {
        let step = NonZeroUsize::new(step).unwrap();
        let input = generate_input(*len, Some(42));
        let input_slice = input.as_slice();
        bencher.iter(|| unrolled_loop_sum(black_box(input_slice), step));
    }

    pub fn vectorized(bencher: &mut Bencher, len: &usize) {
        let input = generate_input(*len, Some(42));
        let input_slice = input.as_slice();
        bencher.iter(|| vectorized_sum(black_box(input_slice)));
    }
}

criterion_group!(benches, sum);
criterion_main!(benches);
