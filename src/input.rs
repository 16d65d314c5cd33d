// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Random input generation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

/// Number of elements generated by default.
pub const DEFAULT_INPUT_SIZE: usize = 10_000_000;

/// Smallest value an input element can take (inclusive).
pub const MIN_VALUE: u32 = 1;

/// Largest value an input element can take (exclusive).
pub const MAX_VALUE: u32 = 100;

/// Generates `size` integers uniformly distributed in
/// [[`MIN_VALUE`], [`MAX_VALUE`]).
///
/// With a seed, the generated input is reproducible across runs; without
/// one, the generator is drawn from OS entropy.
pub fn generate_input(size: usize, seed: Option<u64>) -> Vec<u32> {
    let mut rng = match seed {
        Some(seed) => ChaCha12Rng::seed_from_u64(seed),
        None => ChaCha12Rng::from_os_rng(),
    };
    (0..size).map(|_| rng.random_range(MIN_VALUE..MAX_VALUE)).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_size_and_range() {
        let values = generate_input(1000, None);
        assert_eq!(values.len(), 1000);
        assert!(values.iter().all(|&x| (MIN_VALUE..MAX_VALUE).contains(&x)));
    }

    #[test]
    fn test_empty() {
        assert!(generate_input(0, None).is_empty());
    }

    #[test]
    fn test_seed_is_reproducible() {
        assert_eq!(generate_input(100, Some(42)), generate_input(100, Some(42)));
    }
}
