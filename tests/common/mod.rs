/*
 * Utility functions and consts used by the tests.
 *
 */

use rand::prelude::{Distribution, SmallRng};
use rand::SeedableRng;
use rand_distr::Zipf;

/// Size of the list of bytes used to test.
#[allow(dead_code)]
pub const SYMBOL_LIST_LENGTH: usize = 100_000;

/// Creates a sequence of `len` bytes whose values follow a Zipfian distribution with the given
/// exponent over the whole byte range, 0 being the most frequent.
#[allow(dead_code)]
pub fn get_zipfian_bytes(seed: u64, exponent: f64, len: usize) -> Vec<u8> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let distribution = Zipf::new(256, exponent).unwrap();

    (0..len)
        .map(|_| (distribution.sample(&mut rng) as usize - 1) as u8)
        .collect()
}

/// Sends the library logs to the test output.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
