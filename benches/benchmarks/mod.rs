use rand::prelude::{Distribution, SmallRng};
use rand::SeedableRng;
use rand_distr::Zipf;

pub mod decoder;
pub mod encoder;
pub mod tree_building;

/// Size of the list of bytes used to bench.
const SYMBOL_LIST_LENGTH: usize = 1_000_000;

/// Bytes following a Zipfian distribution over the whole byte range.
fn get_symbols() -> Vec<u8> {
    let mut rng = SmallRng::seed_from_u64(0);
    let distribution = Zipf::new(256, 1.0).unwrap();

    (0..SYMBOL_LIST_LENGTH)
        .map(|_| (distribution.sample(&mut rng) as usize - 1) as u8)
        .collect()
}
