//! Sources of randomness.
//!
//! Random formulas are generated from an explicit source of randomness, rather than some global source, so that a formula follows from a seed and nothing else.

mod minimal_pcg;

pub use minimal_pcg::MinimalPCG32;

/// A seed for a stream of randomness derived from some base seed and an index, e.g. the index of a block of clauses.
///
/// Derivation is a splitmix64 step, so nearby indices give unrelated seeds.
pub fn derived_seed(base: u64, index: u64) -> u64 {
    let mut z = base.wrapping_add(index.wrapping_add(1).wrapping_mul(0x9E3779B97F4A7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod derived_seed_tests {
    use super::*;

    #[test]
    fn derived_seeds_differ() {
        let seeds = (0..64).map(|index| derived_seed(42, index)).collect::<Vec<_>>();
        for (i, a) in seeds.iter().enumerate() {
            for b in seeds.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert_eq!(derived_seed(42, 3), derived_seed(42, 3));
        assert_ne!(derived_seed(42, 3), derived_seed(43, 3));
    }
}
