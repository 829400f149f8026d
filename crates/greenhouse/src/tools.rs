use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn generate_seed() -> u64 {
    rand::rng().random()
}

/// Deterministic RNG for a configured seed, random otherwise
///
/// # Returns
/// The RNG and the seed it was built from
pub fn seeded_rng(seed: Option<u64>) -> (StdRng, u64) {
    let seed = seed.unwrap_or_else(generate_seed);
    (StdRng::seed_from_u64(seed), seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let (mut a, seed_a) = seeded_rng(Some(11));
        let (mut b, seed_b) = seeded_rng(Some(11));

        assert_eq!(seed_a, 11);
        assert_eq!(seed_a, seed_b);
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }
}
