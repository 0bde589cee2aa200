use crate::entropy::EntropySource;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// General-purpose pseudo-random source for hosts without usable OS entropy.
/// Seeded from the wall clock so it cannot depend on the entropy pool itself.
pub struct FallbackEntropy {
    rng: StdRng,
}

impl FallbackEntropy {
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or(0);
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for FallbackEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for FallbackEntropy {
    fn name(&self) -> &str {
        "fallback"
    }

    fn description(&self) -> &str {
        "Clock-seeded pseudo-random generator, used when OS entropy is unavailable."
    }

    fn next_value(&mut self) -> u32 {
        self.rng.next_u32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::scale_to_range;

    #[test]
    fn test_fallback_draws_stay_in_range() {
        let mut source = FallbackEntropy::new();
        for _ in 0..10_000 {
            let secret = scale_to_range(source.next_value(), 1, 100);
            assert!((1..=100).contains(&secret));
        }
    }

    #[test]
    fn test_fallback_covers_the_whole_range() {
        let mut source = FallbackEntropy::new();
        let mut seen = [false; 101];
        for _ in 0..100_000 {
            let secret = scale_to_range(source.next_value(), 1, 100) as usize;
            seen[secret] = true;
        }
        assert!(seen[1..=100].iter().all(|hit| *hit));
    }
}
