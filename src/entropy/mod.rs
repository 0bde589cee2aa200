// src/entropy/mod.rs

use log::warn;

/// Trait that defines a pluggable randomness source for secret selection.
pub trait EntropySource {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    /// Produce one uniformly distributed 32-bit value.
    fn next_value(&mut self) -> u32;
}

/// Map a raw 32-bit value into `lo..=hi` by division scaling.
///
/// Computes `lo + floor(value * span / 2^32)`, which preserves whatever
/// uniformity the source has. Modulo reduction is deliberately not used.
pub fn scale_to_range(value: u32, lo: u32, hi: u32) -> u32 {
    let span = u64::from(hi - lo + 1);
    lo + ((u64::from(value) * span) >> 32) as u32
}

/// Pick the best available source: OS entropy when a probe read succeeds,
/// otherwise the general-purpose pseudo-random fallback.
pub fn system_source() -> Box<dyn EntropySource + Send + Sync> {
    match SecureEntropy::probe() {
        Ok(source) => Box::new(source),
        Err(err) => {
            warn!("OS entropy unavailable ({err}), using pseudo-random fallback");
            Box::new(FallbackEntropy::new())
        }
    }
}

pub mod fallback;
pub mod fixed;
pub mod secure;

pub use fallback::FallbackEntropy;
pub use fixed::FixedEntropy;
pub use secure::SecureEntropy;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_lowest_raw_value_maps_to_lo() {
        assert_eq!(scale_to_range(0, 1, 100), 1);
    }

    #[test]
    fn test_scale_highest_raw_value_maps_to_hi() {
        assert_eq!(scale_to_range(u32::MAX, 1, 100), 100);
    }

    #[test]
    fn test_scale_midpoint_lands_mid_range() {
        let mid = scale_to_range(u32::MAX / 2, 1, 100);
        assert!((49..=51).contains(&mid));
    }

    #[test]
    fn test_scale_single_value_range() {
        assert_eq!(scale_to_range(0, 7, 7), 7);
        assert_eq!(scale_to_range(u32::MAX, 7, 7), 7);
    }

    #[test]
    fn test_system_source_stays_in_range() {
        let mut source = system_source();
        for _ in 0..10_000 {
            let secret = scale_to_range(source.next_value(), 1, 100);
            assert!((1..=100).contains(&secret));
        }
    }
}
