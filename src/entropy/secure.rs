use crate::entropy::{EntropySource, FallbackEntropy};
use log::warn;

/// Cryptographically strong source backed by the operating system.
pub struct SecureEntropy;

impl SecureEntropy {
    /// Confirm the OS entropy pool is readable before committing to it.
    pub fn probe() -> Result<Self, getrandom::Error> {
        let mut buf = [0u8; 4];
        getrandom::getrandom(&mut buf)?;
        Ok(Self)
    }
}

impl EntropySource for SecureEntropy {
    fn name(&self) -> &str {
        "secure"
    }

    fn description(&self) -> &str {
        "Reads 32 bits from the operating system entropy pool."
    }

    fn next_value(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        match getrandom::getrandom(&mut buf) {
            Ok(()) => u32::from_le_bytes(buf),
            Err(err) => {
                // One-shot fallback for this draw, no retry against the OS.
                warn!("OS entropy read failed ({err}), falling back for this draw");
                FallbackEntropy::new().next_value()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::scale_to_range;

    #[test]
    fn test_probe_succeeds_on_host() {
        assert!(SecureEntropy::probe().is_ok());
    }

    #[test]
    fn test_secure_draws_stay_in_range() {
        let mut source = SecureEntropy;
        for _ in 0..10_000 {
            let secret = scale_to_range(source.next_value(), 1, 100);
            assert!((1..=100).contains(&secret));
        }
    }
}
