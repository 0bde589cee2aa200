use crate::entropy::EntropySource;

/// Deterministic source replaying a fixed sequence of raw values.
/// Lets tests pin the secret instead of mocking the whole controller.
pub struct FixedEntropy {
    values: Vec<u32>,
    cursor: usize,
}

impl FixedEntropy {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    pub fn constant(value: u32) -> Self {
        Self::new([value])
    }
}

impl EntropySource for FixedEntropy {
    fn name(&self) -> &str {
        "fixed"
    }

    fn description(&self) -> &str {
        "Replays a fixed sequence of raw values, cycling when exhausted."
    }

    fn next_value(&mut self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_cycles_through_its_sequence() {
        let mut source = FixedEntropy::new([1, 2, 3]);
        let drawn: Vec<u32> = (0..5).map(|_| source.next_value()).collect();
        assert_eq!(drawn, vec![1, 2, 3, 1, 2]);
    }

    #[test]
    fn test_empty_sequence_yields_zero() {
        let mut source = FixedEntropy::new(Vec::new());
        assert_eq!(source.next_value(), 0);
    }
}
