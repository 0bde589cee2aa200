// src/validation/guess.rs

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

pub const MIN_GUESS: u32 = 1;
pub const MAX_GUESS: u32 = 100;

/// Why a submitted guess was rejected. Every variant is surfaced to the
/// player as the same invalid-input notice; the distinction exists for
/// logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("no guess entered")]
    Empty,
    #[error("guess is not a base-10 number")]
    NotANumber,
    #[error("guess must be between {MIN_GUESS} and {MAX_GUESS}")]
    OutOfRange,
}

fn digits_pattern() -> &'static Regex {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    DIGITS.get_or_init(|| Regex::new(r"^[0-9]*$").unwrap())
}

/// Whether raw input may replace the pending guess buffer.
/// Empty is allowed so the player can clear the field.
pub fn is_accepted_input(raw: &str) -> bool {
    digits_pattern().is_match(raw)
}

/// Parse a pending guess into a number in `MIN_GUESS..=MAX_GUESS`.
pub fn parse_guess(raw: &str) -> Result<u32, GuessError> {
    if raw.is_empty() {
        return Err(GuessError::Empty);
    }
    if !is_accepted_input(raw) {
        return Err(GuessError::NotANumber);
    }
    // All-digit input that overflows u32 is just a very out-of-range guess.
    let value: u32 = raw.parse().map_err(|_| GuessError::OutOfRange)?;
    if !(MIN_GUESS..=MAX_GUESS).contains(&value) {
        return Err(GuessError::OutOfRange);
    }
    Ok(value)
}
