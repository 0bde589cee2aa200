// src/lib.rs

pub mod entropy;
pub mod feedback;
pub mod round;
pub mod validation;

pub use entropy::{EntropySource, FallbackEntropy, FixedEntropy, SecureEntropy, system_source};
pub use feedback::Feedback;
pub use round::{Round, RoundController, RoundStatus};
pub use validation::{GuessError, MAX_GUESS, MIN_GUESS};
