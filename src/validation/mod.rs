// src/validation/mod.rs

pub mod guess;
pub use guess::{GuessError, MAX_GUESS, MIN_GUESS, is_accepted_input, parse_guess};
