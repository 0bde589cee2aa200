// src/round/mod.rs

use std::cmp::Ordering;

use log::debug;

use crate::entropy::{EntropySource, scale_to_range};
use crate::feedback::Feedback;
use crate::validation::{MAX_GUESS, MIN_GUESS, is_accepted_input, parse_guess};

/// Round lifecycle. `Won` is terminal until a restart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
}

/// One play-through: a secret, the pending guess buffer, and progress so far.
#[derive(Debug)]
pub struct Round {
    secret: u32,
    pending_input: String,
    attempts: u32,
    status: RoundStatus,
    feedback: Option<Feedback>,
}

impl Round {
    fn new(secret: u32) -> Self {
        Self {
            secret,
            pending_input: String::new(),
            attempts: 0,
            status: RoundStatus::InProgress,
            feedback: None,
        }
    }
}

/// Owns the current round and drives it through the four game operations.
/// Randomness comes in through the `EntropySource` capability, so tests can
/// substitute a deterministic source.
pub struct RoundController {
    round: Round,
    entropy: Box<dyn EntropySource + Send + Sync>,
}

impl RoundController {
    pub fn new(mut entropy: Box<dyn EntropySource + Send + Sync>) -> Self {
        let secret = draw_secret(entropy.as_mut());
        Self {
            round: Round::new(secret),
            entropy,
        }
    }

    /// Draw a fresh secret in `MIN_GUESS..=MAX_GUESS`. No other state changes.
    pub fn generate_secret(&mut self) -> u32 {
        draw_secret(self.entropy.as_mut())
    }

    /// Accept raw text into the pending guess buffer if it is empty or all
    /// digits; anything else leaves the buffer at its previous value.
    /// Feedback is never touched here.
    pub fn update_input(&mut self, raw: &str) {
        if is_accepted_input(raw) {
            self.round.pending_input = raw.to_string();
        } else {
            debug!("rejected input {raw:?}, keeping {:?}", self.round.pending_input);
        }
    }

    /// Evaluate the pending guess. A no-op once the round is won.
    pub fn submit_guess(&mut self) {
        if self.round.status == RoundStatus::Won {
            return;
        }
        match parse_guess(&self.round.pending_input) {
            Err(reason) => {
                debug!("invalid guess {:?}: {reason}", self.round.pending_input);
                self.round.feedback = Some(Feedback::Invalid);
            }
            Ok(guess) => {
                self.round.attempts += 1;
                self.round.feedback = Some(match guess.cmp(&self.round.secret) {
                    Ordering::Less => Feedback::TooLow,
                    Ordering::Greater => Feedback::TooHigh,
                    Ordering::Equal => {
                        self.round.status = RoundStatus::Won;
                        Feedback::Correct {
                            attempts: self.round.attempts,
                        }
                    }
                });
            }
        }
    }

    /// Replace the round wholesale: fresh secret, everything else cleared.
    /// Always permitted, whatever the current status.
    pub fn restart(&mut self) {
        let secret = draw_secret(self.entropy.as_mut());
        self.round = Round::new(secret);
    }

    pub fn attempts(&self) -> u32 {
        self.round.attempts
    }

    pub fn status(&self) -> RoundStatus {
        self.round.status
    }

    pub fn pending_input(&self) -> &str {
        &self.round.pending_input
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.round.feedback.as_ref()
    }
}

fn draw_secret(entropy: &mut (dyn EntropySource + Send + Sync)) -> u32 {
    let secret = scale_to_range(entropy.next_value(), MIN_GUESS, MAX_GUESS);
    debug!("drew secret {secret} from {} source", entropy.name());
    secret
}
