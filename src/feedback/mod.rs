// src/feedback/mod.rs

use std::fmt;

/// Outcome of a guess submission, shown to the player verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feedback {
    TooLow,
    TooHigh,
    Correct { attempts: u32 },
    Invalid,
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::TooLow => write!(f, "Too low! Try again."),
            Feedback::TooHigh => write!(f, "Too high! Try again."),
            Feedback::Correct { attempts } => write!(
                f,
                "Congratulations! You guessed the number in {} attempts.",
                attempts
            ),
            Feedback::Invalid => write!(f, "Please enter a number between 1 and 100."),
        }
    }
}

impl Feedback {
    pub fn is_win(&self) -> bool {
        matches!(self, Feedback::Correct { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_message_reports_attempt_count() {
        let msg = Feedback::Correct { attempts: 1 }.to_string();
        assert!(msg.contains("1 attempts"));
    }

    #[test]
    fn test_invalid_message_names_the_range() {
        let msg = Feedback::Invalid.to_string();
        assert!(msg.contains("between 1 and 100"));
    }
}
