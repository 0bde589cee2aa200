use std::io::{self, BufRead, Write};

use colored::Colorize;
use guess_the_number::entropy::system_source;
use guess_the_number::feedback::Feedback;
use guess_the_number::round::{RoundController, RoundStatus};

fn main() {
    env_logger::init();

    let mut controller = RoundController::new(system_source());

    println!("{}", "Guess the Number Game".bold());
    println!("I'm thinking of a number between 1 and 100.");
    println!("Type a guess, `restart` for a new round, or `quit` to leave.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(err) => {
                eprintln!("failed to read input: {err}");
                break;
            }
        }

        match line.trim() {
            "quit" | "exit" => break,
            "restart" => {
                controller.restart();
                println!("{}", "New round started.".cyan());
            }
            raw => {
                // The controller refuses guesses after a win on its own; this
                // is the CLI analog of disabling the guess button.
                if controller.status() == RoundStatus::Won {
                    println!("Round over. Type `restart` to play again or `quit` to leave.");
                    continue;
                }
                controller.update_input(raw);
                controller.submit_guess();
                if let Some(feedback) = controller.feedback() {
                    let text = feedback.to_string();
                    let rendered = match feedback {
                        Feedback::Correct { .. } => text.green().bold(),
                        Feedback::Invalid => text.red(),
                        _ => text.yellow(),
                    };
                    println!("{rendered}");
                }
                println!("Attempts: {}", controller.attempts());
            }
        }
    }
}
