//! Simple interactive CLI mode
//!
//! Text-based interactive game without TUI

use crate::core::{Session, Word};
use crate::dictionary::Dictionary;
use crate::output::formatters::format_letters;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<D: Dictionary>(start_words: &[Word], dictionary: D) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Word Scramble - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Spell words from the scrambled letters. Each letter can be used");
    println!("at most as many times as it appears. Words must be at least 3");
    println!("letters long, real, and not repeated.\n");
    println!("Commands: 'quit' to exit, 'new' for a new round\n");

    let mut rng = rand::rng();
    let mut session = Session::start(start_words, dictionary, &mut rng);
    print_round_header(&session);

    loop {
        let input = get_user_input("Enter your word")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session.new_round(start_words, &mut rng);
                println!("\n🔄 New round started!\n");
                print_round_header(&session);
                continue;
            }
            _ => {}
        }

        match session.submit(&input) {
            Ok(acceptance) => {
                if acceptance.key_word {
                    print_key_word_banner(&session);
                } else {
                    println!(
                        "{} {} (+{} points, total {})\n",
                        "✓".green().bold(),
                        acceptance.word.to_uppercase().bright_white().bold(),
                        acceptance.points.to_string().bright_yellow(),
                        session.round().score().to_string().bright_yellow().bold()
                    );
                }
            }
            Err(rejection) => {
                println!(
                    "{} {}: {}\n",
                    "✗".red().bold(),
                    rejection.title().red().bold(),
                    rejection.message()
                );
            }
        }
    }
}

fn print_round_header<D: Dictionary>(session: &Session<D>) {
    println!("────────────────────────────────────────────────────────────");
    println!(
        "Letters: {}",
        format_letters(session.round().shuffled_letters())
            .bright_yellow()
            .bold()
    );
    println!("Score:   {}", session.round().score());
    println!("────────────────────────────────────────────────────────────\n");
}

fn print_key_word_banner<D: Dictionary>(session: &Session<D>) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  C O N G R A T U L A T I O N !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());
    println!(
        "\n  You found the key word: {}",
        session.round().root().text().to_uppercase().bright_yellow().bold()
    );
    println!(
        "  +2000 points, total {}",
        session.round().score().to_string().bright_cyan().bold()
    );
    println!("\n  Keep going, or type 'new' for a fresh round.");
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
