//! Display functions for command results

use super::formatters::{format_letters, format_points};
use crate::commands::CheckResult;
use colored::Colorize;

/// Print the result of a one-shot word check
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root:      {}  ({})",
        result.root.to_uppercase().bright_yellow().bold(),
        format_letters(result.root.as_bytes())
    );
    println!("Candidate: {}", result.candidate.to_uppercase().bright_white());
    println!("{}", "─".repeat(60).cyan());

    match &result.outcome {
        Ok(acceptance) if acceptance.key_word => {
            println!(
                "\n{} Key word! {} points",
                "✅".green(),
                format_points(acceptance.points).bright_cyan().bold()
            );
        }
        Ok(acceptance) => {
            println!(
                "\n{} Accepted: {} points",
                "✅".green(),
                format_points(acceptance.points).bright_yellow().bold()
            );
        }
        Err(rejection) => {
            println!(
                "\n{} {}: {}",
                "❌".red(),
                rejection.title().red().bold(),
                rejection.message()
            );
        }
    }
    println!();
}
