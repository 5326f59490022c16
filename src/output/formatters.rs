//! Formatting utilities for terminal output

/// Format letters as a spaced uppercase string, e.g. `S I L K`
#[must_use]
pub fn format_letters(letters: &[u8]) -> String {
    let mut result = String::with_capacity(letters.len() * 2);

    for (i, &ch) in letters.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(ch.to_ascii_uppercase() as char);
    }

    result
}

/// Format a score delta, e.g. `+400`
#[must_use]
pub fn format_points(points: u32) -> String {
    format!("+{points}")
}
