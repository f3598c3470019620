//! Terminal presentation helpers shared by the command handlers.

use console::style;

/// Print a horizontal separator of the given width.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Print a highlighted warning line.
pub fn warn_line(message: &str) {
    println!("{}", style(message).yellow());
}

/// Truncate a string to `max_length` characters, ellipsizing when needed.
pub fn truncate_string(s: &str, max_length: usize) -> String {
    if s.chars().count() <= max_length {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_length.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation_needed() {
        assert_eq!(truncate_string("short", 10), "short");
    }

    #[test]
    fn test_truncate_string_exact_length() {
        assert_eq!(truncate_string("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn test_truncate_string_adds_ellipsis() {
        assert_eq!(truncate_string("a rather long question", 10), "a rathe...");
    }
}
