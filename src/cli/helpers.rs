//! Shared helper functions for CLI commands

/// Truncate a string to max_len, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// Format an average on the 0-20 scale for display
pub fn format_average(average: f64) -> String {
    format!("{:.2}/20", average)
}

/// Pass/fail label used across report sections
pub fn pass_label(passed: bool) -> &'static str {
    if passed {
        "✓ PASS"
    } else {
        "✗ FAIL"
    }
}
