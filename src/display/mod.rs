//! Terminal display formatting for FinZen

pub mod expense;
pub mod goal;
pub mod summary;

pub use expense::{format_category_totals, format_expense_list, format_expense_row};
pub use goal::{format_goal_list, format_goal_row};
pub use summary::{format_projection, format_score};

/// Truncate a string to a maximum width, appending an ellipsis when cut
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

/// Format a date with a strftime pattern, falling back to ISO when the
/// pattern contains an unsupported specifier
pub fn format_date(date: chrono::NaiveDate, pattern: &str) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        out.clear();
        let _ = write!(out, "{}", date.format("%Y-%m-%d"));
    }
    out
}
