//! Goal display formatting

use chrono::NaiveDate;

use crate::models::Goal;

use super::{format_date, truncate};

/// Format a single goal for display (list row with a progress bar)
pub fn format_goal_row(goal: &Goal, reference: NaiveDate, date_format: &str) -> String {
    let progress = goal.progress();
    let filled = (progress * 20.0).round() as usize;
    let bar = format!("[{}{}]", "#".repeat(filled), "-".repeat(20 - filled));

    let deadline = format_date(goal.deadline, date_format);
    let deadline_hint = if goal.needs_reminder(reference) {
        format!("(by {}, in {}d!)", deadline, goal.days_until_deadline(reference))
    } else {
        format!("(by {})", deadline)
    };

    format!(
        "{:12} {:20} {} {:>3.0}%  {} / {}  {}",
        goal.id.to_string(),
        truncate(&goal.name, 20),
        bar,
        progress * 100.0,
        goal.current_amount,
        goal.target,
        deadline_hint
    )
}

/// Format a list of goals
pub fn format_goal_list(goals: &[Goal], reference: NaiveDate, date_format: &str) -> String {
    if goals.is_empty() {
        return "No goals yet.\n".to_string();
    }

    let mut output = String::new();
    for goal in goals {
        output.push_str(&format_goal_row(goal, reference, date_format));
        output.push('\n');
    }
    output
}
