//! Expense display formatting
//!
//! Provides utilities for formatting expenses and category totals for
//! terminal display.

use chrono::NaiveDate;

use crate::engine::{CategoryTotal, FilteredExpenses};
use crate::models::Expense;

use super::{format_date, truncate};

/// Format a single expense for display (list row)
pub fn format_expense_row(expense: &Expense, reference: NaiveDate, date_format: &str) -> String {
    let days = expense.days_until_due(reference);
    let mut due_hint = if days < 0 {
        format!("overdue {}d", -days)
    } else if days == 0 {
        "due today".to_string()
    } else {
        format!("in {}d", days)
    };
    if expense.needs_reminder(reference) {
        due_hint.push_str("  (reminder)");
    }

    format!(
        "{} {:10} {:24} {:14} {:>12}  {}",
        expense.id,
        format_date(expense.due_date, date_format),
        truncate(&expense.name, 24),
        truncate(&expense.category, 14),
        expense.amount.to_string(),
        due_hint
    )
}

/// Format a filtered expense set as a list with totals
pub fn format_expense_list(
    filtered: &FilteredExpenses,
    reference: NaiveDate,
    date_format: &str,
) -> String {
    if filtered.expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:24} {:14} {:>12}\n",
        "ID", "Due", "Name", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(82));
    output.push('\n');

    for expense in &filtered.expenses {
        output.push_str(&format_expense_row(expense, reference, date_format));
        output.push('\n');
    }

    output.push_str(&"-".repeat(82));
    output.push('\n');
    output.push_str(&format!(
        "{:>64} {:>12}\n",
        "Total:", filtered.total.to_string()
    ));

    output
}

/// Format per-category totals, largest first
pub fn format_category_totals(totals: &[CategoryTotal]) -> String {
    if totals.is_empty() {
        return "No spending to summarize.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:24} {:>12}\n", "Category", "Total"));
    output.push_str(&"-".repeat(37));
    output.push('\n');

    for row in totals {
        output.push_str(&format!(
            "{:24} {:>12}\n",
            truncate(&row.category, 24),
            row.total.to_string()
        ));
    }

    output
}
