//! Expense model
//!
//! Represents a dated, categorized expense. Expenses are edited in place
//! (name, amount, category, and due date may all change) while the id stays
//! stable for the record's lifetime.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::Money;

/// Built-in expense categories offered at setup
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Housing",
    "Food",
    "Transport",
    "Health",
    "Leisure",
    "Education",
    "Bills",
    "Shopping",
    "Other",
];

/// A single expense record
///
/// Amounts are assumed non-negative; validation happens at the CLI boundary
/// before an expense is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Expense name (e.g., "Rent", "Groceries")
    pub name: String,

    /// Amount owed
    pub amount: Money,

    /// Category label
    pub category: String,

    /// Date the expense is due (local calendar day, no time component)
    pub due_date: NaiveDate,

    /// Days before the due date to surface a reminder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_days: Option<u32>,

    /// When the expense was created
    pub created_at: DateTime<Utc>,

    /// When the expense was last modified
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        due_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
            category: category.into(),
            due_date,
            reminder_days: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the expense as modified now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Days until this expense is due relative to a reference date
    /// (negative when overdue)
    pub fn days_until_due(&self, reference: NaiveDate) -> i64 {
        (self.due_date - reference).num_days()
    }

    /// Whether the reminder window covers the reference date: due in
    /// `reminder_days` days or fewer, but not overdue
    pub fn needs_reminder(&self, reference: NaiveDate) -> bool {
        match self.reminder_days {
            Some(days) => (0..=days as i64).contains(&self.days_until_due(reference)),
            None => false,
        }
    }
}
