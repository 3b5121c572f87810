//! Expense filtering and aggregation
//!
//! Filters a set of expenses by category and date window, sorts the result,
//! and aggregates totals per category and overall.
//!
//! The "current date" is injected as a `reference_date` parameter rather than
//! read from the system clock, so window resolution is deterministic and
//! testable. All date comparisons are plain calendar-day comparisons on
//! `NaiveDate` — a stored date can never shift by a day due to timezone
//! conversion.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{Expense, Money};

/// Date window selecting which expenses to include
///
/// Both bounds are inclusive wherever they apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateWindow {
    /// No date constraint
    #[default]
    All,
    /// First through last calendar day of the reference month
    ThisMonth,
    /// Reference date minus 30 days through the reference date
    Last30Days,
    /// First through last day of the reference 3-month quarter
    ThisQuarter,
    /// Jan 1 through Dec 31 of the reference year
    ThisYear,
    /// Explicit bounds; either side may be left open
    Custom {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl DateWindow {
    /// Resolve the window to concrete (start, end) bounds for a reference date
    ///
    /// `None` means the bound is unconstrained.
    pub fn resolve(&self, reference: NaiveDate) -> (Option<NaiveDate>, Option<NaiveDate>) {
        match self {
            Self::All => (None, None),
            Self::ThisMonth => {
                let start = first_of_month(reference.year(), reference.month());
                (Some(start), Some(last_of_month(start)))
            }
            Self::Last30Days => (Some(reference - Duration::days(30)), Some(reference)),
            Self::ThisQuarter => {
                let quarter = (reference.month0()) / 3;
                let start = first_of_month(reference.year(), quarter * 3 + 1);
                let end_month_start = first_of_month(reference.year(), quarter * 3 + 3);
                (Some(start), Some(last_of_month(end_month_start)))
            }
            Self::ThisYear => (
                NaiveDate::from_ymd_opt(reference.year(), 1, 1),
                NaiveDate::from_ymd_opt(reference.year(), 12, 31),
            ),
            Self::Custom { start, end } => (*start, *end),
        }
    }

    /// Check whether a date falls inside the window
    pub fn contains(&self, date: NaiveDate, reference: NaiveDate) -> bool {
        let (start, end) = self.resolve(reference);
        if let Some(start) = start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = end {
            if date > end {
                return false;
            }
        }
        true
    }
}

impl FromStr for DateWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "all" | "always" => Ok(Self::All),
            "this-month" | "month" => Ok(Self::ThisMonth),
            "last-30-days" | "30d" => Ok(Self::Last30Days),
            "this-quarter" | "quarter" => Ok(Self::ThisQuarter),
            "this-year" | "year" => Ok(Self::ThisYear),
            other => Err(format!("Unknown date window: {}", other)),
        }
    }
}

/// Sort order for the filtered expense list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Most recent due date first (default)
    #[default]
    DueDateDesc,
    /// Oldest due date first
    DueDateAsc,
    /// Largest amount first
    AmountDesc,
    /// Smallest amount first
    AmountAsc,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "due-date-desc" | "newest" => Ok(Self::DueDateDesc),
            "due-date-asc" | "oldest" => Ok(Self::DueDateAsc),
            "amount-desc" | "highest" => Ok(Self::AmountDesc),
            "amount-asc" | "lowest" => Ok(Self::AmountAsc),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

/// Filter criteria for selecting expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Restrict to one category; `None` matches every category
    pub category: Option<String>,
    /// Date window the due date must fall in
    pub window: DateWindow,
    /// Sort order of the result
    pub sort: SortKey,
}

impl ExpenseFilter {
    /// Create a filter that matches everything, sorted by newest due date
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a single category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restrict to a date window
    pub fn window(mut self, window: DateWindow) -> Self {
        self.window = window;
        self
    }

    /// Set the sort order
    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Apply the filter to a set of expenses
    ///
    /// Returns the matching records (sorted), the per-category totals, and the
    /// grand total. Sorting is stable: records that compare equal keep their
    /// input order.
    pub fn apply(&self, expenses: &[Expense], reference_date: NaiveDate) -> FilteredExpenses {
        let mut matched: Vec<Expense> = expenses
            .iter()
            .filter(|exp| {
                let category_match = match &self.category {
                    Some(cat) => exp.category == *cat,
                    None => true,
                };
                category_match && self.window.contains(exp.due_date, reference_date)
            })
            .cloned()
            .collect();

        // Category totals keyed by first appearance, before sorting, so tie
        // ordering is reproducible from the input order
        let mut totals: HashMap<&str, Money> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();
        for exp in &matched {
            if !totals.contains_key(exp.category.as_str()) {
                order.push(exp.category.as_str());
            }
            *totals.entry(exp.category.as_str()).or_default() += exp.amount;
        }

        let mut by_category: Vec<CategoryTotal> = order
            .into_iter()
            .map(|name| CategoryTotal {
                category: name.to_string(),
                total: totals[name],
            })
            .collect();
        // Stable sort: ties keep first-appearance order
        by_category.sort_by(|a, b| b.total.cmp(&a.total));

        let total = matched.iter().map(|e| e.amount).sum();

        matched.sort_by(|a, b| match self.sort {
            SortKey::DueDateDesc => b.due_date.cmp(&a.due_date),
            SortKey::DueDateAsc => a.due_date.cmp(&b.due_date),
            SortKey::AmountDesc => b.amount.cmp(&a.amount),
            SortKey::AmountAsc => a.amount.cmp(&b.amount),
        });

        FilteredExpenses {
            expenses: matched,
            by_category,
            total,
        }
    }
}

/// Total amount for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category name
    pub category: String,
    /// Sum of matching amounts
    pub total: Money,
}

/// Result of applying an [`ExpenseFilter`]
#[derive(Debug, Clone)]
pub struct FilteredExpenses {
    /// Matching expenses in the requested sort order
    pub expenses: Vec<Expense>,
    /// Per-category totals, descending by total, ties by first appearance
    pub by_category: Vec<CategoryTotal>,
    /// Sum of all matching amounts
    pub total: Money,
}

/// First calendar day of a month
fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("month in 1..=12")
}

/// Last calendar day of the month that starts at `month_start`
fn last_of_month(month_start: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = if month_start.month() == 12 {
        (month_start.year() + 1, 1)
    } else {
        (month_start.year(), month_start.month() + 1)
    };
    first_of_month(next_year, next_month) - Duration::days(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(name: &str, cents: i64, category: &str, due: NaiveDate) -> Expense {
        Expense::new(name, Money::from_cents(cents), category, due)
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense("Rent", 10_000, "A", date(2025, 3, 1)),
            expense("Groceries", 5_000, "A", date(2025, 3, 15)),
            expense("Cinema", 20_000, "B", date(2025, 2, 10)),
        ]
    }

    #[test]
    fn test_all_window_all_categories_is_identity() {
        let expenses = sample();
        let result = ExpenseFilter::new().apply(&expenses, date(2025, 3, 20));

        assert_eq!(result.expenses.len(), expenses.len());
        let mut ids: Vec<_> = result.expenses.iter().map(|e| e.id).collect();
        let mut expected: Vec<_> = expenses.iter().map(|e| e.id).collect();
        ids.sort_by_key(|id| *id.as_uuid());
        expected.sort_by_key(|id| *id.as_uuid());
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_category_filter() {
        let expenses = sample();
        let result = ExpenseFilter::new()
            .category("A")
            .apply(&expenses, date(2025, 3, 20));

        assert_eq!(result.expenses.len(), 2);
        assert_eq!(result.total.cents(), 15_000);
    }

    #[test]
    fn test_this_month_excludes_other_months() {
        let expenses = sample();
        let result = ExpenseFilter::new()
            .window(DateWindow::ThisMonth)
            .apply(&expenses, date(2025, 3, 20));

        assert_eq!(result.expenses.len(), 2);
        assert!(result.expenses.iter().all(|e| e.due_date.month() == 3));
    }

    #[test]
    fn test_month_bounds_inclusive() {
        let window = DateWindow::ThisMonth;
        let reference = date(2025, 2, 10);
        assert!(window.contains(date(2025, 2, 1), reference));
        assert!(window.contains(date(2025, 2, 28), reference));
        assert!(!window.contains(date(2025, 3, 1), reference));
        assert!(!window.contains(date(2025, 1, 31), reference));
    }

    #[test]
    fn test_leap_year_february_end() {
        let (_, end) = DateWindow::ThisMonth.resolve(date(2024, 2, 5));
        assert_eq!(end, Some(date(2024, 2, 29)));
    }

    #[test]
    fn test_last_30_days() {
        let reference = date(2025, 3, 31);
        let window = DateWindow::Last30Days;
        assert!(window.contains(date(2025, 3, 1), reference));
        assert!(window.contains(reference, reference));
        assert!(!window.contains(date(2025, 2, 28), reference));
    }

    #[test]
    fn test_quarter_resolution() {
        // March is in Q1, April starts Q2
        assert_eq!(
            DateWindow::ThisQuarter.resolve(date(2025, 3, 10)),
            (Some(date(2025, 1, 1)), Some(date(2025, 3, 31)))
        );
        assert_eq!(
            DateWindow::ThisQuarter.resolve(date(2025, 4, 1)),
            (Some(date(2025, 4, 1)), Some(date(2025, 6, 30)))
        );
        assert_eq!(
            DateWindow::ThisQuarter.resolve(date(2025, 12, 31)),
            (Some(date(2025, 10, 1)), Some(date(2025, 12, 31)))
        );
    }

    #[test]
    fn test_custom_window_open_bounds() {
        let start_only = DateWindow::Custom {
            start: Some(date(2025, 3, 1)),
            end: None,
        };
        let reference = date(2025, 3, 20);
        assert!(start_only.contains(date(2099, 1, 1), reference));
        assert!(!start_only.contains(date(2025, 2, 28), reference));

        let end_only = DateWindow::Custom {
            start: None,
            end: Some(date(2025, 3, 1)),
        };
        assert!(end_only.contains(date(1990, 1, 1), reference));
        assert!(end_only.contains(date(2025, 3, 1), reference));
        assert!(!end_only.contains(date(2025, 3, 2), reference));
    }

    #[test]
    fn test_default_sort_is_newest_first() {
        let expenses = sample();
        let result = ExpenseFilter::new().apply(&expenses, date(2025, 3, 20));
        let dates: Vec<_> = result.expenses.iter().map(|e| e.due_date).collect();
        assert_eq!(
            dates,
            vec![date(2025, 3, 15), date(2025, 3, 1), date(2025, 2, 10)]
        );
    }

    #[test]
    fn test_amount_sort() {
        let expenses = sample();
        let result = ExpenseFilter::new()
            .sort(SortKey::AmountAsc)
            .apply(&expenses, date(2025, 3, 20));
        let amounts: Vec<_> = result.expenses.iter().map(|e| e.amount.cents()).collect();
        assert_eq!(amounts, vec![5_000, 10_000, 20_000]);
    }

    #[test]
    fn test_category_totals_sorted_desc_with_stable_ties() {
        let expenses = vec![
            expense("a", 100, "First", date(2025, 3, 1)),
            expense("b", 300, "Second", date(2025, 3, 2)),
            expense("c", 100, "Third", date(2025, 3, 3)),
        ];
        let result = ExpenseFilter::new().apply(&expenses, date(2025, 3, 20));
        let names: Vec<_> = result
            .by_category
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        // Second wins; First and Third tie at 100 and keep appearance order
        assert_eq!(names, vec!["Second", "First", "Third"]);
    }

    #[test]
    fn test_idempotent() {
        let expenses = sample();
        let filter = ExpenseFilter::new()
            .category("A")
            .window(DateWindow::ThisMonth)
            .sort(SortKey::AmountDesc);

        let first = filter.apply(&expenses, date(2025, 3, 20));
        let second = filter.apply(&expenses, date(2025, 3, 20));

        assert_eq!(first.total, second.total);
        assert_eq!(
            first.expenses.iter().map(|e| e.id).collect::<Vec<_>>(),
            second.expenses.iter().map(|e| e.id).collect::<Vec<_>>()
        );
        assert_eq!(first.by_category, second.by_category);
    }

    #[test]
    fn test_empty_input() {
        let result = ExpenseFilter::new()
            .window(DateWindow::ThisYear)
            .apply(&[], date(2025, 3, 20));
        assert!(result.expenses.is_empty());
        assert!(result.by_category.is_empty());
        assert!(result.total.is_zero());
    }

    #[test]
    fn test_window_from_str() {
        assert_eq!("this_month".parse::<DateWindow>().unwrap(), DateWindow::ThisMonth);
        assert_eq!("this-year".parse::<DateWindow>().unwrap(), DateWindow::ThisYear);
        assert_eq!("all".parse::<DateWindow>().unwrap(), DateWindow::All);
        assert!("fortnight".parse::<DateWindow>().is_err());
    }
}
