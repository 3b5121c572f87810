//! Zen Score calculation
//!
//! Produces a 0-100 financial-health score from income, total expenses, and
//! the set of recorded investments. The score is a weighted sum of three
//! sub-scores: savings rate, expense control, and investment diversification.
//!
//! Degenerate inputs (zero income, empty investments) score the corresponding
//! component as 0 rather than failing; there is no error path. Inputs are
//! assumed well-formed (finite, non-negative amounts) — validation belongs to
//! the caller.

use std::collections::HashSet;

use crate::models::{Investment, InvestmentKind};

/// Weight of the savings-rate component
pub const SAVINGS_WEIGHT: f64 = 0.50;
/// Weight of the expense-control component
pub const EXPENSE_WEIGHT: f64 = 0.30;
/// Weight of the diversification component
pub const DIVERSIFICATION_WEIGHT: f64 = 0.20;

/// Savings rate at or above this fraction of income earns the full sub-score
const TARGET_SAVINGS_RATE: f64 = 0.20;
/// Expense ratio at or below this fraction of income earns the full sub-score
const ACCEPTABLE_EXPENSE_RATIO: f64 = 0.5;

/// The computed score and its weighted components
///
/// Each sub-score is rounded independently for display; the total is rounded
/// from the sum of the unrounded components, so the displayed parts may not
/// add up to the total exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// Composite score in [0, 100]
    pub total: u8,
    /// Savings-rate component, in [0, 50]
    pub savings: u8,
    /// Expense-control component, in [0, 30]
    pub expense_control: u8,
    /// Diversification component, in [0, 20]
    pub diversification: u8,
}

impl ScoreBreakdown {
    /// Compute the Zen Score
    ///
    /// `income` and `total_expenses` are major currency units for a single
    /// period (typically the current month).
    pub fn compute(income: f64, total_expenses: f64, investments: &[Investment]) -> Self {
        // a. Savings rate (target: save 20% or more of income)
        let balance = income - total_expenses;
        let savings_rate = if income > 0.0 { balance / income } else { 0.0 };
        let savings = (savings_rate / TARGET_SAVINGS_RATE).clamp(0.0, 1.0) * SAVINGS_WEIGHT * 100.0;

        // b. Expense ratio (full marks at <= 50% of income, zero at >= 100%)
        // Zero income with any expenses counts as a ratio of 1.
        let expense_ratio = if income > 0.0 {
            total_expenses / income
        } else {
            1.0
        };
        let over_ceiling = (expense_ratio - ACCEPTABLE_EXPENSE_RATIO).max(0.0);
        let expense_control =
            (1.0 - over_ceiling / ACCEPTABLE_EXPENSE_RATIO).clamp(0.0, 1.0) * EXPENSE_WEIGHT * 100.0;

        // c. Diversification: distinct kinds held over the number of
        // recognized kinds
        let distinct_kinds: HashSet<InvestmentKind> =
            investments.iter().map(|i| i.kind).collect();
        let diversity = if investments.is_empty() {
            0.0
        } else {
            distinct_kinds.len() as f64 / InvestmentKind::COUNT as f64
        };
        let diversification = diversity * DIVERSIFICATION_WEIGHT * 100.0;

        Self {
            total: (savings + expense_control + diversification).round() as u8,
            savings: savings.round() as u8,
            expense_control: expense_control.round() as u8,
            diversification: diversification.round() as u8,
        }
    }
}
