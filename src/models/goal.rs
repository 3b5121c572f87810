//! Savings goal model
//!
//! A goal tracks progress toward a target amount by a deadline. Contributions
//! are clamped so the current amount never exceeds the target.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::GoalId;
use super::money::Money;

/// A savings goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// Goal name (e.g., "Emergency Fund")
    pub name: String,

    /// Target amount (positive)
    pub target: Money,

    /// Amount saved so far, in [0, target]
    pub current_amount: Money,

    /// Deadline for reaching the target
    pub deadline: NaiveDate,

    /// Days before the deadline to surface a reminder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_days: Option<u32>,
}

impl Goal {
    /// Create a new goal with nothing saved yet
    pub fn new(name: impl Into<String>, target: Money, deadline: NaiveDate) -> Self {
        Self {
            id: GoalId::new(),
            name: name.into(),
            target,
            current_amount: Money::zero(),
            deadline,
            reminder_days: None,
        }
    }

    /// Apply a contribution, clamping the result to [0, target]
    ///
    /// Returns the amount actually applied after clamping.
    pub fn contribute(&mut self, amount: Money) -> Money {
        let before = self.current_amount;
        let mut after = before + amount;
        if after > self.target {
            after = self.target;
        }
        if after.is_negative() {
            after = Money::zero();
        }
        self.current_amount = after;
        after - before
    }

    /// Fraction of the target reached, in [0, 1]
    pub fn progress(&self) -> f64 {
        if self.target.is_zero() {
            return 0.0;
        }
        self.current_amount.cents() as f64 / self.target.cents() as f64
    }

    /// Whether the target has been reached
    pub fn is_complete(&self) -> bool {
        self.current_amount >= self.target
    }

    /// Amount still needed to reach the target
    pub fn remaining(&self) -> Money {
        self.target - self.current_amount
    }

    /// Days until the deadline relative to a reference date
    /// (negative when past)
    pub fn days_until_deadline(&self, reference: NaiveDate) -> i64 {
        (self.deadline - reference).num_days()
    }

    /// Whether the reminder window covers the reference date: deadline in
    /// `reminder_days` days or fewer, target not yet reached, not past
    pub fn needs_reminder(&self, reference: NaiveDate) -> bool {
        if self.is_complete() {
            return false;
        }
        match self.reminder_days {
            Some(days) => (0..=days as i64).contains(&self.days_until_deadline(reference)),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal() -> Goal {
        Goal::new(
            "Emergency Fund",
            Money::from_cents(100_000),
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_contribute() {
        let mut g = goal();
        let applied = g.contribute(Money::from_cents(30_000));
        assert_eq!(applied.cents(), 30_000);
        assert_eq!(g.current_amount.cents(), 30_000);
        assert!(!g.is_complete());
    }

    #[test]
    fn test_contribute_clamps_at_target() {
        let mut g = goal();
        g.contribute(Money::from_cents(90_000));
        let applied = g.contribute(Money::from_cents(50_000));

        assert_eq!(applied.cents(), 10_000);
        assert_eq!(g.current_amount, g.target);
        assert!(g.is_complete());
        assert!(g.remaining().is_zero());
    }

    #[test]
    fn test_withdrawal_clamps_at_zero() {
        let mut g = goal();
        g.contribute(Money::from_cents(10_000));
        let applied = g.contribute(Money::from_cents(-25_000));

        assert_eq!(applied.cents(), -10_000);
        assert!(g.current_amount.is_zero());
    }

    #[test]
    fn test_needs_reminder_near_deadline() {
        let mut g = goal();
        g.reminder_days = Some(7);

        let far = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
        let near = NaiveDate::from_ymd_opt(2025, 12, 28).unwrap();
        assert!(!g.needs_reminder(far));
        assert!(g.needs_reminder(near));

        // A completed goal never reminds
        g.contribute(Money::from_cents(100_000));
        assert!(!g.needs_reminder(near));
    }

    #[test]
    fn test_progress() {
        let mut g = goal();
        assert_eq!(g.progress(), 0.0);
        g.contribute(Money::from_cents(25_000));
        assert!((g.progress() - 0.25).abs() < f64::EPSILON);
    }
}
