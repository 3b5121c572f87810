//! Core data models for FinZen
//!
//! This module contains the data structures that represent the domain:
//! expenses, investments, savings goals, money, and typed ids.

pub mod expense;
pub mod goal;
pub mod ids;
pub mod investment;
pub mod money;

pub use expense::{Expense, DEFAULT_CATEGORIES};
pub use goal::Goal;
pub use ids::{ExpenseId, GoalId, InvestmentId};
pub use investment::{Investment, InvestmentKind};
pub use money::Money;
