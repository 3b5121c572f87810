//! Computational core of FinZen
//!
//! Three independent, stateless components: the Zen Score calculator, the
//! expense filter/aggregator, and the compound-growth projection. All three
//! are pure functions over plain data — no I/O, no clock reads, no shared
//! state — so every invocation with the same inputs yields the same outputs.

pub mod filter;
pub mod projection;
pub mod score;

pub use filter::{CategoryTotal, DateWindow, ExpenseFilter, FilteredExpenses, SortKey};
pub use projection::{Projection, ProjectionPoint};
pub use score::ScoreBreakdown;
