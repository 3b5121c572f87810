//! Export module for FinZen
//!
//! Provides CSV export of expense and investment data
//! (spreadsheet-compatible).

pub mod csv;

pub use csv::{export_expenses_csv, export_investments_csv};
