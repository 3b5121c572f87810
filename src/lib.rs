//! FinZen - Terminal-based personal finance tracker
//!
//! This library provides the core functionality for FinZen: expense tracking
//! with filtered listings, investment records, savings goals, a 0-100
//! financial-health score, and compound-growth projections.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, investments, goals, money)
//! - `engine`: Pure computation (score, filtering/aggregation, projection)
//! - `storage`: JSON file storage layer
//! - `display`: Terminal formatting
//! - `export`: CSV export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use finzen_cli::engine::ScoreBreakdown;
//!
//! let score = ScoreBreakdown::compute(5000.0, 4000.0, &[]);
//! assert_eq!(score.total, 62);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod storage;

pub use error::{FinZenError, FinZenResult};
