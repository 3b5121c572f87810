//! Storage layer for FinZen
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod expenses;
pub mod file_io;
pub mod goals;
pub mod investments;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use goals::GoalRepository;
pub use investments::InvestmentRepository;

use crate::config::paths::FinZenPaths;
use crate::error::FinZenError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FinZenPaths,
    pub expenses: ExpenseRepository,
    pub investments: InvestmentRepository,
    pub goals: GoalRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FinZenPaths) -> Result<Self, FinZenError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            investments: InvestmentRepository::new(paths.investments_file()),
            goals: GoalRepository::new(paths.goals_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FinZenPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), FinZenError> {
        self.expenses.load()?;
        self.investments.load()?;
        self.goals.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), FinZenError> {
        self.expenses.save()?;
        self.investments.save()?;
        self.goals.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }
}
