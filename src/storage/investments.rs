//! Investment repository for JSON storage
//!
//! Manages loading and saving investments to investments.json. Investments
//! are append-only from the application's point of view; there is no edit
//! operation.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinZenError;
use crate::models::{Investment, InvestmentId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable investment data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct InvestmentData {
    investments: Vec<Investment>,
}

/// Repository for investment persistence
pub struct InvestmentRepository {
    path: PathBuf,
    data: RwLock<HashMap<InvestmentId, Investment>>,
}

impl InvestmentRepository {
    /// Create a new investment repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load investments from disk
    pub fn load(&self) -> Result<(), FinZenError> {
        let file_data: InvestmentData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FinZenError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for investment in file_data.investments {
            data.insert(investment.id, investment);
        }

        Ok(())
    }

    /// Save investments to disk
    pub fn save(&self) -> Result<(), FinZenError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinZenError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut investments: Vec<_> = data.values().cloned().collect();
        investments.sort_by(|a, b| b.date.cmp(&a.date));

        let file_data = InvestmentData { investments };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get all investments, newest first
    pub fn get_all(&self) -> Result<Vec<Investment>, FinZenError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinZenError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut investments: Vec<_> = data.values().cloned().collect();
        investments.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(investments)
    }

    /// Add a new investment
    pub fn add(&self, investment: Investment) -> Result<(), FinZenError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinZenError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(investment.id, investment);
        Ok(())
    }

    /// Delete an investment by ID
    pub fn delete(&self, id: InvestmentId) -> Result<(), FinZenError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinZenError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if data.remove(&id).is_none() {
            return Err(FinZenError::investment_not_found(id.to_string()));
        }
        Ok(())
    }
}
