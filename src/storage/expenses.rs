//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinZenError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk
    pub fn load(&self) -> Result<(), FinZenError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FinZenError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for expense in file_data.expenses {
            data.insert(expense.id, expense);
        }

        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), FinZenError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinZenError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        expenses.sort_by(|a, b| b.due_date.cmp(&a.due_date).then(b.created_at.cmp(&a.created_at)));

        let file_data = ExpenseData { expenses };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, FinZenError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinZenError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all expenses, newest due date first
    pub fn get_all(&self) -> Result<Vec<Expense>, FinZenError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinZenError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        expenses.sort_by(|a, b| b.due_date.cmp(&a.due_date));
        Ok(expenses)
    }

    /// Insert or update an expense
    pub fn upsert(&self, expense: Expense) -> Result<(), FinZenError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinZenError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(expense.id, expense);
        Ok(())
    }

    /// Delete an expense by ID
    pub fn delete(&self, id: ExpenseId) -> Result<(), FinZenError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinZenError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if data.remove(&id).is_none() {
            return Err(FinZenError::expense_not_found(id.to_string()));
        }
        Ok(())
    }

    /// Number of stored expenses
    pub fn count(&self) -> Result<usize, FinZenError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinZenError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}
