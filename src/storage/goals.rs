//! Goal repository for JSON storage
//!
//! Manages loading and saving savings goals to goals.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinZenError;
use crate::models::{Goal, GoalId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable goal data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct GoalData {
    goals: Vec<Goal>,
}

/// Repository for goal persistence
pub struct GoalRepository {
    path: PathBuf,
    data: RwLock<HashMap<GoalId, Goal>>,
}

impl GoalRepository {
    /// Create a new goal repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load goals from disk
    pub fn load(&self) -> Result<(), FinZenError> {
        let file_data: GoalData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FinZenError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for goal in file_data.goals {
            data.insert(goal.id, goal);
        }

        Ok(())
    }

    /// Save goals to disk
    pub fn save(&self) -> Result<(), FinZenError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinZenError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut goals: Vec<_> = data.values().cloned().collect();
        goals.sort_by(|a, b| a.deadline.cmp(&b.deadline));

        let file_data = GoalData { goals };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a goal by ID
    pub fn get(&self, id: GoalId) -> Result<Option<Goal>, FinZenError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinZenError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Find a goal by name (exact match)
    pub fn find_by_name(&self, name: &str) -> Result<Option<Goal>, FinZenError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinZenError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.values().find(|g| g.name == name).cloned())
    }

    /// Get all goals, nearest deadline first
    pub fn get_all(&self) -> Result<Vec<Goal>, FinZenError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinZenError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut goals: Vec<_> = data.values().cloned().collect();
        goals.sort_by(|a, b| a.deadline.cmp(&b.deadline));
        Ok(goals)
    }

    /// Insert or update a goal
    pub fn upsert(&self, goal: Goal) -> Result<(), FinZenError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinZenError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(goal.id, goal);
        Ok(())
    }

    /// Delete a goal by ID
    pub fn delete(&self, id: GoalId) -> Result<(), FinZenError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinZenError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if data.remove(&id).is_none() {
            return Err(FinZenError::goal_not_found(id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_upsert_find_reload() {
        let temp_dir = TempDir::new().unwrap();
        let repo = GoalRepository::new(temp_dir.path().join("goals.json"));
        repo.load().unwrap();

        let goal = Goal::new(
            "Vacation",
            Money::from_cents(500_000),
            NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
        );
        repo.upsert(goal).unwrap();
        repo.save().unwrap();

        repo.load().unwrap();
        let found = repo.find_by_name("Vacation").unwrap().unwrap();
        assert_eq!(found.target.cents(), 500_000);
        assert!(repo.find_by_name("Car").unwrap().is_none());
    }

    #[test]
    fn test_get_all_sorted_by_deadline() {
        let temp_dir = TempDir::new().unwrap();
        let repo = GoalRepository::new(temp_dir.path().join("goals.json"));
        repo.load().unwrap();

        repo.upsert(Goal::new(
            "Later",
            Money::from_cents(1000),
            NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
        ))
        .unwrap();
        repo.upsert(Goal::new(
            "Sooner",
            Money::from_cents(1000),
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        ))
        .unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all[0].name, "Sooner");
    }
}
