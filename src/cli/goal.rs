//! Goal CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_goal_list;
use crate::error::{FinZenError, FinZenResult};
use crate::models::{Goal, GoalId, Money};
use crate::storage::Storage;

use super::expense::{parse_amount, parse_date};

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a new savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount
        target: String,
        /// Deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: String,
        /// Days before the deadline to be reminded
        #[arg(long)]
        reminder: Option<u32>,
    },

    /// List all goals with progress
    List,

    /// Contribute toward a goal (negative amounts withdraw)
    Contribute {
        /// Goal name or ID
        goal: String,
        /// Amount to add
        amount: String,
    },

    /// Delete a goal
    Delete {
        /// Goal name or ID
        goal: String,
    },
}

/// Handle a goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> FinZenResult<()> {
    match cmd {
        GoalCommands::Add {
            name,
            target,
            deadline,
            reminder,
        } => {
            let target = parse_amount(&target)?;
            if !target.is_positive() {
                return Err(FinZenError::Validation(
                    "Goal target must be positive".into(),
                ));
            }
            let deadline = parse_date(&deadline)?;

            let mut goal = Goal::new(name, target, deadline);
            goal.reminder_days = reminder;
            let id = goal.id;

            storage.goals.upsert(goal)?;
            storage.goals.save()?;
            println!("Added goal {}", id);
        }

        GoalCommands::List => {
            let goals = storage.goals.get_all()?;
            let today = Local::now().date_naive();
            print!("{}", format_goal_list(&goals, today, &settings.date_format));
        }

        GoalCommands::Contribute { goal, amount } => {
            let mut record = find_goal(storage, &goal)?;
            let amount = Money::parse(&amount)
                .map_err(|e| FinZenError::Validation(e.to_string()))?;

            let applied = record.contribute(amount);
            let name = record.name.clone();
            let complete = record.is_complete();

            storage.goals.upsert(record)?;
            storage.goals.save()?;

            println!("Applied {} to '{}'", applied, name);
            if complete {
                println!("Goal complete!");
            }
        }

        GoalCommands::Delete { goal } => {
            let record = find_goal(storage, &goal)?;
            storage.goals.delete(record.id)?;
            storage.goals.save()?;
            println!("Deleted goal {}", record.id);
        }
    }

    Ok(())
}

/// Resolve a goal by full UUID or exact name
fn find_goal(storage: &Storage, ident: &str) -> FinZenResult<Goal> {
    if let Ok(id) = ident.parse::<GoalId>() {
        if let Some(goal) = storage.goals.get(id)? {
            return Ok(goal);
        }
    }

    storage
        .goals
        .find_by_name(ident)?
        .ok_or_else(|| FinZenError::goal_not_found(ident))
}
