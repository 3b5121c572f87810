//! CLI command handlers for FinZen

pub mod expense;
pub mod goal;
pub mod investment;
pub mod report;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use investment::{handle_investment_command, InvestmentCommands};
pub use report::{
    handle_project_command, handle_score_command, ProjectArgs, ScoreArgs,
};
