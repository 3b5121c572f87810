//! Expense CLI commands
//!
//! Implements CLI commands for expense management and filtered listings.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_category_totals, format_expense_list};
use crate::engine::{DateWindow, ExpenseFilter, SortKey};
use crate::error::{FinZenError, FinZenResult};
use crate::export::export_expenses_csv;
use crate::models::{Expense, Money};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Expense name
        name: String,
        /// Amount (e.g., "120.50")
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Due date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        due: Option<String>,
        /// Days before the due date to be reminded
        #[arg(long)]
        reminder: Option<u32>,
    },

    /// List expenses with optional filters
    List {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,

        /// Date window: all, this-month, last-30-days, this-quarter, this-year
        #[arg(short, long)]
        window: Option<String>,

        /// Custom window start (YYYY-MM-DD); overrides --window
        #[arg(long)]
        from: Option<String>,

        /// Custom window end (YYYY-MM-DD); overrides --window
        #[arg(long)]
        to: Option<String>,

        /// Sort order: newest, oldest, highest, lowest
        #[arg(short, long)]
        sort: Option<String>,

        /// Show per-category totals instead of individual expenses
        #[arg(long)]
        by_category: bool,

        /// Export the filtered set to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Edit an expense
    Edit {
        /// Expense ID (full or short form) or name
        expense: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID (full or short form) or name
        expense: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> FinZenResult<()> {
    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            category,
            due,
            reminder,
        } => {
            let amount = parse_amount(&amount)?;
            let due_date = match due {
                Some(s) => parse_date(&s)?,
                None => Local::now().date_naive(),
            };

            let mut expense = Expense::new(name, amount, category, due_date);
            expense.reminder_days = reminder;
            let id = expense.id;

            storage.expenses.upsert(expense)?;
            storage.expenses.save()?;
            println!("Added expense {}", id);
        }

        ExpenseCommands::List {
            category,
            window,
            from,
            to,
            sort,
            by_category,
            output,
        } => {
            let window = resolve_window(window.as_deref(), from.as_deref(), to.as_deref())?;
            let sort = match sort {
                Some(s) => s
                    .parse::<SortKey>()
                    .map_err(FinZenError::Validation)?,
                None => SortKey::default(),
            };

            let mut filter = ExpenseFilter::new().window(window).sort(sort);
            if let Some(cat) = category {
                filter = filter.category(cat);
            }

            let reference = Local::now().date_naive();
            let filtered = filter.apply(&storage.expenses.get_all()?, reference);

            if let Some(path) = output {
                let file = File::create(&path)
                    .map_err(|e| FinZenError::Export(format!("Failed to create file: {}", e)))?;
                let mut writer = BufWriter::new(file);
                export_expenses_csv(&filtered.expenses, &mut writer)?;
                println!("Exported {} expenses to {}", filtered.expenses.len(), path.display());
            } else if by_category {
                print!("{}", format_category_totals(&filtered.by_category));
            } else {
                print!(
                    "{}",
                    format_expense_list(&filtered, reference, &settings.date_format)
                );
            }
        }

        ExpenseCommands::Edit {
            expense,
            name,
            amount,
            category,
            due,
        } => {
            let mut record = find_expense(storage, &expense)?;

            if let Some(name) = name {
                record.name = name;
            }
            if let Some(amount) = amount {
                record.amount = parse_amount(&amount)?;
            }
            if let Some(category) = category {
                record.category = category;
            }
            if let Some(due) = due {
                record.due_date = parse_date(&due)?;
            }
            record.touch();

            let id = record.id;
            storage.expenses.upsert(record)?;
            storage.expenses.save()?;
            println!("Updated expense {}", id);
        }

        ExpenseCommands::Delete { expense } => {
            let record = find_expense(storage, &expense)?;
            storage.expenses.delete(record.id)?;
            storage.expenses.save()?;
            println!("Deleted expense {}", record.id);
        }
    }

    Ok(())
}

/// Parse a YYYY-MM-DD date string
pub fn parse_date(s: &str) -> FinZenResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| FinZenError::Validation(format!("Invalid date (expected YYYY-MM-DD): {}", s)))
}

/// Parse a non-negative money amount
pub fn parse_amount(s: &str) -> FinZenResult<Money> {
    let amount =
        Money::parse(s).map_err(|e| FinZenError::Validation(e.to_string()))?;
    if amount.is_negative() {
        return Err(FinZenError::Validation(format!(
            "Amount must be non-negative: {}",
            s
        )));
    }
    Ok(amount)
}

/// Resolve a window from CLI flags
///
/// An explicit --from/--to pair takes precedence over a named window; an
/// unknown named window is rejected rather than silently widened.
fn resolve_window(
    window: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
) -> FinZenResult<DateWindow> {
    if from.is_some() || to.is_some() {
        let start = from.map(parse_date).transpose()?;
        let end = to.map(parse_date).transpose()?;
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(FinZenError::Validation(format!(
                    "Window start {} is after end {}",
                    start, end
                )));
            }
        }
        return Ok(DateWindow::Custom { start, end });
    }

    match window {
        Some(s) => s.parse::<DateWindow>().map_err(FinZenError::Validation),
        None => Ok(DateWindow::All),
    }
}

/// Resolve an expense by full UUID, short display id, or exact name
fn find_expense(storage: &Storage, ident: &str) -> FinZenResult<Expense> {
    if let Ok(id) = ident.parse::<crate::models::ExpenseId>() {
        if let Some(expense) = storage.expenses.get(id)? {
            return Ok(expense);
        }
    }

    let all = storage.expenses.get_all()?;
    let matches: Vec<_> = all
        .iter()
        .filter(|e| e.id.to_string() == ident || e.name == ident)
        .collect();

    match matches.len() {
        0 => Err(FinZenError::expense_not_found(ident)),
        1 => Ok(matches[0].clone()),
        _ => Err(FinZenError::Validation(format!(
            "Multiple expenses match '{}'; use the ID instead",
            ident
        ))),
    }
}
