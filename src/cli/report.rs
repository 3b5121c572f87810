//! Score and projection CLI commands

use chrono::Local;
use clap::Args;

use crate::config::Settings;
use crate::display::{format_projection, format_score};
use crate::engine::{DateWindow, ExpenseFilter, Projection, ScoreBreakdown};
use crate::error::{FinZenError, FinZenResult};
use crate::storage::Storage;

/// Upper bound on projection length, to keep loop counts sane
const MAX_PROJECTION_YEARS: u32 = 100;

/// Arguments for the score command
#[derive(Args)]
pub struct ScoreArgs {
    /// Expense window to score against: this-month (default), last-30-days,
    /// this-quarter, this-year, all
    #[arg(short, long)]
    pub window: Option<String>,
}

/// Arguments for the project command
#[derive(Args)]
pub struct ProjectArgs {
    /// Starting amount
    pub principal: String,

    /// Contribution added every month
    #[arg(short, long, default_value = "0")]
    pub monthly: String,

    /// Annual interest rate in percent (e.g., 8 for 8%)
    #[arg(short, long)]
    pub rate: f64,

    /// Number of years to simulate
    #[arg(short, long)]
    pub years: u32,
}

/// Compute and print the Zen Score
pub fn handle_score_command(
    storage: &Storage,
    settings: &Settings,
    args: ScoreArgs,
) -> FinZenResult<()> {
    let window = match args.window {
        Some(s) => s.parse::<DateWindow>().map_err(FinZenError::Validation)?,
        None => DateWindow::ThisMonth,
    };

    let reference = Local::now().date_naive();
    let filtered = ExpenseFilter::new()
        .window(window)
        .apply(&storage.expenses.get_all()?, reference);
    let investments = storage.investments.get_all()?;

    let score = ScoreBreakdown::compute(
        settings.monthly_income.as_major(),
        filtered.total.as_major(),
        &investments,
    );

    print!("{}", format_score(&score));
    if settings.monthly_income.is_zero() {
        println!();
        println!("Tip: set your monthly income with 'finzen config --income <amount>'");
    }

    Ok(())
}

/// Run and print a compound growth projection
pub fn handle_project_command(settings: &Settings, args: ProjectArgs) -> FinZenResult<()> {
    if args.years > MAX_PROJECTION_YEARS {
        return Err(FinZenError::Validation(format!(
            "Years must be at most {}",
            MAX_PROJECTION_YEARS
        )));
    }

    let principal = super::expense::parse_amount(&args.principal)?;
    let monthly = super::expense::parse_amount(&args.monthly)?;

    match Projection::simulate(
        principal.as_major(),
        monthly.as_major(),
        args.rate,
        args.years,
    ) {
        Some(projection) => {
            print!("{}", format_projection(&projection, &settings.currency_symbol));
        }
        None => {
            println!("No projection possible: rate and years must both be positive.");
        }
    }

    Ok(())
}
