//! Investment CLI commands

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_date;
use crate::error::{FinZenError, FinZenResult};
use crate::export::export_investments_csv;
use crate::models::{Investment, InvestmentKind};
use crate::storage::Storage;

use super::expense::{parse_amount, parse_date};

/// Investment subcommands
#[derive(Subcommand)]
pub enum InvestmentCommands {
    /// Record a new investment
    Add {
        /// Kind: fixed-income, variable-income, crypto, fixed-income-fund
        kind: String,
        /// Amount invested
        amount: String,
        /// Investment date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List recorded investments
    List {
        /// Export to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an investment command
pub fn handle_investment_command(
    storage: &Storage,
    settings: &Settings,
    cmd: InvestmentCommands,
) -> FinZenResult<()> {
    match cmd {
        InvestmentCommands::Add { kind, amount, date } => {
            let kind = kind
                .parse::<InvestmentKind>()
                .map_err(FinZenError::Validation)?;
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(s) => parse_date(&s)?,
                None => Local::now().date_naive(),
            };

            let investment = Investment::new(kind, amount, date);
            let id = investment.id;
            storage.investments.add(investment)?;
            storage.investments.save()?;
            println!("Recorded {} investment {}", kind, id);
        }

        InvestmentCommands::List { output } => {
            let investments = storage.investments.get_all()?;

            if let Some(path) = output {
                let file = File::create(&path)
                    .map_err(|e| FinZenError::Export(format!("Failed to create file: {}", e)))?;
                let mut writer = BufWriter::new(file);
                export_investments_csv(&investments, &mut writer)?;
                println!(
                    "Exported {} investments to {}",
                    investments.len(),
                    path.display()
                );
            } else if investments.is_empty() {
                println!("No investments recorded.");
            } else {
                println!("{:12} {:10} {:20} {:>12}", "ID", "Date", "Kind", "Amount");
                println!("{}", "-".repeat(58));
                for inv in &investments {
                    println!(
                        "{} {:10} {:20} {:>12}",
                        inv.id,
                        format_date(inv.date, &settings.date_format),
                        inv.kind.to_string(),
                        inv.amount.to_string()
                    );
                }
            }
        }
    }

    Ok(())
}
