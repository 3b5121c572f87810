use anyhow::Result;
use clap::{Parser, Subcommand};

use finzen_cli::cli::{
    handle_expense_command, handle_goal_command, handle_investment_command,
    handle_project_command, handle_score_command,
};
use finzen_cli::config::{paths::FinZenPaths, settings::Settings};
use finzen_cli::models::DEFAULT_CATEGORIES;
use finzen_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "finzen",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "FinZen tracks your expenses, investments, and savings goals, \
                  scores your financial health on a 0-100 scale, and projects \
                  compound growth of your investments."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(finzen_cli::cli::ExpenseCommands),

    /// Investment management commands
    #[command(subcommand, alias = "inv")]
    Investment(finzen_cli::cli::InvestmentCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(finzen_cli::cli::GoalCommands),

    /// Show your Zen Score (financial health, 0-100)
    Score(finzen_cli::cli::ScoreArgs),

    /// Project compound growth of an investment
    Project(finzen_cli::cli::ProjectArgs),

    /// Initialize FinZen data files
    Init,

    /// Show or update configuration
    Config {
        /// Set your monthly income (used by the score)
        #[arg(long)]
        income: Option<String>,

        /// Set the currency symbol
        #[arg(long)]
        currency: Option<String>,

        /// Set the date display format (strftime, e.g. "%d/%m/%Y")
        #[arg(long)]
        date_format: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinZenPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Investment(cmd)) => {
            handle_investment_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            handle_goal_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Score(args)) => {
            handle_score_command(&storage, &settings, args)?;
        }
        Some(Commands::Project(args)) => {
            handle_project_command(&settings, args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing FinZen at: {}", paths.base_dir().display());
            storage.save_all()?;
            settings.setup_completed = true;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Suggested expense categories:");
            for category in DEFAULT_CATEGORIES {
                println!("  - {}", category);
            }
            println!();
            println!("Set your monthly income with 'finzen config --income <amount>'.");
        }
        Some(Commands::Config {
            income,
            currency,
            date_format,
        }) => {
            let mut changed = false;
            if let Some(income) = income {
                settings.monthly_income = finzen_cli::models::Money::parse(&income)
                    .map_err(|e| anyhow::anyhow!("{}", e))?;
                changed = true;
            }
            if let Some(currency) = currency {
                settings.currency_symbol = currency;
                changed = true;
            }
            if let Some(date_format) = date_format {
                // Reject patterns chrono cannot render before storing them
                let sample = chrono::NaiveDate::from_ymd_opt(2000, 1, 1)
                    .ok_or_else(|| anyhow::anyhow!("invalid sample date"))?;
                let mut rendered = String::new();
                use std::fmt::Write as _;
                if write!(rendered, "{}", sample.format(&date_format)).is_err() {
                    anyhow::bail!("Invalid date format: {}", date_format);
                }
                settings.date_format = date_format;
                changed = true;
            }

            if changed {
                settings.save(&paths)?;
                println!("Settings saved.");
            } else {
                println!("FinZen Configuration");
                println!("====================");
                println!("Base directory: {}", paths.base_dir().display());
                println!("Data directory: {}", paths.data_dir().display());
                println!();
                println!("Settings:");
                println!(
                    "  Monthly income:  {}",
                    settings
                        .monthly_income
                        .format_with_symbol(&settings.currency_symbol)
                );
                println!("  Currency symbol: {}", settings.currency_symbol);
                println!("  Date format:     {}", settings.date_format);
            }
        }
        None => {
            println!("FinZen - Terminal-based personal finance tracker");
            println!();
            println!("Run 'finzen --help' for usage information.");
            println!("Run 'finzen score' to check your financial health.");
        }
    }

    Ok(())
}
