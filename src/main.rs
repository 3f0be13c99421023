use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_cli::cli::{handle_add, handle_categories, handle_export, handle_list};
use expense_cli::config::{paths::ExpensePaths, settings::Settings};
use expense_cli::export::DEFAULT_EXPORT_FILE;
use expense_cli::services::ExpenseBook;
use expense_cli::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Command-line expense tracker",
    long_about = "expense-cli records day-to-day expenses, keeps them in a \
                  single JSON document between runs, and can list, filter, \
                  and export them as CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new expense
    Add {
        /// Amount spent (e.g., "12.50")
        amount: String,
        /// Category label (free text, e.g., "Food")
        category: String,
        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List expenses, optionally filtered by category
    List {
        /// Only show expenses in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List the distinct categories seen so far
    Categories,

    /// Export expenses to a CSV file
    Export {
        /// Only export expenses in this category
        #[arg(short, long)]
        category: Option<String>,
        /// Output file path
        #[arg(short, long, default_value = DEFAULT_EXPORT_FILE)]
        output: PathBuf,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let store = ExpenseStore::new(paths.expenses_file());
    let mut book = ExpenseBook::open(store);

    match cli.command {
        Some(Commands::Add {
            amount,
            category,
            description,
        }) => {
            handle_add(&mut book, &settings, amount, category, description)?;
        }
        Some(Commands::List { category }) => {
            handle_list(&book, &settings, category)?;
        }
        Some(Commands::Categories) => {
            handle_categories(&book)?;
        }
        Some(Commands::Export { category, output }) => {
            handle_export(&book, category, output)?;
        }
        Some(Commands::Config) => {
            println!("expense-cli Configuration");
            println!("=========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data file:      {}", paths.expenses_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!();
            println!("Expenses recorded: {}", book.len());
        }
        None => {
            println!("expense-cli - Command-line expense tracker");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense add <amount> <category>' to record an expense.");
        }
    }

    Ok(())
}
