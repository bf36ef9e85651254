use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use coinbook::cli::{
    handle_add_command, handle_budget_command, handle_category_command, handle_stats_command,
    handle_transaction_command, AddArgs, BudgetCommands, CategoryCommands, StatsArgs,
    TransactionCommands,
};
use coinbook::config::{paths::CoinbookPaths, settings::Settings};
use coinbook::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "coinbook",
    author = "Kaylee Beyene",
    version,
    about = "Local-first personal finance tracker for the command line",
    long_about = "coinbook records income and expense transactions, organizes them \
                  into categories, tracks monthly budgets, and shows aggregate \
                  statistics. Everything lives in plain JSON files on your machine."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a transaction (shorthand for 'transaction add')
    Add(AddArgs),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show statistics for a month
    Stats(StatsArgs),

    /// Erase all data and restore the default categories
    Reset {
        /// Actually perform the reset
        #[arg(long)]
        force: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = CoinbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // First run seeds the default categories; existing data is never touched
    initialize_storage(&paths)?;

    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Add(args)) => {
            handle_add_command(&storage, &settings, args)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Stats(args)) => {
            handle_stats_command(&storage, &settings, args)?;
        }
        Some(Commands::Reset { force }) => {
            if force {
                storage.reset_all()?;
                println!("All data erased. Default categories restored.");
            } else {
                println!("This erases every transaction, category, and budget.");
                println!("Run 'coinbook reset --force' to confirm.");
            }
        }
        Some(Commands::Config) => {
            println!("coinbook configuration");
            println!("======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency);
        }
        None => {
            println!("coinbook - local-first personal finance tracker");
            println!();
            println!("Run 'coinbook --help' for usage information.");
            println!("Run 'coinbook add expense 50 --category 餐饮' to record your first expense.");
        }
    }

    Ok(())
}
