//! Transaction CLI commands

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Subcommand};

use crate::config::Settings;
use crate::display::format_transaction_list;
use crate::error::{CoinbookError, CoinbookResult};
use crate::models::{EntryKind, Money, TransactionId};
use crate::services::TransactionService;
use crate::storage::Storage;

/// Arguments for recording a transaction
#[derive(Args)]
pub struct AddArgs {
    /// Entry kind: income or expense
    pub kind: String,

    /// Amount, e.g. "50" or "50.00"
    pub amount: String,

    /// Category name
    #[arg(short, long)]
    pub category: String,

    /// Note (defaults to the category name)
    #[arg(short, long)]
    pub note: Option<String>,

    /// Date (YYYY-MM-DD, defaults to now)
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add(AddArgs),

    /// List transactions, most recent first
    List {
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> CoinbookResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add(args) => handle_add_command(storage, settings, args)?,

        TransactionCommands::List { limit } => {
            let mut transactions = service.list()?;
            if let Some(limit) = limit {
                transactions.truncate(limit);
            }
            print!("{}", format_transaction_list(&transactions, &settings.currency));
        }

        TransactionCommands::Delete { id } => {
            let id: TransactionId = id
                .parse()
                .map_err(|_| CoinbookError::Validation(format!("Invalid transaction ID: {}", id)))?;

            if service.delete(id)? {
                println!("Transaction deleted.");
            } else {
                println!("No matching transaction; nothing deleted.");
            }
        }
    }

    Ok(())
}

/// Handle the top-level `add` shorthand
pub fn handle_add_command(
    storage: &Storage,
    settings: &Settings,
    args: AddArgs,
) -> CoinbookResult<()> {
    let kind: EntryKind = args.kind.parse().map_err(CoinbookError::Validation)?;

    let amount = Money::parse(&args.amount)
        .map_err(|e| CoinbookError::Validation(e.to_string()))?;

    let date = args.date.map(parse_date).transpose()?;

    let service = TransactionService::new(storage);
    let transaction = service.add(kind, amount, &args.category, args.note.as_deref(), date)?;

    println!(
        "Recorded {} {} in '{}' ({})",
        transaction.kind,
        transaction.amount.format_with_symbol(&settings.currency),
        transaction.category,
        transaction.id,
    );

    Ok(())
}

/// Parse a YYYY-MM-DD date into a UTC timestamp at midnight
fn parse_date(s: String) -> CoinbookResult<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| CoinbookError::Validation(format!("Invalid date '{}' (expected YYYY-MM-DD)", s)))?;

    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| CoinbookError::Validation(format!("Invalid date '{}'", s)))?;

    Ok(midnight.and_utc())
}
