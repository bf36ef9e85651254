//! Statistics CLI command
//!
//! One screen: the month's totals, the trailing 6-month trend, and the
//! expense and income breakdowns by category.

use clap::Args;

use crate::config::Settings;
use crate::display::{format_breakdown, format_totals, format_trend};
use crate::error::CoinbookResult;
use crate::models::EntryKind;
use crate::reports::{CategoryBreakdown, TotalsSummary, TrendReport};
use crate::storage::Storage;

use super::budget::parse_month_or_current;

/// Arguments for the stats command
#[derive(Args)]
pub struct StatsArgs {
    /// Month to report on (YYYY-MM, defaults to the current month)
    #[arg(short, long)]
    pub month: Option<String>,
}

/// Handle the stats command
pub fn handle_stats_command(
    storage: &Storage,
    settings: &Settings,
    args: StatsArgs,
) -> CoinbookResult<()> {
    let month = parse_month_or_current(args.month)?;
    let transactions = storage.transactions.get_all()?;

    println!("Statistics for {}", month);
    println!();

    let totals = TotalsSummary::for_month(&transactions, month);
    print!("{}", format_totals(&totals, &settings.currency));
    println!();

    let trend = TrendReport::generate(&transactions, month);
    print!("{}", format_trend(&trend, &settings.currency));
    println!();

    println!("Expenses by category:");
    let expenses = CategoryBreakdown::generate(&transactions, month, EntryKind::Expense);
    print!("{}", format_breakdown(&expenses, &settings.currency));
    println!();

    println!("Income by category:");
    let income = CategoryBreakdown::generate(&transactions, month, EntryKind::Income);
    print!("{}", format_breakdown(&income, &settings.currency));

    Ok(())
}
