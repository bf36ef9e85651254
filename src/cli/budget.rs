//! Budget CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_budget_overview;
use crate::error::{CoinbookError, CoinbookResult};
use crate::models::{BudgetId, BudgetPeriod, Money, Month};
use crate::reports::BudgetOverviewReport;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show budget utilization for a month
    List {
        /// Month to report on (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Set a budget for a category
    Set {
        /// Category name
        category: String,

        /// Ceiling amount, e.g. "1000" or "1000.00"
        amount: String,

        /// Period: monthly or yearly
        #[arg(short, long, default_value = "monthly")]
        period: String,
    },

    /// Change the amount of an existing budget
    Update {
        /// Budget ID
        id: String,

        /// New ceiling amount
        amount: String,
    },

    /// Delete a budget
    Delete {
        /// Budget ID
        id: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> CoinbookResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::List { month } => {
            let month = parse_month_or_current(month)?;
            let budgets = storage.budgets.get_all()?;
            let transactions = storage.transactions.get_all()?;

            let report = BudgetOverviewReport::generate(&budgets, &transactions, month);
            print!("{}", format_budget_overview(&report, &settings.currency));
        }

        BudgetCommands::Set {
            category,
            amount,
            period,
        } => {
            let amount = Money::parse(&amount)
                .map_err(|e| CoinbookError::Validation(e.to_string()))?;
            let period: BudgetPeriod = period.parse().map_err(CoinbookError::Validation)?;

            let budget = service.add(&category, amount, period)?;
            println!(
                "Budget set: {} {} ({}, {})",
                budget.category,
                budget.amount.format_with_symbol(&settings.currency),
                budget.period,
                budget.id,
            );
        }

        BudgetCommands::Update { id, amount } => {
            let id: BudgetId = id
                .parse()
                .map_err(|_| CoinbookError::Validation(format!("Invalid budget ID: {}", id)))?;
            let amount = Money::parse(&amount)
                .map_err(|e| CoinbookError::Validation(e.to_string()))?;

            if service.update_amount(id, amount)? {
                println!("Budget updated.");
            } else {
                println!("No matching budget; nothing updated.");
            }
        }

        BudgetCommands::Delete { id } => {
            let id: BudgetId = id
                .parse()
                .map_err(|_| CoinbookError::Validation(format!("Invalid budget ID: {}", id)))?;

            if service.delete(id)? {
                println!("Budget deleted.");
            } else {
                println!("No matching budget; nothing deleted.");
            }
        }
    }

    Ok(())
}

/// Parse a YYYY-MM month argument, defaulting to the current month
pub(crate) fn parse_month_or_current(month: Option<String>) -> CoinbookResult<Month> {
    match month {
        Some(s) => s.parse().map_err(CoinbookError::Validation),
        None => Ok(Month::current()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month_or_current() {
        let month = parse_month_or_current(Some("2026-08".to_string())).unwrap();
        assert_eq!(month, Month::new(2026, 8).unwrap());

        assert!(parse_month_or_current(Some("next month".to_string())).is_err());
        assert_eq!(parse_month_or_current(None).unwrap(), Month::current());
    }
}
