//! Transaction display formatting
//!
//! Formats the transaction register grouped by day, most recent first.

use crate::models::{EntryKind, Transaction};

/// Format transactions as a day-grouped register
pub fn format_transaction_list(transactions: &[Transaction], currency: &str) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.\n\nRun 'coinbook add' to record one.".to_string();
    }

    let mut output = String::new();
    let mut current_day = None;

    for txn in transactions {
        let day = txn.date.date_naive();
        if current_day != Some(day) {
            if current_day.is_some() {
                output.push('\n');
            }
            output.push_str(&format!("{}\n", day.format("%Y-%m-%d")));
            current_day = Some(day);
        }

        let sign = match txn.kind {
            EntryKind::Income => "+",
            EntryKind::Expense => "-",
        };

        output.push_str(&format!(
            "  {}  {:<12} {}{}  {}  ({})\n",
            txn.date.format("%H:%M"),
            txn.category,
            sign,
            txn.amount.format_with_symbol(currency),
            txn.note,
            txn.id,
        ));
    }

    output
}
