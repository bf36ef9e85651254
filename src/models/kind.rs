//! Entry kind shared by transactions, categories, and statistics
//!
//! Every transaction and category is either income or expense; the two-value
//! enumeration is closed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a record represents income or expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!(
                "Invalid entry kind '{}' (expected 'income' or 'expense')",
                other
            )),
        }
    }
}
