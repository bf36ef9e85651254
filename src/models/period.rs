//! Budget periods and calendar months
//!
//! Budgets are declared monthly or yearly, but all utilization math runs
//! against calendar months. `Month` is the value type the aggregation layer
//! filters and steps by.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The period a budget applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

impl FromStr for BudgetPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(format!(
                "Invalid budget period '{}' (expected 'monthly' or 'yearly')",
                other
            )),
        }
    }
}

/// A calendar month (year + month), e.g. "2026-08"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    /// Create a month, returning None if the month number is out of range
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The current calendar month in local time
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Check if a timestamp falls within this month
    pub fn contains(&self, date: &DateTime<Utc>) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The previous calendar month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The next calendar month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The trailing window of `n` months ending at this month (inclusive),
    /// oldest first
    pub fn trailing(&self, n: usize) -> Vec<Self> {
        let mut months = Vec::with_capacity(n);
        let mut current = *self;
        for _ in 0..n {
            months.push(current);
            current = current.prev();
        }
        months.reverse();
        months
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.len() != 2 {
            return Err(format!("Invalid month '{}' (expected YYYY-MM)", s));
        }

        let year: i32 = parts[0]
            .parse()
            .map_err(|_| format!("Invalid month '{}' (expected YYYY-MM)", s))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|_| format!("Invalid month '{}' (expected YYYY-MM)", s))?;

        Month::new(year, month).ok_or_else(|| format!("Month out of range in '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_contains() {
        let month = Month::new(2026, 8).unwrap();
        let inside = Utc.with_ymd_and_hms(2026, 8, 15, 12, 0, 0).unwrap();
        let outside = Utc.with_ymd_and_hms(2026, 7, 31, 23, 59, 59).unwrap();

        assert!(month.contains(&inside));
        assert!(!month.contains(&outside));
    }

    #[test]
    fn test_prev_wraps_year() {
        let jan = Month::new(2026, 1).unwrap();
        assert_eq!(jan.prev(), Month::new(2025, 12).unwrap());

        let aug = Month::new(2026, 8).unwrap();
        assert_eq!(aug.prev(), Month::new(2026, 7).unwrap());
    }

    #[test]
    fn test_next_wraps_year() {
        let dec = Month::new(2025, 12).unwrap();
        assert_eq!(dec.next(), Month::new(2026, 1).unwrap());
    }

    #[test]
    fn test_trailing_window() {
        let months = Month::new(2026, 2).unwrap().trailing(6);
        assert_eq!(months.len(), 6);
        assert_eq!(months[0], Month::new(2025, 9).unwrap());
        assert_eq!(months[5], Month::new(2026, 2).unwrap());
    }

    #[test]
    fn test_display_and_parse() {
        let month = Month::new(2026, 8).unwrap();
        assert_eq!(month.to_string(), "2026-08");
        assert_eq!("2026-08".parse::<Month>().unwrap(), month);
        assert!("2026-13".parse::<Month>().is_err());
        assert!("august".parse::<Month>().is_err());
    }

    #[test]
    fn test_period_parse() {
        assert_eq!(
            "monthly".parse::<BudgetPeriod>().unwrap(),
            BudgetPeriod::Monthly
        );
        assert_eq!(
            "Yearly".parse::<BudgetPeriod>().unwrap(),
            BudgetPeriod::Yearly
        );
        assert!("weekly".parse::<BudgetPeriod>().is_err());
    }

    #[test]
    fn test_period_serialization() {
        assert_eq!(
            serde_json::to_string(&BudgetPeriod::Monthly).unwrap(),
            "\"monthly\""
        );
        let period: BudgetPeriod = serde_json::from_str("\"yearly\"").unwrap();
        assert_eq!(period, BudgetPeriod::Yearly);
    }
}
