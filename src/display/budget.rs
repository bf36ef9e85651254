//! Budget overview display formatting
//!
//! Renders utilization rows with a text progress bar and tier marker.

use crate::reports::{BudgetOverviewReport, BudgetTier};

const BAR_WIDTH: usize = 20;

/// Format the monthly budget overview
pub fn format_budget_overview(report: &BudgetOverviewReport, currency: &str) -> String {
    if report.rows.is_empty() {
        return format!(
            "No monthly budgets set for {}.\n\nRun 'coinbook budget set' to create one.",
            report.month
        );
    }

    let mut output = String::new();
    output.push_str(&format!("Budgets for {}\n\n", report.month));

    for row in &report.rows {
        let marker = match row.tier {
            BudgetTier::Critical => "OVER",
            BudgetTier::Warning => "WARN",
            BudgetTier::Normal => "ok",
        };

        output.push_str(&format!(
            "  {:<12} {} / {}  {} {:.0}% [{}]  ({})\n",
            row.category,
            row.spent.format_with_symbol(currency),
            row.amount.format_with_symbol(currency),
            progress_bar(row.percentage),
            row.percentage,
            marker,
            row.budget_id,
        ));
    }

    output.push('\n');
    output.push_str(&format!(
        "  Total budget:    {}\n",
        report.total_budget.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "  Total spent:     {}\n",
        report.total_spent.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "  Total remaining: {}\n",
        report.total_remaining.format_with_symbol(currency)
    ));

    output
}

/// Render a percentage as a fixed-width bar, capped at 100%
fn progress_bar(percentage: f64) -> String {
    let filled =
        ((percentage / 100.0 * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
