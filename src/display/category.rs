//! Category display formatting

use crate::models::{Category, EntryKind};

/// Format categories as two sections, expense first
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    let mut output = String::new();

    for (kind, header) in [
        (EntryKind::Expense, "Expense categories"),
        (EntryKind::Income, "Income categories"),
    ] {
        let section: Vec<&Category> = categories.iter().filter(|c| c.kind == kind).collect();
        if section.is_empty() {
            continue;
        }

        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&format!("{}:\n", header));

        for category in section {
            let default_marker = if category.is_default { " (default)" } else { "" };
            let icon = category
                .icon
                .as_ref()
                .map(|i| format!(" [{}]", i))
                .unwrap_or_default();

            output.push_str(&format!(
                "  {}{}{}  ({})\n",
                category.name, icon, default_marker, category.id
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_category_list(&[]), "No categories found.");
    }

    #[test]
    fn test_sections_and_markers() {
        let categories = vec![
            Category::seed("餐饮", EntryKind::Expense),
            Category::new("书籍", EntryKind::Expense).with_icon("book"),
            Category::seed("工资", EntryKind::Income),
        ];

        let output = format_category_list(&categories);
        assert!(output.contains("Expense categories:"));
        assert!(output.contains("Income categories:"));
        assert!(output.contains("餐饮 (default)"));
        assert!(output.contains("书籍 [book]"));

        // Expense section comes first
        let expense_pos = output.find("Expense categories").unwrap();
        let income_pos = output.find("Income categories").unwrap();
        assert!(expense_pos < income_pos);
    }
}
