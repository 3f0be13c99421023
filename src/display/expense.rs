//! Expense display formatting
//!
//! Formats the record list for the terminal: creation date in local time
//! (per the configured date format), amount with the configured currency
//! symbol, category, and description.

use chrono::Local;

use crate::config::Settings;
use crate::models::Expense;

/// Format a single expense for display (list row)
pub fn format_expense_row(expense: &Expense, settings: &Settings) -> String {
    let local_date = expense
        .date
        .with_timezone(&Local)
        .format(&settings.date_format);
    let amount = format!("{}{}", settings.currency_symbol, expense.amount);

    format!(
        "{:12} {:>12} {:20} {}",
        local_date.to_string(),
        amount,
        truncate(&expense.category, 20),
        expense.description
    )
}

/// Format a list of expenses with a header
pub fn format_expense_list(expenses: &[&Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:>12} {:20} {}\n",
        "Date", "Amount", "Category", "Description"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, settings));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }

    let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}
