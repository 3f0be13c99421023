//! Expense CLI commands
//!
//! Implements the add/list/categories commands.

use crate::config::Settings;
use crate::display::format_expense_list;
use crate::error::ExpenseResult;
use crate::services::{ExpenseBook, ExpenseDraft};

/// Handle the `add` command
///
/// The add operation itself silently ignores a draft with a missing amount
/// or category; the notice printed here is presentation only.
pub fn handle_add(
    book: &mut ExpenseBook,
    settings: &Settings,
    amount: String,
    category: String,
    description: Option<String>,
) -> ExpenseResult<()> {
    let draft = ExpenseDraft {
        amount,
        category,
        description: description.unwrap_or_default(),
    };

    match book.add(draft)? {
        Some(expense) => {
            println!(
                "Added expense: {}{} in '{}'",
                settings.currency_symbol, expense.amount, expense.category
            );
        }
        None => {
            println!("Nothing added: amount and category are required.");
        }
    }

    Ok(())
}

/// Handle the `list` command
pub fn handle_list(
    book: &ExpenseBook,
    settings: &Settings,
    category: Option<String>,
) -> ExpenseResult<()> {
    let filter = category.unwrap_or_default();
    let expenses = book.filtered(&filter);

    print!("{}", format_expense_list(&expenses, settings));

    Ok(())
}

/// Handle the `categories` command
pub fn handle_categories(book: &ExpenseBook) -> ExpenseResult<()> {
    let categories = book.categories();

    if categories.is_empty() {
        println!("No categories yet.");
        return Ok(());
    }

    for category in categories {
        println!("{}", category);
    }

    Ok(())
}
