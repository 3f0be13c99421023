//! Pure view-state derivations
//!
//! These functions compute the filtered record list and the distinct
//! category set from the collection. They take the records by reference and
//! have no side effects.

use crate::models::Expense;

/// Records whose category equals `filter`, preserving original order
///
/// An empty filter means "no filter" and returns the full sequence.
pub fn filter_by_category<'a>(expenses: &'a [Expense], filter: &str) -> Vec<&'a Expense> {
    if filter.is_empty() {
        return expenses.iter().collect();
    }

    expenses
        .iter()
        .filter(|expense| expense.category == filter)
        .collect()
}

/// Distinct category values across all records, in first-seen order
///
/// Populates both the category listing and the filter choices.
pub fn unique_categories(expenses: &[Expense]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut categories = Vec::new();

    for expense in expenses {
        if seen.insert(expense.category.as_str()) {
            categories.push(expense.category.clone());
        }
    }

    categories
}
