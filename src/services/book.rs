//! Expense book
//!
//! The application-state owner: holds the in-memory record collection,
//! performs the add operation, and persists the full collection through the
//! store after every mutation. Pure view computations are delegated to
//! [`super::view`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId};
use crate::services::view;
use crate::storage::ExpenseStore;

/// Draft input for the add operation
///
/// Mirrors the entry form: all fields arrive as text, and only presence of
/// amount and category is required for the operation to proceed.
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub amount: String,
    pub category: String,
    pub description: String,
}

/// Owns the expense collection and its persistence
pub struct ExpenseBook {
    expenses: Vec<Expense>,
    store: ExpenseStore,
}

impl ExpenseBook {
    /// Open the book, loading the persisted collection
    ///
    /// Loading fails soft: a missing or corrupt document starts an empty
    /// book rather than failing startup.
    pub fn open(store: ExpenseStore) -> Self {
        let expenses = store.load();
        Self { expenses, store }
    }

    /// All records, in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the book holds no records
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Records whose category equals `filter`; empty filter returns all
    pub fn filtered(&self, filter: &str) -> Vec<&Expense> {
        view::filter_by_category(&self.expenses, filter)
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<String> {
        view::unique_categories(&self.expenses)
    }

    /// Add an expense from draft input
    ///
    /// A draft missing the amount or the category is a no-op and returns
    /// `Ok(None)` without touching the collection. A present but
    /// non-numeric or non-positive amount is rejected with a validation
    /// error. On success the record is appended, the full collection is
    /// persisted, and the new record is returned.
    pub fn add(&mut self, draft: ExpenseDraft) -> ExpenseResult<Option<Expense>> {
        let amount_text = draft.amount.trim();
        let category = draft.category.trim();

        if amount_text.is_empty() || category.is_empty() {
            return Ok(None);
        }

        let amount: Decimal = amount_text.parse().map_err(|_| {
            ExpenseError::Validation(format!(
                "Invalid amount: '{}'. Use a decimal number like '12.50'",
                amount_text
            ))
        })?;

        let now = Utc::now();
        let expense = Expense::new(
            self.next_id(now),
            amount,
            category,
            draft.description.trim(),
            now,
        );
        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.expenses.push(expense.clone());
        self.store.save(&self.expenses)?;

        Ok(Some(expense))
    }

    /// Next record id: creation time in milliseconds, bumped past the
    /// current maximum when the clock collides with an existing id
    fn next_id(&self, now: DateTime<Utc>) -> ExpenseId {
        let candidate = ExpenseId::from_datetime(now);
        match self.expenses.iter().map(|e| e.id).max() {
            Some(last) if candidate <= last => last.succ(),
            _ => candidate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_book() -> (TempDir, ExpenseBook) {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.json"));
        (temp_dir, ExpenseBook::open(store))
    }

    fn draft(amount: &str, category: &str, description: &str) -> ExpenseDraft {
        ExpenseDraft {
            amount: amount.to_string(),
            category: category.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_add_appends_exactly_one_record() {
        let (_temp_dir, mut book) = create_test_book();

        let added = book.add(draft("12.50", "Food", "Lunch")).unwrap().unwrap();

        assert_eq!(book.len(), 1);
        assert_eq!(added.amount, Decimal::new(1250, 2));
        assert_eq!(added.category, "Food");
        assert_eq!(added.description, "Lunch");
    }

    #[test]
    fn test_add_assigns_unique_increasing_ids() {
        let (_temp_dir, mut book) = create_test_book();

        // Adds land within the same millisecond often enough that the
        // monotonic bump is what keeps these distinct.
        let first = book.add(draft("1", "Food", "")).unwrap().unwrap();
        let second = book.add(draft("2", "Food", "")).unwrap().unwrap();
        let third = book.add(draft("3", "Food", "")).unwrap().unwrap();

        assert!(first.id < second.id);
        assert!(second.id < third.id);
    }

    #[test]
    fn test_add_missing_amount_is_a_no_op() {
        let (_temp_dir, mut book) = create_test_book();

        assert!(book.add(draft("", "Food", "Lunch")).unwrap().is_none());
        assert!(book.add(draft("   ", "Food", "Lunch")).unwrap().is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_missing_category_is_a_no_op() {
        let (_temp_dir, mut book) = create_test_book();

        assert!(book.add(draft("12.50", "", "Lunch")).unwrap().is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_rejects_non_numeric_amount() {
        let (_temp_dir, mut book) = create_test_book();

        let err = book.add(draft("abc", "Food", "")).unwrap_err();
        assert!(err.is_validation());
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_rejects_non_positive_amount() {
        let (_temp_dir, mut book) = create_test_book();

        assert!(book.add(draft("0", "Food", "")).is_err());
        assert!(book.add(draft("-5", "Food", "")).is_err());
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_persists_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");

        let mut book = ExpenseBook::open(ExpenseStore::new(path.clone()));
        book.add(draft("100", "Food", "Lunch")).unwrap();
        book.add(draft("42", "Travel", "")).unwrap();

        let reopened = ExpenseBook::open(ExpenseStore::new(path));
        assert_eq!(reopened.expenses(), book.expenses());
    }

    #[test]
    fn test_filtered_and_categories_delegate_to_views() {
        let (_temp_dir, mut book) = create_test_book();

        book.add(draft("1", "Food", "")).unwrap();
        book.add(draft("2", "Travel", "")).unwrap();
        book.add(draft("3", "Food", "")).unwrap();

        assert_eq!(book.filtered("Food").len(), 2);
        assert_eq!(book.filtered("").len(), 3);
        assert_eq!(book.categories(), vec!["Food", "Travel"]);
    }

    #[test]
    fn test_open_with_corrupt_store_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        std::fs::write(&path, "not json").unwrap();

        let book = ExpenseBook::open(ExpenseStore::new(path));
        assert!(book.is_empty());
    }
}
