//! Expense store
//!
//! Persists the full expense collection as a single JSON array in
//! `expenses.json`, loaded once at startup and rewritten in full after
//! every mutation.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::ExpenseResult;
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic};

/// Store bound to the persisted expenses document
///
/// The store is a thin read/write boundary: it owns no in-memory state.
/// The record collection is owned by [`crate::services::ExpenseBook`],
/// which calls [`ExpenseStore::save`] after each mutation.
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store bound to the given document path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the persisted document
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the persisted collection
    ///
    /// Fails soft, never raising to the caller:
    /// - a missing, unreadable, or unparseable document yields an empty
    ///   collection;
    /// - a parseable document that is not a top-level array is treated as
    ///   absent;
    /// - individual entries that do not match the record shape, fail
    ///   validation, or repeat an already-seen id are dropped.
    pub fn load(&self) -> Vec<Expense> {
        let raw: Vec<serde_json::Value> = match read_json(&self.path) {
            Ok(values) => values,
            Err(_) => return Vec::new(),
        };

        let mut seen_ids = HashSet::new();
        let mut expenses = Vec::with_capacity(raw.len());

        for value in raw {
            let expense: Expense = match serde_json::from_value(value) {
                Ok(expense) => expense,
                Err(_) => continue,
            };
            if expense.validate().is_err() {
                continue;
            }
            if !seen_ids.insert(expense.id) {
                continue;
            }
            expenses.push(expense);
        }

        expenses
    }

    /// Overwrite the persisted collection with the given records
    ///
    /// The write is atomic; insertion order is preserved verbatim.
    pub fn save(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        write_json_atomic(&self.path, &expenses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        (temp_dir, ExpenseStore::new(path))
    }

    fn test_expense(id: i64, category: &str) -> Expense {
        Expense::new(
            ExpenseId::from_millis(id),
            Decimal::new(1250, 2),
            category,
            "",
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let (_temp_dir, store) = create_test_store();

        let expenses = vec![
            test_expense(1, "Food"),
            test_expense(2, "Travel"),
            test_expense(3, "Food"),
        ];
        store.save(&expenses).unwrap();

        // Round-trip preserves every field and the insertion order
        let loaded = store.load();
        assert_eq!(loaded, expenses);

        // A second save/load cycle yields the same sequence again
        store.save(&loaded).unwrap();
        assert_eq!(store.load(), expenses);
    }

    #[test]
    fn test_load_corrupt_document_is_empty() {
        let (_temp_dir, store) = create_test_store();
        std::fs::write(store.path(), "{{{ not json").unwrap();

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_wrong_top_level_shape_is_empty() {
        let (_temp_dir, store) = create_test_store();
        std::fs::write(store.path(), r#"{"expenses": []}"#).unwrap();

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_drops_malformed_entries() {
        let (_temp_dir, store) = create_test_store();
        std::fs::write(
            store.path(),
            r#"[
                {"id": 1, "amount": 100.0, "category": "Food", "description": "Lunch", "date": "2024-01-01T00:00:00Z"},
                {"id": "not-a-number", "amount": 5.0, "category": "Food", "date": "2024-01-01T00:00:00Z"},
                {"id": 2, "amount": null, "category": "Food", "date": "2024-01-01T00:00:00Z"},
                {"id": 3, "amount": 5.0, "category": "", "date": "2024-01-01T00:00:00Z"},
                {"id": 4, "amount": -5.0, "category": "Food", "date": "2024-01-01T00:00:00Z"},
                {"id": 5, "amount": 7.0, "category": "Travel", "date": "2024-01-01T00:00:00Z"}
            ]"#,
        )
        .unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, ExpenseId::from_millis(1));
        assert_eq!(loaded[1].id, ExpenseId::from_millis(5));
    }

    #[test]
    fn test_load_drops_duplicate_ids() {
        let (_temp_dir, store) = create_test_store();
        std::fs::write(
            store.path(),
            r#"[
                {"id": 1, "amount": 100.0, "category": "Food", "date": "2024-01-01T00:00:00Z"},
                {"id": 1, "amount": 200.0, "category": "Travel", "date": "2024-01-02T00:00:00Z"}
            ]"#,
        )
        .unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].category, "Food");
    }

    #[test]
    fn test_save_overwrites_in_full() {
        let (_temp_dir, store) = create_test_store();

        store
            .save(&[test_expense(1, "Food"), test_expense(2, "Travel")])
            .unwrap();
        store.save(&[test_expense(3, "Rent")]).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].category, "Rent");
    }
}
