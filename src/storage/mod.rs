//! Storage layer for expense-cli
//!
//! Persists the full record collection as a single JSON document with
//! atomic writes.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseStore;
pub use file_io::{read_json, write_json_atomic};
