//! Service layer for expense-cli
//!
//! Holds the application state owner ([`ExpenseBook`]) and the pure
//! derivation functions computed over the record collection.

pub mod book;
pub mod view;

pub use book::{ExpenseBook, ExpenseDraft};
pub use view::{filter_by_category, unique_categories};
