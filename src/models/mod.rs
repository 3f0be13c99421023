//! Core data models for expense-cli
//!
//! This module contains the data structures that represent the expense
//! domain: the expense record and its identifier.

pub mod expense;
pub mod ids;

pub use expense::{Expense, ExpenseValidationError};
pub use ids::ExpenseId;
