//! Expense record model
//!
//! A single user-entered monetary event: amount, free-text category,
//! optional description, and creation timestamp. Records are immutable once
//! created; the collection only ever grows by appending.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;

/// A single expense record
///
/// Persisted as a JSON object with `amount` as a plain number and `date` as
/// an ISO-8601 string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, derived from the creation time
    pub id: ExpenseId,

    /// Amount spent (always positive)
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// Free-text category label
    pub category: String,

    /// Optional free-text description
    #[serde(default)]
    pub description: String,

    /// When the expense was recorded
    pub date: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense record
    pub fn new(
        id: ExpenseId,
        amount: Decimal,
        category: impl Into<String>,
        description: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            amount,
            category: category.into(),
            description: description.into(),
            date,
        }
    }

    /// Validate the record invariants
    ///
    /// Every record must carry a non-empty category and a positive amount.
    /// Applied both before appending and at the load boundary, where
    /// entries failing validation are dropped.
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }
        if self.amount <= Decimal::ZERO {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.amount,
            self.category
        )
    }
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyCategory,
    NonPositiveAmount(Decimal),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Category must not be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
