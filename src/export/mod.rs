//! Export module for expense-cli
//!
//! Turns the (filtered) record sequence into spreadsheet-compatible CSV.

pub mod csv;

pub use self::csv::{export_expenses_csv, DEFAULT_EXPORT_FILE};
