//! CSV export functionality
//!
//! Maps each record to the fixed four-column row Amount, Category,
//! Description, Date under a header row. Quoting and delimiters follow the
//! csv crate's defaults.

use std::io::Write;

use crate::error::ExpenseResult;
use crate::models::Expense;

/// Default name of the exported file
pub const DEFAULT_EXPORT_FILE: &str = "expenses.csv";

/// Date column format: ISO-8601 with millisecond precision
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Export the given records to CSV
///
/// The caller supplies the already-filtered sequence; this transform is
/// pure apart from writing to `writer`.
pub fn export_expenses_csv<W: Write>(expenses: &[&Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["Amount", "Category", "Description", "Date"])?;

    for expense in expenses {
        csv_writer.write_record([
            expense.amount.to_string(),
            expense.category.clone(),
            expense.description.clone(),
            expense.date.format(DATE_FORMAT).to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
