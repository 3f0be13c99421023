//! CLI command for CSV export
//!
//! Writes the (optionally filtered) record list as CSV to a file.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::export_expenses_csv;
use crate::services::ExpenseBook;

/// Handle the `export` command
pub fn handle_export(
    book: &ExpenseBook,
    category: Option<String>,
    output: PathBuf,
) -> ExpenseResult<()> {
    let filter = category.unwrap_or_default();
    let expenses = book.filtered(&filter);

    let file = File::create(&output).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    export_expenses_csv(&expenses, &mut writer)?;

    println!("Exported {} expenses to: {}", expenses.len(), output.display());

    Ok(())
}
