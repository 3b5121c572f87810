//! CSV Export functionality
//!
//! Exports expense and investment data to CSV format.

use std::io::Write;

use crate::error::{FinZenError, FinZenResult};
use crate::models::{Expense, Investment};

/// Escape a CSV field (quote when it contains a comma, quote, or newline)
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Export expenses to CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> FinZenResult<()> {
    writeln!(writer, "ID,Name,Category,Due Date,Amount")
        .map_err(|e| FinZenError::Export(e.to_string()))?;

    for expense in expenses {
        writeln!(
            writer,
            "{},{},{},{},{:.2}",
            expense.id.as_uuid(),
            escape(&expense.name),
            escape(&expense.category),
            expense.due_date.format("%Y-%m-%d"),
            expense.amount.as_major()
        )
        .map_err(|e| FinZenError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export investments to CSV
pub fn export_investments_csv<W: Write>(
    investments: &[Investment],
    writer: &mut W,
) -> FinZenResult<()> {
    writeln!(writer, "ID,Kind,Date,Amount").map_err(|e| FinZenError::Export(e.to_string()))?;

    for investment in investments {
        writeln!(
            writer,
            "{},{},{},{:.2}",
            investment.id.as_uuid(),
            investment.kind,
            investment.date.format("%Y-%m-%d"),
            investment.amount.as_major()
        )
        .map_err(|e| FinZenError::Export(e.to_string()))?;
    }

    Ok(())
}
