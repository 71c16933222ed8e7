//! CSV and JSON export of transaction lists for download.

use std::io::Write;

use serde::Serialize;

use crate::{
    Error,
    report::total_by_kind,
    transaction::{Transaction, TransactionKind},
};

/// Counts and totals computed over an exported transaction list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    /// How many transactions were exported.
    pub transaction_count: usize,
    /// Total income across the exported transactions.
    pub total_income: f64,
    /// Total expenses across the exported transactions.
    pub total_expenses: f64,
    /// Income minus expenses.
    pub net_income: f64,
}

/// Compute the summary block for an export of `transactions`.
pub fn export_summary(transactions: &[Transaction]) -> ExportSummary {
    let total_income = total_by_kind(transactions, TransactionKind::Income);
    let total_expenses = total_by_kind(transactions, TransactionKind::Expense);

    ExportSummary {
        transaction_count: transactions.len(),
        total_income,
        total_expenses,
        net_income: total_income - total_expenses,
    }
}

/// Write `transactions` as RFC 4180 CSV to `writer`.
///
/// The output is a header row followed by one flattened row per
/// transaction. Quoting and escaping follow RFC 4180 so the file is safe
/// for spreadsheet consumers.
///
/// # Errors
/// This function will return a [Error::CsvWrite] if writing fails.
pub fn write_csv<W: Write>(transactions: &[Transaction], writer: W) -> Result<(), Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["id", "description", "amount", "type", "category", "date"])?;

    for transaction in transactions {
        csv_writer.write_record([
            transaction.id.to_string(),
            transaction.description.clone(),
            format!("{:.2}", transaction.amount),
            transaction.kind.to_string(),
            transaction
                .category
                .as_ref()
                .map(|name| name.as_ref().to_owned())
                .unwrap_or_default(),
            transaction.date.to_string(),
        ])?;
    }

    csv_writer.flush().map_err(|error| Error::CsvWrite(error.to_string()))?;

    Ok(())
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    summary: ExportSummary,
    transactions: &'a [Transaction],
}

/// Write `transactions` as a pretty-printed JSON document to `writer`.
///
/// The document carries a computed summary block (counts and totals)
/// followed by the flattened transaction list.
///
/// # Errors
/// This function will return a [Error::JsonSerialization] if
/// serialization or writing fails.
pub fn write_json<W: Write>(transactions: &[Transaction], writer: W) -> Result<(), Error> {
    let document = ExportDocument {
        summary: export_summary(transactions),
        transactions,
    };

    serde_json::to_writer_pretty(writer, &document)?;

    Ok(())
}
