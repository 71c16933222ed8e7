use std::error::Error;
use std::fs::File;
use std::path::Path;
use std::process::exit;

use clap::{Parser, ValueEnum};
use rusqlite::Connection;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use pocketbudget::{
    UserId,
    currency::format_currency,
    export::{export_summary, write_csv, write_json},
    report::filter_by_month,
    transaction::get_transactions_for_user,
};

/// The file formats a transaction list can be exported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
}

/// A utility for exporting a user's transactions to a CSV or JSON file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path of the SQLite database to read from.
    #[arg(long, short)]
    db_path: String,

    /// The ID of the user whose transactions should be exported.
    #[arg(long, short)]
    user: i64,

    /// The format to export as.
    #[arg(long, short, value_enum, default_value_t = ExportFormat::Csv)]
    format: ExportFormat,

    /// Only export transactions from this month, e.g. '2024-03'.
    #[arg(long, short, value_parser = parse_month)]
    month: Option<Date>,

    /// File path to write the export to.
    #[arg(long, short)]
    output_path: String,
}

fn parse_month(value: &str) -> Result<Date, String> {
    const FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

    Date::parse(&format!("{value}-01"), &FORMAT)
        .map_err(|error| format!("expected a month like '2024-03': {error}"))
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(filter::LevelFilter::INFO))
        .init();

    let args = Args::parse();

    if !Path::new(&args.db_path).is_file() {
        eprintln!("No database found at {:#?}.", args.db_path);
        exit(1);
    }

    let conn = Connection::open(&args.db_path)?;

    let mut transactions = get_transactions_for_user(UserId::new(args.user), &conn)?;

    if let Some(month) = args.month {
        transactions = filter_by_month(&transactions, month);
    }

    let output = File::create(&args.output_path)?;
    match args.format {
        ExportFormat::Csv => write_csv(&transactions, output)?,
        ExportFormat::Json => write_json(&transactions, output)?,
    }

    let summary = export_summary(&transactions);
    tracing::info!(
        "Exported {} transactions to {} (income {}, expenses {}, net {})",
        summary.transaction_count,
        args.output_path,
        format_currency(summary.total_income),
        format_currency(summary.total_expenses),
        format_currency(summary.net_income),
    );

    Ok(())
}
