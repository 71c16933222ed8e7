use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime};

use pocketbudget::{
    CategoryName, Transaction, TransactionKind, initialize_db,
    transaction::create_transaction,
    user::create_user,
};

/// A utility for creating a seeded test database for pocketbudget.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test user...");
    let user = create_user("test@example.com", &conn)?;

    println!("Creating sample transactions...");
    let today = OffsetDateTime::now_utc().date();
    let samples = [
        (
            2750.0,
            TransactionKind::Income,
            "Salary",
            "Monthly wages",
            today - Duration::days(3),
        ),
        (
            86.4,
            TransactionKind::Expense,
            "Food",
            "Weekly shop",
            today - Duration::days(2),
        ),
        (
            14.5,
            TransactionKind::Expense,
            "Transportation",
            "Bus pass top-up",
            today - Duration::days(1),
        ),
        (
            120.0,
            TransactionKind::Expense,
            "Utilities",
            "Power bill",
            today - Duration::days(34),
        ),
        (
            400.0,
            TransactionKind::Income,
            "Freelance",
            "Website gig",
            today - Duration::days(40),
        ),
    ];

    for (amount, kind, category, description, date) in samples {
        create_transaction(
            Transaction::build(amount, date, description)
                .kind(kind)
                .category(Some(CategoryName::new_unchecked(category))),
            user.id,
            &conn,
        )?;
    }

    println!("Success!");

    Ok(())
}
