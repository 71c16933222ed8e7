//! Pocketbudget is the data and reporting core of a personal
//! budget-tracking application.
//!
//! Users record income and expense transactions, file them under shared or
//! personal categories, and view monthly summaries of where their money
//! went. This crate provides the domain models, the SQLite-backed data
//! access layer, the pure aggregation functions behind the dashboard and
//! analytics views, and CSV/JSON export of transaction lists.
//!
//! Authentication and presentation are handled by external collaborators;
//! this crate only ever sees lists that are already scoped to one user.

#![warn(missing_docs)]

pub mod category;
pub mod currency;
pub mod database_id;
pub mod db;
pub mod export;
pub mod report;
pub mod transaction;
pub mod user;

pub use category::{Category, CategoryName, CategoryOwnership};
pub use db::initialize as initialize_db;
pub use transaction::{Transaction, TransactionBuilder, TransactionKind};
pub use user::{User, UserId};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A negative amount was used to create a transaction.
    ///
    /// Amounts are stored as non-negative numbers, the direction of the
    /// money flow is carried by the transaction kind.
    #[error("transaction amounts must not be negative, got {0}")]
    NegativeAmount(f64),

    /// An empty string was used to create a category name.
    #[error("category name cannot be empty")]
    EmptyCategoryName,

    /// The user already has a category with the given name.
    #[error("a category with that name already exists")]
    DuplicateCategoryName,

    /// The email address used to create a user already belongs to another
    /// user.
    #[error("the email address already belongs to a user")]
    DuplicateEmail,

    /// The user ID used to create a record did not match a valid user.
    #[error("the user ID does not refer to a valid user")]
    InvalidUser,

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to delete a transaction that does not exist.
    #[error("tried to delete a transaction that is not in the database")]
    DeleteMissingTransaction,

    /// Tried to delete a category that does not exist.
    #[error("tried to delete a category that is not in the database")]
    DeleteMissingCategory,

    /// Tried to delete a default category.
    ///
    /// Default categories are shared seed data without an owning user and
    /// are read-only from the user's perspective.
    #[error("default categories cannot be deleted")]
    DefaultCategoryProtected,

    /// An error occurred while writing CSV output.
    #[error("could not write CSV: {0}")]
    CsvWrite(String),

    /// An error occurred while serializing a struct as JSON.
    #[error("could not serialize as JSON: {0}")]
    JsonSerialization(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 2067 occurs when a UNIQUE constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067 && desc.contains("category.name") =>
            {
                Error::DuplicateCategoryName
            }
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067 && desc.contains("user.email") =>
            {
                Error::DuplicateEmail
            }
            // Code 787 occurs when a FOREIGN KEY constraint failed. The only
            // foreign keys in the schema point at the user table.
            rusqlite::Error::SqliteFailure(sql_error, _) if sql_error.extended_code == 787 => {
                Error::InvalidUser
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::CsvWrite(value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::JsonSerialization(value.to_string())
    }
}
