//! Defines the core data models and database queries for transactions.

use std::fmt::Display;

use rusqlite::{
    Connection, Row,
    types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{Error, category::CategoryName, database_id::TransactionId, user::UserId};

// ============================================================================
// MODELS
// ============================================================================

/// Whether a transaction records money earned or money spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money flowing in, e.g. wages.
    Income,
    /// Money flowing out, e.g. groceries.
    Expense,
}

impl TransactionKind {
    /// The lowercase wire/storage name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ToSql for TransactionKind {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for TransactionKind {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(FromSqlError::Other(
                format!("invalid transaction kind {other:?}").into(),
            )),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or
/// earned.
///
/// To create a new `Transaction`, use [Transaction::build]. Amounts are
/// non-negative; the direction of the flow is carried by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// Whether the transaction is an income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The name of the category the transaction is filed under, if any.
    ///
    /// Categories are linked by name rather than by ID, mirroring the
    /// records produced by the web client.
    pub category: Option<CategoryName>,
    /// When the transaction happened.
    pub date: Date,
    /// When the record was created. Audit-only, never used in computation.
    #[serde(rename = "createdAt", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(amount: f64, date: Date, description: &str) -> TransactionBuilder {
        TransactionBuilder {
            amount,
            date,
            description: description.to_owned(),
            kind: TransactionKind::Expense,
            category: None,
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// Finalize the builder by passing it to [create_transaction] along with
/// the owning user.
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// The monetary amount of the transaction. Must not be negative.
    pub amount: f64,
    /// The date when the transaction occurred.
    pub date: Date,
    /// A human-readable description of the transaction.
    pub description: String,
    /// Whether the transaction is an income or an expense. Defaults to
    /// expense.
    pub kind: TransactionKind,
    /// The name of the category to file the transaction under.
    pub category: Option<CategoryName>,
}

impl TransactionBuilder {
    /// Set the kind of the transaction.
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the category name for the transaction.
    pub fn category(mut self, category: Option<CategoryName>) -> Self {
        self.category = category;
        self
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction owned by `user_id` from a builder.
///
/// The creation timestamp is stamped by this function.
///
/// # Errors
/// This function will return a:
/// - [Error::NegativeAmount] if the builder's amount is negative,
/// - [Error::InvalidUser] if `user_id` does not refer to a valid user,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn create_transaction(
    builder: TransactionBuilder,
    user_id: UserId,
    connection: &Connection,
) -> Result<Transaction, Error> {
    if builder.amount < 0.0 {
        return Err(Error::NegativeAmount(builder.amount));
    }

    let created_at = OffsetDateTime::now_utc();

    let transaction = connection
        .prepare(
            "INSERT INTO \"transaction\" (description, amount, kind, category, date, created_at, user_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             RETURNING id, description, amount, kind, category, date, created_at",
        )?
        .query_row(
            (
                &builder.description,
                builder.amount,
                builder.kind,
                builder.category.as_ref().map(CategoryName::as_ref),
                builder.date,
                created_at,
                user_id.as_i64(),
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "SELECT id, description, amount, kind, category, date, created_at
             FROM \"transaction\" WHERE id = :id",
        )?
        .query_row(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Retrieve the transactions owned by `user_id`, most recent first.
///
/// An empty vector is returned if the user has no transactions. Ties on
/// the same date keep insertion order so the listing is stable.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_transactions_for_user(
    user_id: UserId,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, description, amount, kind, category, date, created_at
             FROM \"transaction\" WHERE user_id = :user_id
             ORDER BY date DESC, id ASC",
        )?
        .query_map(&[(":user_id", &user_id.as_i64())], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
        .collect()
}

/// Delete a transaction by ID.
///
/// # Errors
/// This function will return a:
/// - [Error::DeleteMissingTransaction] if `id` does not refer to a valid
///   transaction,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn delete_transaction(id: TransactionId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM \"transaction\" WHERE id = ?1", [id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingTransaction);
    }

    Ok(())
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL
/// error.
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM \"transaction\";", [], |row| {
            row.get(0)
        })
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL
/// error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                description TEXT NOT NULL,
                amount REAL NOT NULL,
                kind TEXT NOT NULL,
                category TEXT,
                date TEXT NOT NULL,
                created_at TEXT NOT NULL,
                user_id INTEGER NOT NULL,
                FOREIGN KEY(user_id) REFERENCES user(id) ON UPDATE CASCADE ON DELETE CASCADE
                );

        CREATE INDEX IF NOT EXISTS idx_transaction_user_date ON \"transaction\"(user_id, date);",
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let description = row.get(1)?;
    let amount = row.get(2)?;
    let kind = row.get(3)?;
    let category = row
        .get::<usize, Option<String>>(4)?
        .map(|name| CategoryName::new_unchecked(&name));
    let date = row.get(5)?;
    let created_at = row.get(6)?;

    Ok(Transaction {
        id,
        description,
        amount,
        kind,
        category,
        date,
        created_at,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod database_tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        category::CategoryName,
        db::initialize,
        user::{UserId, create_user},
    };

    use super::{
        Transaction, TransactionKind, count_transactions, create_transaction, delete_transaction,
        get_transaction, get_transactions_for_user,
    };

    fn get_test_connection() -> (Connection, UserId) {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        let user = create_user("test@test.com", &conn).expect("Could not create test user");

        (conn, user.id)
    }

    #[test]
    fn create_succeeds() {
        let (conn, user_id) = get_test_connection();
        let amount = 12.3;

        let result = create_transaction(
            Transaction::build(amount, date!(2024 - 03 - 05), "Lunch")
                .kind(TransactionKind::Expense)
                .category(Some(CategoryName::new_unchecked("Food"))),
            user_id,
            &conn,
        );

        match result {
            Ok(transaction) => {
                assert!(transaction.id > 0);
                assert_eq!(transaction.amount, amount);
                assert_eq!(transaction.kind, TransactionKind::Expense);
                assert_eq!(
                    transaction.category,
                    Some(CategoryName::new_unchecked("Food"))
                );
                assert_eq!(transaction.date, date!(2024 - 03 - 05));
            }
            Err(error) => panic!("Unexpected error: {error}"),
        }
    }

    #[test]
    fn create_fails_on_negative_amount() {
        let (conn, user_id) = get_test_connection();

        let result = create_transaction(
            Transaction::build(-42.0, date!(2024 - 03 - 05), "Refund gone wrong"),
            user_id,
            &conn,
        );

        assert_eq!(result, Err(Error::NegativeAmount(-42.0)));
    }

    #[test]
    fn create_fails_on_invalid_user() {
        let (conn, user_id) = get_test_connection();

        let result = create_transaction(
            Transaction::build(42.0, date!(2024 - 03 - 05), ""),
            UserId::new(user_id.as_i64() + 42),
            &conn,
        );

        assert_eq!(result, Err(Error::InvalidUser));
    }

    #[test]
    fn get_transaction_succeeds() {
        let (conn, user_id) = get_test_connection();
        let inserted = create_transaction(
            Transaction::build(9.99, date!(2024 - 03 - 05), "Streaming"),
            user_id,
            &conn,
        )
        .expect("Could not create transaction");

        let selected = get_transaction(inserted.id, &conn);

        assert_eq!(Ok(inserted), selected);
    }

    #[test]
    fn get_transaction_fails_on_invalid_id() {
        let (conn, user_id) = get_test_connection();
        let inserted = create_transaction(
            Transaction::build(9.99, date!(2024 - 03 - 05), ""),
            user_id,
            &conn,
        )
        .expect("Could not create transaction");

        let selected = get_transaction(inserted.id + 1, &conn);

        assert_eq!(selected, Err(Error::NotFound));
    }

    #[test]
    fn get_transactions_for_user_returns_empty_vec_without_transactions() {
        let (conn, user_id) = get_test_connection();

        let transactions =
            get_transactions_for_user(user_id, &conn).expect("Could not query transactions");

        assert_eq!(transactions, vec![]);
    }

    #[test]
    fn get_transactions_for_user_sorts_by_date_descending() {
        let (conn, user_id) = get_test_connection();
        for (amount, date) in [
            (1.0, date!(2024 - 03 - 05)),
            (2.0, date!(2024 - 03 - 20)),
            (3.0, date!(2024 - 03 - 10)),
        ] {
            create_transaction(Transaction::build(amount, date, ""), user_id, &conn)
                .expect("Could not create transaction");
        }

        let transactions =
            get_transactions_for_user(user_id, &conn).expect("Could not query transactions");

        let dates: Vec<_> = transactions
            .iter()
            .map(|transaction| transaction.date)
            .collect();
        assert_eq!(
            dates,
            vec![
                date!(2024 - 03 - 20),
                date!(2024 - 03 - 10),
                date!(2024 - 03 - 05)
            ]
        );
    }

    #[test]
    fn get_transactions_for_user_excludes_other_users() {
        let (conn, user_id) = get_test_connection();
        let other_user = create_user("other@test.com", &conn).expect("Could not create user");
        create_transaction(
            Transaction::build(1.0, date!(2024 - 03 - 05), "mine"),
            user_id,
            &conn,
        )
        .expect("Could not create transaction");
        create_transaction(
            Transaction::build(2.0, date!(2024 - 03 - 05), "theirs"),
            other_user.id,
            &conn,
        )
        .expect("Could not create transaction");

        let transactions =
            get_transactions_for_user(user_id, &conn).expect("Could not query transactions");

        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].description, "mine");
    }

    #[test]
    fn delete_transaction_succeeds() {
        let (conn, user_id) = get_test_connection();
        let transaction = create_transaction(
            Transaction::build(5.0, date!(2024 - 03 - 05), ""),
            user_id,
            &conn,
        )
        .expect("Could not create transaction");

        let result = delete_transaction(transaction.id, &conn);

        assert!(result.is_ok());
        assert_eq!(get_transaction(transaction.id, &conn), Err(Error::NotFound));
    }

    #[test]
    fn delete_transaction_with_invalid_id_returns_missing() {
        let (conn, _) = get_test_connection();

        let result = delete_transaction(999999, &conn);

        assert_eq!(result, Err(Error::DeleteMissingTransaction));
    }

    #[test]
    fn get_count() {
        let (conn, user_id) = get_test_connection();
        let want_count = 20;
        for i in 1..=want_count {
            create_transaction(
                Transaction::build(i as f64, date!(2024 - 03 - 05), ""),
                user_id,
                &conn,
            )
            .expect("Could not create transaction");
        }

        let got_count = count_transactions(&conn).expect("Could not get count");

        assert_eq!(want_count, got_count);
    }
}

#[cfg(test)]
mod serde_tests {
    use time::macros::date;

    use super::{Transaction, TransactionKind};

    #[test]
    fn deserializes_wire_record() {
        let record = r#"{
            "id": 7,
            "description": "Weekly shop",
            "amount": 40.0,
            "type": "expense",
            "category": "Food",
            "date": "2024-03-10",
            "createdAt": "2024-03-10T12:00:00Z"
        }"#;

        let transaction: Transaction =
            serde_json::from_str(record).expect("Could not deserialize record");

        assert_eq!(transaction.id, 7);
        assert_eq!(transaction.kind, TransactionKind::Expense);
        assert_eq!(transaction.date, date!(2024 - 03 - 10));
    }

    #[test]
    fn malformed_date_string_is_an_error() {
        let record = r#"{
            "id": 7,
            "description": "Weekly shop",
            "amount": 40.0,
            "type": "expense",
            "category": "Food",
            "date": "2024-13-45",
            "createdAt": "2024-03-10T12:00:00Z"
        }"#;

        let result = serde_json::from_str::<Transaction>(record);

        assert!(result.is_err(), "malformed dates must not parse");
    }
}
