//! Database initialization for the application.

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{
    Error,
    category::{create_category_table, seed_default_categories},
    transaction::create_transaction_table,
    user::create_user_table,
};

/// Add the tables for the domain models to the database and seed the
/// shared default categories.
///
/// Safe to call on a database that has already been initialized.
///
/// # Errors
/// Returns an error if a table could not be created or if there is an SQL
/// error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_user_table(&transaction)?;
    create_category_table(&transaction)?;
    create_transaction_table(&transaction)?;
    seed_default_categories(&transaction)?;

    transaction.commit()?;

    Ok(())
}

#[cfg(test)]
mod initialize_tests {
    use rusqlite::Connection;

    use crate::category::count_default_categories;

    use super::initialize;

    #[test]
    fn initialize_creates_tables_and_seeds_defaults() {
        let conn = Connection::open_in_memory().unwrap();

        initialize(&conn).expect("Could not initialize database");

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .map(|name| name.unwrap())
            .collect();

        for want in ["category", "transaction", "user"] {
            assert!(
                tables.iter().any(|table| table == want),
                "missing table {want}, got {tables:?}"
            );
        }

        let default_count =
            count_default_categories(&conn).expect("Could not count default categories");
        assert_eq!(default_count, 8);
    }

    #[test]
    fn initialize_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        initialize(&conn).expect("Could not initialize database");
        initialize(&conn).expect("Could not re-initialize database");

        let default_count = count_default_categories(&conn)
            .expect("Could not count default categories");
        assert_eq!(default_count, 8, "defaults were seeded twice");
    }
}
