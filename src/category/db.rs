//! Database operations for categories.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    category::{Category, CategoryName, CategoryOwnership},
    database_id::CategoryId,
    transaction::TransactionKind,
    user::UserId,
};

/// The shared categories every user starts with.
const DEFAULT_CATEGORIES: [(&str, TransactionKind, &str); 8] = [
    ("Salary", TransactionKind::Income, "#10b981"),
    ("Food", TransactionKind::Expense, "#ef4444"),
    ("Transportation", TransactionKind::Expense, "#3b82f6"),
    ("Entertainment", TransactionKind::Expense, "#8b5cf6"),
    ("Utilities", TransactionKind::Expense, "#f59e0b"),
    ("Shopping", TransactionKind::Expense, "#ec4899"),
    ("Healthcare", TransactionKind::Expense, "#06b6d4"),
    ("Freelance", TransactionKind::Income, "#84cc16"),
];

/// Create a user-owned category and return it with its generated ID.
///
/// # Errors
/// This function will return a:
/// - [Error::DuplicateCategoryName] if the user already has a category
///   named `name`,
/// - [Error::InvalidUser] if `owner` does not refer to a valid user,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn create_category(
    name: CategoryName,
    kind: TransactionKind,
    color: &str,
    owner: UserId,
    connection: &Connection,
) -> Result<Category, Error> {
    connection.execute(
        "INSERT INTO category (name, kind, color, user_id) VALUES (?1, ?2, ?3, ?4);",
        (name.as_ref(), kind, color, owner.as_i64()),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Category {
        id,
        name,
        kind,
        color: color.to_owned(),
        ownership: CategoryOwnership::UserOwned(owner),
    })
}

/// Retrieve a single category by ID.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `category_id` does not refer to a valid category,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn get_category(category_id: CategoryId, connection: &Connection) -> Result<Category, Error> {
    connection
        .prepare("SELECT id, name, kind, color, user_id FROM category WHERE id = :id;")?
        .query_row(&[(":id", &category_id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve the categories visible to `user_id`: the user's own categories
/// plus the shared defaults, ordered alphabetically by name.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_categories_for_user(
    user_id: UserId,
    connection: &Connection,
) -> Result<Vec<Category>, Error> {
    connection
        .prepare(
            "SELECT id, name, kind, color, user_id FROM category
             WHERE user_id = :user_id OR user_id IS NULL
             ORDER BY name ASC;",
        )?
        .query_map(&[(":user_id", &user_id.as_i64())], map_row)?
        .map(|maybe_category| maybe_category.map_err(|error| error.into()))
        .collect()
}

/// Delete a user-owned category by ID.
///
/// # Errors
/// This function will return a:
/// - [Error::DeleteMissingCategory] if `category_id` does not refer to a
///   valid category,
/// - [Error::DefaultCategoryProtected] if the category is shared seed
///   data,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn delete_category(category_id: CategoryId, connection: &Connection) -> Result<(), Error> {
    let category = match get_category(category_id, connection) {
        Ok(category) => category,
        Err(Error::NotFound) => return Err(Error::DeleteMissingCategory),
        Err(error) => return Err(error),
    };

    if category.ownership.is_default() {
        return Err(Error::DefaultCategoryProtected);
    }

    connection.execute("DELETE FROM category WHERE id = ?1", [category_id])?;

    Ok(())
}

/// Insert the shared default categories if none exist yet.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn seed_default_categories(connection: &Connection) -> Result<(), Error> {
    if count_default_categories(connection)? > 0 {
        return Ok(());
    }

    for (name, kind, color) in DEFAULT_CATEGORIES {
        connection.execute(
            "INSERT INTO category (name, kind, color, user_id) VALUES (?1, ?2, ?3, NULL);",
            (name, kind, color),
        )?;
    }

    Ok(())
}

/// Get the number of shared default categories in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn count_default_categories(connection: &Connection) -> Result<usize, Error> {
    connection
        .query_row(
            "SELECT COUNT(id) FROM category WHERE user_id IS NULL;",
            [],
            |row| row.get::<_, i64>(0).map(|count| count as usize),
        )
        .map_err(|error| error.into())
}

/// Initialize the category table and indexes.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL
/// error.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            kind TEXT NOT NULL,
            color TEXT NOT NULL,
            user_id INTEGER,
            FOREIGN KEY(user_id) REFERENCES user(id) ON UPDATE CASCADE ON DELETE CASCADE,
            UNIQUE(user_id, name)
        );

        CREATE INDEX IF NOT EXISTS idx_category_name ON category(name);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_name: String = row.get(1)?;
    let kind = row.get(2)?;
    let color = row.get(3)?;
    let owner: Option<i64> = row.get(4)?;

    let ownership = match owner {
        Some(user_id) => CategoryOwnership::UserOwned(UserId::new(user_id)),
        None => CategoryOwnership::Default,
    };

    Ok(Category {
        id,
        name: CategoryName::new_unchecked(&raw_name),
        kind,
        color,
        ownership,
    })
}
