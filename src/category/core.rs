//! Defines the category model and its validated name type.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Error, database_id::CategoryId, transaction::TransactionKind, user::UserId};

/// The name of a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// # Errors
    /// This function will return an error if `name` is empty or contains
    /// only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        if name.trim().is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(name.trim().to_owned()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty. This function
    /// is not `unsafe` because a violation causes incorrect behaviour, not
    /// memory unsafety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who a category belongs to.
///
/// Default categories are shared seed data and are protected from
/// deletion; user-owned categories can be added and removed freely by
/// their owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryOwnership {
    /// Shared seed data with no owning user.
    Default,
    /// A category created by, and visible to, a single user.
    UserOwned(UserId),
}

impl CategoryOwnership {
    /// The owning user, if any.
    pub fn owner(self) -> Option<UserId> {
        match self {
            Self::Default => None,
            Self::UserOwned(user_id) => Some(user_id),
        }
    }

    /// Whether the category is shared seed data.
    pub fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }
}

/// A label for classifying transactions, e.g., 'Groceries', 'Wages'.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// The ID of the category.
    pub id: CategoryId,
    /// The display name of the category. Unique per owner.
    pub name: CategoryName,
    /// The kind of transactions the category applies to.
    pub kind: TransactionKind,
    /// A display-only hex color string, e.g. "#ef4444".
    pub color: String,
    /// Whether the category is shared seed data or owned by a user.
    pub ownership: CategoryOwnership,
}

#[cfg(test)]
mod category_name_tests {
    use crate::Error;

    use super::CategoryName;

    #[test]
    fn new_fails_on_empty_string() {
        let category_name = CategoryName::new("");

        assert_eq!(category_name, Err(Error::EmptyCategoryName));
    }

    #[test]
    fn new_fails_on_just_whitespace() {
        let category_name = CategoryName::new("\n\t \r");

        assert_eq!(category_name, Err(Error::EmptyCategoryName));
    }

    #[test]
    fn new_succeeds_on_non_empty_string() {
        let category_name = CategoryName::new("🔥");

        assert!(category_name.is_ok())
    }

    #[test]
    fn new_trims_surrounding_whitespace() {
        let category_name = CategoryName::new("  Food ").unwrap();

        assert_eq!(category_name.as_ref(), "Food");
    }
}
