//! Category management for the budgeting application.
//!
//! Categories classify transactions as, e.g., 'Groceries' or 'Wages' and
//! carry a display color. A fixed set of default categories is shared
//! between all users as seed data; users can add and remove their own
//! categories on top of those.

mod core;
mod db;

pub use core::{Category, CategoryName, CategoryOwnership};
pub use db::{
    count_default_categories, create_category, create_category_table, delete_category,
    get_categories_for_user, get_category, seed_default_categories,
};
