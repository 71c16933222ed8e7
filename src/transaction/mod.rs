//! Transaction management for the budgeting application.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating
//!   transactions
//! - Database functions for storing, querying, and deleting transactions
//! - In-memory filters for the transactions list

mod core;
mod filter;

pub use core::{
    Transaction, TransactionBuilder, TransactionKind, count_transactions, create_transaction,
    create_transaction_table, delete_transaction, get_transaction, get_transactions_for_user,
    map_transaction_row,
};
pub use filter::TransactionFilter;
