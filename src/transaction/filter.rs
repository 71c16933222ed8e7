//! In-memory filters for the transactions list.

use crate::{
    category::CategoryName,
    transaction::{Transaction, TransactionKind},
};

/// The criteria used to narrow down the transactions list.
///
/// Each criterion is optional; the filter keeps transactions that match
/// all of the criteria that are set. The default filter matches
/// everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    /// Case-insensitive substring to look for in descriptions.
    pub search: Option<String>,
    /// Keep only transactions of this kind.
    pub kind: Option<TransactionKind>,
    /// Keep only transactions filed under this category name.
    pub category: Option<CategoryName>,
}

impl TransactionFilter {
    /// Whether `transaction` matches every criterion that is set.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        let matches_search = self.search.as_ref().is_none_or(|term| {
            transaction
                .description
                .to_lowercase()
                .contains(&term.to_lowercase())
        });
        let matches_kind = self.kind.is_none_or(|kind| transaction.kind == kind);
        let matches_category = self
            .category
            .as_ref()
            .is_none_or(|name| transaction.category.as_ref() == Some(name));

        matches_search && matches_kind && matches_category
    }

    /// The sublist of `transactions` that matches the filter.
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|transaction| self.matches(transaction))
            .cloned()
            .collect()
    }
}
