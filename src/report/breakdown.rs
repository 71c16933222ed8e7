//! Per-category expense breakdown for the analytics page.

use serde::Serialize;

use crate::{
    category::{Category, CategoryName},
    report::aggregate::total_by_kind,
    transaction::{Transaction, TransactionKind},
};

/// One category's share of the period's expenses.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownEntry {
    /// The category name.
    pub name: CategoryName,
    /// Total spent in this category over the period.
    pub total: f64,
    /// This category's share of the period's total expenses, 0-100.
    pub percentage: f64,
    /// The category's display color.
    pub color: String,
}

/// Group the period's expense transactions by expense category and compute
/// each category's total and share of overall expenses.
///
/// Transactions are joined to categories by name. Categories with no
/// spending are dropped, and the result is sorted descending by total;
/// ties keep the order of the input category list. Percentages are 0 when
/// the period has no expenses at all.
pub fn category_breakdown(
    transactions: &[Transaction],
    categories: &[Category],
) -> Vec<BreakdownEntry> {
    let total_expenses = total_by_kind(transactions, TransactionKind::Expense);

    let mut entries: Vec<BreakdownEntry> = categories
        .iter()
        .filter(|category| category.kind == TransactionKind::Expense)
        .map(|category| {
            let total: f64 = transactions
                .iter()
                .filter(|transaction| {
                    transaction.kind == TransactionKind::Expense
                        && transaction.category.as_ref() == Some(&category.name)
                })
                .map(|transaction| transaction.amount)
                .sum();
            let percentage = if total_expenses > 0.0 {
                total / total_expenses * 100.0
            } else {
                0.0
            };

            BreakdownEntry {
                name: category.name.clone(),
                total,
                percentage,
                color: category.color.clone(),
            }
        })
        .filter(|entry| entry.total > 0.0)
        .collect();

    // Stable sort, so equal totals keep the category-list order.
    entries.sort_by(|a, b| b.total.total_cmp(&a.total));

    entries
}
