//! Sums over transaction lists.

use crate::transaction::{Transaction, TransactionKind};

/// The sum of amounts for transactions of the given kind.
///
/// Returns 0.0 for an empty list or when nothing matches. The result does
/// not depend on the order of the input.
pub fn total_by_kind(transactions: &[Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|transaction| transaction.kind == kind)
        .map(|transaction| transaction.amount)
        .sum()
}

/// Each side's percentage of the combined money flow, for the
/// income-vs-expenses view on the analytics page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowShares {
    /// Income as a percentage of income plus expenses, 0-100.
    pub income_percent: f64,
    /// Expenses as a percentage of income plus expenses, 0-100.
    pub expense_percent: f64,
}

/// Split the combined flow into income and expense percentages.
///
/// Both shares are 0 when the combined flow is zero.
pub fn income_expense_shares(total_income: f64, total_expenses: f64) -> FlowShares {
    let combined = total_income + total_expenses;

    if combined > 0.0 {
        FlowShares {
            income_percent: total_income / combined * 100.0,
            expense_percent: total_expenses / combined * 100.0,
        }
    } else {
        FlowShares {
            income_percent: 0.0,
            expense_percent: 0.0,
        }
    }
}
