//! The dashboard's at-a-glance statistics.

use serde::Serialize;

use crate::{
    report::aggregate::total_by_kind,
    transaction::{Transaction, TransactionKind},
};

/// The monthly budget applied when the user has not configured one.
pub const DEFAULT_MONTHLY_BUDGET: f64 = 5000.0;

/// The summary figures shown at the top of the dashboard.
///
/// Derived from the current period's transactions on every render; never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Total income for the period.
    pub total_income: f64,
    /// Total expenses for the period.
    pub total_expenses: f64,
    /// Income minus expenses.
    pub net_income: f64,
    /// The fixed monthly budget the summary was computed against.
    pub monthly_budget: f64,
    /// Budget minus expenses. Negative when the budget is overspent.
    pub remaining_budget: f64,
}

/// Assemble the dashboard summary for a period's transactions.
///
/// `transactions` should already be scoped to the reporting period (see
/// [crate::report::filter_by_month]). The remaining budget is allowed to
/// go negative when expenses exceed `monthly_budget`.
pub fn dashboard_summary(transactions: &[Transaction], monthly_budget: f64) -> DashboardSummary {
    let total_income = total_by_kind(transactions, TransactionKind::Income);
    let total_expenses = total_by_kind(transactions, TransactionKind::Expense);

    DashboardSummary {
        total_income,
        total_expenses,
        net_income: total_income - total_expenses,
        monthly_budget,
        remaining_budget: monthly_budget - total_expenses,
    }
}
