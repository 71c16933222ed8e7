//! Reporting and aggregation logic for the dashboard and analytics views.
//!
//! Everything in this module is a pure function over in-memory lists: the
//! host application fetches a user's transactions and categories, then
//! recomputes these summaries from the latest snapshot whenever its
//! source lists change.

mod aggregate;
mod breakdown;
mod period;
mod summary;

pub use aggregate::{FlowShares, income_expense_shares, total_by_kind};
pub use breakdown::{BreakdownEntry, category_breakdown};
pub use period::{DateRange, filter_by_month, month_range};
pub use summary::{DEFAULT_MONTHLY_BUDGET, DashboardSummary, dashboard_summary};
