//! Calendar-month windows for scoping transactions to a reporting period.

use time::{Date, Month};

use crate::transaction::Transaction;

/// An inclusive range of dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// The first day in the range.
    pub start: Date,
    /// The last day in the range.
    pub end: Date,
}

impl DateRange {
    /// Whether `date` falls within the range, bounds included.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// The first and last day of the calendar month containing `reference`.
pub fn month_range(reference: Date) -> DateRange {
    let year = reference.year();
    let month = reference.month();

    let start = Date::from_calendar_date(year, month, 1).expect("invalid month start date");
    let end = Date::from_calendar_date(year, month, last_day_of_month(year, month))
        .expect("invalid month end date");

    DateRange { start, end }
}

/// The sublist of `transactions` dated within the calendar month
/// containing `reference`.
///
/// An empty input yields an empty output.
pub fn filter_by_month(transactions: &[Transaction], reference: Date) -> Vec<Transaction> {
    let range = month_range(reference);

    transactions
        .iter()
        .filter(|transaction| range.contains(transaction.date))
        .cloned()
        .collect()
}

fn last_day_of_month(year: i32, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod period_tests {
    use time::macros::date;

    use crate::transaction::Transaction;

    use super::{filter_by_month, month_range};

    fn create_test_transaction(amount: f64, date: time::Date) -> Transaction {
        Transaction {
            id: 1,
            description: String::new(),
            amount,
            kind: crate::transaction::TransactionKind::Expense,
            category: None,
            date,
            created_at: time::macros::datetime!(2024-01-01 0:00 UTC),
        }
    }

    #[test]
    fn month_range_covers_whole_month() {
        let range = month_range(date!(2024 - 03 - 17));

        assert_eq!(range.start, date!(2024 - 03 - 01));
        assert_eq!(range.end, date!(2024 - 03 - 31));
    }

    #[test]
    fn month_range_handles_leap_february() {
        let range = month_range(date!(2024 - 02 - 10));
        assert_eq!(range.end, date!(2024 - 02 - 29));

        let range = month_range(date!(2023 - 02 - 10));
        assert_eq!(range.end, date!(2023 - 02 - 28));

        // Century years are only leap years when divisible by 400.
        let range = month_range(date!(1900 - 02 - 10));
        assert_eq!(range.end, date!(1900 - 02 - 28));
    }

    #[test]
    fn filter_by_month_returns_a_sublist_within_bounds() {
        let transactions = vec![
            create_test_transaction(1.0, date!(2024 - 02 - 29)),
            create_test_transaction(2.0, date!(2024 - 03 - 01)),
            create_test_transaction(3.0, date!(2024 - 03 - 15)),
            create_test_transaction(4.0, date!(2024 - 03 - 31)),
            create_test_transaction(5.0, date!(2024 - 04 - 01)),
        ];

        let got = filter_by_month(&transactions, date!(2024 - 03 - 17));

        let range = month_range(date!(2024 - 03 - 17));
        assert_eq!(got.len(), 3);
        for transaction in &got {
            assert!(range.contains(transaction.date));
            assert!(transactions.contains(transaction), "filter invented a transaction");
        }
    }

    #[test]
    fn filter_by_month_returns_empty_for_empty_input() {
        let got = filter_by_month(&[], date!(2024 - 03 - 17));

        assert!(got.is_empty());
    }

    #[test]
    fn filter_by_month_returns_empty_when_nothing_matches() {
        let transactions = vec![create_test_transaction(1.0, date!(2024 - 01 - 15))];

        let got = filter_by_month(&transactions, date!(2024 - 03 - 17));

        assert!(got.is_empty());
    }
}
