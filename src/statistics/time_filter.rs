//! Scope filtering for month-stamped records.
//!
//! Every scoped statistic goes through [filter_scope], which also suppresses
//! records dated after the current month so pre-generated or clock-skewed
//! entries never leak into "current" views.

use crate::models::{BillingMonth, ExtraIncome, Payment, UtilityExpense};

/// The time window a statistic covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeScope {
    /// Everything up to and including the current month.
    All,
    /// A single calendar year.
    Year(i32),
    /// A single month.
    Month(BillingMonth),
}

/// A record stamped with the billing month it belongs to.
pub trait Billed {
    /// The month this record belongs to.
    fn billing_month(&self) -> BillingMonth;
}

impl Billed for Payment {
    fn billing_month(&self) -> BillingMonth {
        self.month
    }
}

impl Billed for UtilityExpense {
    fn billing_month(&self) -> BillingMonth {
        self.month
    }
}

impl Billed for ExtraIncome {
    fn billing_month(&self) -> BillingMonth {
        self.month
    }
}

/// Select the records within `scope`, always excluding months after `now`.
///
/// Future-dated records are suppressed in every scope, including
/// [TimeScope::All].
pub fn filter_scope<'a, T: Billed>(
    records: &'a [T],
    scope: TimeScope,
    now: BillingMonth,
) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| {
            let month = record.billing_month();

            if month > now {
                return false;
            }

            match scope {
                TimeScope::All => true,
                TimeScope::Year(year) => month.year() == year,
                TimeScope::Month(target) => month == target,
            }
        })
        .collect()
}
