//! This file defines `BillingMonth`, the `YYYY/MM` key that every charge and
//! scoped statistic is indexed by.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use time::{Date, Month};

use crate::Error;

/// A calendar month on the billing timeline.
///
/// Months are written as `YYYY/MM` in the persisted document and compare
/// chronologically, so "is this charge in the future?" is a plain `>` against
/// the current month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BillingMonth {
    year: i32,
    month: u8,
}

impl BillingMonth {
    /// Create a billing month, rejecting month numbers outside 1-12.
    pub fn new(year: i32, month: u8) -> Result<Self, Error> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth(format!("{year}/{month}")));
        }

        Ok(Self { year, month })
    }

    /// The billing month that `date` falls in.
    pub fn from_date(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month() as u8,
        }
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month number, 1-12.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// The month immediately after this one.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The due date for a charge raised in this month: the 5th of the
    /// following month.
    pub fn due_date(&self) -> Date {
        let next = self.next();
        // The 5th exists in every month, so this cannot fail.
        Date::from_calendar_date(next.year, Month::try_from(next.month).unwrap(), 5).unwrap()
    }

    /// The months from `self` up to, but not including, `end`.
    ///
    /// Returns an empty vector when `end` is not after `self`.
    pub fn months_until(&self, end: BillingMonth) -> Vec<BillingMonth> {
        let mut months = Vec::new();
        let mut current = *self;

        while current < end {
            months.push(current);
            current = current.next();
        }

        months
    }
}

impl fmt::Display for BillingMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}", self.year, self.month)
    }
}

impl FromStr for BillingMonth {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidMonth(text.to_owned());

        let (year_text, month_text) = text.split_once('/').ok_or_else(invalid)?;
        let year: i32 = year_text.parse().map_err(|_| invalid())?;
        let month: u8 = month_text.parse().map_err(|_| invalid())?;

        Self::new(year, month).map_err(|_| invalid())
    }
}

impl Serialize for BillingMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BillingMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
