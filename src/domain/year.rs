//! Year selection and day generation

use crate::error::{MoodcalError, Result};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// A calendar year accepted by the model.
///
/// Construction is validated so that every `Year` maps onto a full
/// Gregorian year of 365 or 366 representable dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(i32);

impl Year {
    pub const MIN: i32 = -200_000;
    pub const MAX: i32 = 200_000;

    /// Create a year, rejecting values outside `Year::MIN..=Year::MAX`
    pub fn new(value: i32) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Year(value))
        } else {
            Err(MoodcalError::InvalidYear(value.to_string()))
        }
    }

    pub fn get(self) -> i32 {
        self.0
    }

    /// Proleptic Gregorian leap-year rule
    pub fn is_leap(self) -> bool {
        let y = self.0;
        (y % 4 == 0 && y % 100 != 0) || y % 400 == 0
    }

    /// Number of days in this year (365 or 366)
    pub fn day_count(self) -> usize {
        if self.is_leap() {
            366
        } else {
            365
        }
    }

    /// January 1st of this year
    pub fn first_day(self) -> NaiveDate {
        self.date(1, 1)
    }

    /// December 31st of this year
    pub fn last_day(self) -> NaiveDate {
        self.date(12, 31)
    }

    /// Whether `date` falls inside this year
    pub fn contains(self, date: NaiveDate) -> bool {
        chrono::Datelike::year(&date) == self.0
    }

    fn date(self, month: u32, day: u32) -> NaiveDate {
        // Year::new keeps the value well inside chrono's supported range.
        NaiveDate::from_ymd_opt(self.0, month, day).unwrap_or(NaiveDate::MIN)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = MoodcalError;

    fn from_str(s: &str) -> Result<Self> {
        let value: i32 = s
            .trim()
            .parse()
            .map_err(|_| MoodcalError::InvalidYear(s.to_string()))?;
        Year::new(value)
    }
}

/// Generate every date of `year` from January 1st to December 31st, in order.
pub fn generate_days(year: Year) -> Vec<NaiveDate> {
    let mut days = Vec::with_capacity(year.day_count());
    days.extend(
        year.first_day()
            .iter_days()
            .take_while(|d| *d <= year.last_day()),
    );
    days
}
