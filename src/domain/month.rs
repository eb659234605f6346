//! Month partitioning for grid display

use super::store::Day;
use super::year::Year;
use crate::error::{MoodcalError, Result};
use chrono::{Datelike, Month, NaiveDate};

/// Week header labels; leading blank counts use the same Sunday-first order
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The days of one month plus the blank cells preceding the 1st
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub month: Month,
    pub days: Vec<Day>,
    pub leading_blanks: u32,
}

impl MonthView {
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.month.number_from_month() as usize - 1]
    }

    /// Grid rows of seven cells, `None` for blank cells
    pub fn weeks(&self) -> Vec<Vec<Option<Day>>> {
        let cells: Vec<Option<Day>> = std::iter::repeat(None)
            .take(self.leading_blanks as usize)
            .chain(self.days.iter().copied().map(Some))
            .collect();
        cells.chunks(7).map(|row| row.to_vec()).collect()
    }
}

/// All twelve months in calendar order
pub fn months() -> impl Iterator<Item = Month> {
    (1u8..=12).filter_map(|n| Month::try_from(n).ok())
}

/// Parse a month from a name (`march`, `Mar`) or a number (`3`)
pub fn parse_month(input: &str) -> Result<Month> {
    let trimmed = input.trim();
    if let Ok(n) = trimmed.parse::<u8>() {
        return Month::try_from(n).map_err(|_| MoodcalError::InvalidMonth(input.to_string()));
    }
    trimmed
        .parse::<Month>()
        .map_err(|_| MoodcalError::InvalidMonth(input.to_string()))
}

fn first_of(year: Year, month: Month) -> NaiveDate {
    NaiveDate::from_ymd_opt(year.get(), month.number_from_month(), 1)
        .unwrap_or_else(|| year.first_day())
}

/// Select the days of `month` from a year's day sequence.
///
/// Days are those in `[first of month, first of next month)`; December stops
/// at the end of the sequence. `leading_blanks` is the Sunday-based weekday
/// index of the 1st.
pub fn partition(days: &[Day], year: Year, month: Month) -> MonthView {
    let first = first_of(year, month);
    let next_first = if month == Month::December {
        None
    } else {
        Some(first_of(year, month.succ()))
    };

    let in_month = |d: &&Day| d.date >= first && next_first.map_or(true, |next| d.date < next);

    MonthView {
        month,
        days: days.iter().filter(in_month).copied().collect(),
        leading_blanks: first.weekday().num_days_from_sunday(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::DayMoodStore;

    fn days_of(y: i32) -> (Year, Vec<Day>) {
        let year = Year::new(y).unwrap();
        (year, DayMoodStore::new(year).days().collect())
    }

    #[test]
    fn test_february_lengths() {
        let (y, days) = days_of(2023);
        assert_eq!(partition(&days, y, Month::February).days.len(), 28);
        let (y, days) = days_of(2024);
        assert_eq!(partition(&days, y, Month::February).days.len(), 29);
    }

    #[test]
    fn test_months_cover_year() {
        for year in [1900, 2000, 2023, 2024] {
            let (y, days) = days_of(year);
            let total: usize = months().map(|m| partition(&days, y, m).days.len()).sum();
            assert_eq!(total, days.len());
        }
    }

    #[test]
    fn test_december_ends_on_31st() {
        let (y, days) = days_of(2023);
        let view = partition(&days, y, Month::December);
        assert_eq!(view.days.len(), 31);
        assert_eq!(view.days[0].date.day(), 1);
        assert_eq!(view.days[30].date, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }

    #[test]
    fn test_leading_blanks() {
        let (y, days) = days_of(2023);
        // January 1st 2023 is a Sunday
        assert_eq!(partition(&days, y, Month::January).leading_blanks, 0);
        // March 1st 2023 is a Wednesday
        assert_eq!(partition(&days, y, Month::March).leading_blanks, 3);
        // April 1st 2023 is a Saturday
        assert_eq!(partition(&days, y, Month::April).leading_blanks, 6);
    }

    #[test]
    fn test_weeks_layout() {
        let (y, days) = days_of(2023);
        let view = partition(&days, y, Month::March);
        let weeks = view.weeks();
        assert_eq!(weeks[0].len(), 7);
        assert!(weeks[0][..3].iter().all(Option::is_none));
        assert_eq!(weeks[0][3].unwrap().date.day(), 1);
        assert_eq!(weeks.iter().flatten().filter(|c| c.is_some()).count(), 31);
    }

    #[test]
    fn test_name() {
        let (y, days) = days_of(2023);
        assert_eq!(partition(&days, y, Month::October).name(), "October");
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("march").unwrap(), Month::March);
        assert_eq!(parse_month("Feb").unwrap(), Month::February);
        assert_eq!(parse_month("12").unwrap(), Month::December);
        assert!(parse_month("13").is_err());
        assert!(parse_month("0").is_err());
        assert!(parse_month("octomber").is_err());
    }
}
