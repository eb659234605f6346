//! Per-day mood storage for one year

use super::mood::MoodId;
use super::year::{generate_days, Year};
use chrono::{Datelike, NaiveDate};

/// A single calendar day and the mood assigned to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Day {
    pub date: NaiveDate,
    pub mood: Option<MoodId>,
}

/// Owns the mood of every day of a year.
///
/// Slots are indexed by zero-based day of year, so slot `i` always belongs to
/// the `i`-th date produced by [`generate_days`].
#[derive(Debug, Clone)]
pub struct DayMoodStore {
    year: Year,
    dates: Vec<NaiveDate>,
    moods: Vec<Option<MoodId>>,
}

impl DayMoodStore {
    /// Build an empty store for `year`, every day unset
    pub fn new(year: Year) -> Self {
        let dates = generate_days(year);
        let moods = vec![None; dates.len()];
        DayMoodStore { year, dates, moods }
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    fn index_of(&self, date: NaiveDate) -> Option<usize> {
        if self.year.contains(date) {
            Some(date.ordinal0() as usize)
        } else {
            None
        }
    }

    /// Mood of `date`, or `None` if the date is outside the year or unset
    pub fn get(&self, date: NaiveDate) -> Option<MoodId> {
        self.index_of(date).and_then(|i| self.moods[i])
    }

    /// Set the mood of `date`. Returns false if the date is not in this year.
    pub fn set(&mut self, date: NaiveDate, mood: Option<MoodId>) -> bool {
        match self.index_of(date) {
            Some(i) => {
                self.moods[i] = mood;
                true
            }
            None => false,
        }
    }

    /// Unset every day
    pub fn clear(&mut self) {
        self.moods.iter_mut().for_each(|m| *m = None);
    }

    /// Assign every day the mood produced by `next`, called once per day in order
    pub fn fill_with<F>(&mut self, mut next: F)
    where
        F: FnMut() -> MoodId,
    {
        for slot in self.moods.iter_mut() {
            *slot = Some(next());
        }
    }

    /// Snapshot of every day in chronological order
    pub fn days(&self) -> impl Iterator<Item = Day> + '_ {
        self.dates
            .iter()
            .zip(self.moods.iter())
            .map(|(date, mood)| Day {
                date: *date,
                mood: *mood,
            })
    }
}
