//! Mood calendar aggregate root

use super::mood::{display_color, MoodId, Rgb};
use super::month::{partition, MonthView};
use super::store::{Day, DayMoodStore};
use super::year::Year;
use chrono::{Month, NaiveDate};
use rand::Rng;

/// Count of days per mood for the selected year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoodTally {
    /// Indexed by [`MoodId::index`]
    pub per_mood: [usize; 5],
    pub unset: usize,
}

impl MoodTally {
    pub fn count(&self, mood: MoodId) -> usize {
        self.per_mood[mood.index()]
    }
}

/// The whole calendar model: selected year, day moods and the armed mood
#[derive(Debug, Clone)]
pub struct MoodCalendar {
    store: DayMoodStore,
    current_mood: Option<MoodId>,
}

impl MoodCalendar {
    pub fn new(year: Year) -> Self {
        MoodCalendar {
            store: DayMoodStore::new(year),
            current_mood: None,
        }
    }

    pub fn year(&self) -> Year {
        self.store.year()
    }

    /// Switch to `year`, discarding every mood assignment.
    /// The armed mood is kept.
    pub fn set_year(&mut self, year: Year) {
        log::debug!("Rebuilding calendar for {}", year);
        self.store = DayMoodStore::new(year);
    }

    pub fn current_mood(&self) -> Option<MoodId> {
        self.current_mood
    }

    /// Arm `mood` for painting, or disarm with `None`
    pub fn set_current_mood(&mut self, mood: Option<MoodId>) {
        self.current_mood = mood;
    }

    /// Paint `date` with the armed mood.
    ///
    /// Does nothing when no mood is armed; painting never clears a day.
    /// Returns whether the day was painted.
    pub fn paint_day(&mut self, date: NaiveDate) -> bool {
        let Some(mood) = self.current_mood else {
            log::debug!("No mood armed, ignoring click on {}", date);
            return false;
        };
        if !self.store.set(date, Some(mood)) {
            log::debug!("{} is outside {}, ignoring click", date, self.year());
            return false;
        }
        true
    }

    /// Unset every day and disarm the current mood
    pub fn clear_all(&mut self) {
        log::debug!("Clearing all moods for {}", self.year());
        self.store.clear();
        self.current_mood = None;
    }

    /// Give every day an independent uniformly random mood and disarm the current mood
    pub fn randomize_all(&mut self) {
        self.randomize_all_with(&mut rand::rng());
    }

    /// Same as [`randomize_all`](Self::randomize_all) with a caller-supplied random source
    pub fn randomize_all_with<R: Rng>(&mut self, rng: &mut R) {
        log::debug!("Randomizing all moods for {}", self.year());
        self.store
            .fill_with(|| MoodId::ALL[rng.random_range(0..MoodId::ALL.len())]);
        self.current_mood = None;
    }

    pub fn mood_on(&self, date: NaiveDate) -> Option<MoodId> {
        self.store.get(date)
    }

    /// Snapshot of all days in order
    pub fn days(&self) -> Vec<Day> {
        self.store.days().collect()
    }

    pub fn month_view(&self, month: Month) -> MonthView {
        partition(&self.days(), self.year(), month)
    }

    /// Display color of `date`'s cell
    pub fn display_color(&self, date: NaiveDate) -> Rgb {
        display_color(self.mood_on(date))
    }

    pub fn tally(&self) -> MoodTally {
        self.store
            .days()
            .fold(MoodTally::default(), |mut tally, day| {
                match day.mood {
                    Some(mood) => tally.per_mood[mood.index()] += 1,
                    None => tally.unset += 1,
                }
                tally
            })
    }
}
