//! Non-interactive show use case

use super::events::{CalendarEvent, EventDispatcher};
use crate::domain::{MoodCalendar, MoodId, Year};
use crate::error::{MoodcalError, Result};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// How to populate the calendar before it is shown
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    pub randomize: bool,
    /// Seed for a reproducible randomize
    pub seed: Option<u64>,
    /// Mood armed before painting `paint`
    pub mood: Option<MoodId>,
    pub paint: Vec<NaiveDate>,
}

/// Builds a calendar for one-shot display
pub struct ShowCalendarService;

impl ShowCalendarService {
    pub fn execute(year: Year, options: &ShowOptions) -> Result<EventDispatcher> {
        if !options.paint.is_empty() && options.mood.is_none() {
            return Err(MoodcalError::Config(
                "--paint requires --mood to choose the color".to_string(),
            ));
        }
        if let Some(date) = options.paint.iter().find(|d| !year.contains(**d)) {
            return Err(MoodcalError::InvalidDate(format!(
                "{} is not in {}",
                date, year
            )));
        }

        let mut dispatcher = EventDispatcher::new(MoodCalendar::new(year));

        if options.randomize {
            match options.seed {
                Some(seed) => dispatcher
                    .calendar_mut()
                    .randomize_all_with(&mut StdRng::seed_from_u64(seed)),
                None => {
                    dispatcher.dispatch(CalendarEvent::RandomizeRequest);
                }
            }
        }

        if let Some(mood) = options.mood {
            dispatcher.dispatch(CalendarEvent::MoodSelect(Some(mood)));
            for date in &options.paint {
                dispatcher.dispatch(CalendarEvent::DayClick(*date));
            }
        }

        Ok(dispatcher)
    }
}
