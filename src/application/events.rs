//! Display events and the dispatcher that applies them to the model

use crate::domain::{MonthView, MoodCalendar, MoodId, Rgb, Year};
use chrono::{Month, NaiveDate};

/// Events a display layer reports back into the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarEvent {
    YearChange(Year),
    MoodSelect(Option<MoodId>),
    DayClick(NaiveDate),
    RandomizeRequest,
    ClearRequest,
}

/// Single owner of the calendar model.
///
/// All mutation goes through [`dispatch`](Self::dispatch); the display layer
/// reads back through the query methods.
pub struct EventDispatcher {
    calendar: MoodCalendar,
}

impl EventDispatcher {
    pub fn new(calendar: MoodCalendar) -> Self {
        EventDispatcher { calendar }
    }

    /// Apply `event` and report whether the view needs re-rendering
    pub fn dispatch(&mut self, event: CalendarEvent) -> bool {
        log::debug!("Dispatching {:?}", event);
        match event {
            CalendarEvent::YearChange(year) => {
                self.calendar.set_year(year);
                true
            }
            CalendarEvent::MoodSelect(mood) => {
                self.calendar.set_current_mood(mood);
                true
            }
            CalendarEvent::DayClick(date) => self.calendar.paint_day(date),
            CalendarEvent::RandomizeRequest => {
                self.calendar.randomize_all();
                true
            }
            CalendarEvent::ClearRequest => {
                self.calendar.clear_all();
                true
            }
        }
    }

    pub fn calendar(&self) -> &MoodCalendar {
        &self.calendar
    }

    /// Mutable access for callers that supply their own random source
    pub fn calendar_mut(&mut self) -> &mut MoodCalendar {
        &mut self.calendar
    }

    pub fn month_view(&self, month: Month) -> MonthView {
        self.calendar.month_view(month)
    }

    pub fn display_color(&self, date: NaiveDate) -> Rgb {
        self.calendar.display_color(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UNSET_COLOR;

    fn dispatcher(y: i32) -> EventDispatcher {
        EventDispatcher::new(MoodCalendar::new(Year::new(y).unwrap()))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_click_flow() {
        let mut d = dispatcher(2023);
        let day = date(2023, 6, 1);

        assert!(!d.dispatch(CalendarEvent::DayClick(day)));
        assert_eq!(d.display_color(day), UNSET_COLOR);

        assert!(d.dispatch(CalendarEvent::MoodSelect(Some(MoodId::Smile))));
        assert!(d.dispatch(CalendarEvent::DayClick(day)));
        assert_eq!(d.display_color(day).to_string(), "#72e3a6");
    }

    #[test]
    fn test_year_change_resets_view() {
        let mut d = dispatcher(2024);
        d.dispatch(CalendarEvent::RandomizeRequest);
        d.dispatch(CalendarEvent::YearChange(Year::new(2023).unwrap()));
        let feb = d.month_view(Month::February);
        assert_eq!(feb.days.len(), 28);
        assert!(feb.days.iter().all(|day| day.mood.is_none()));
    }

    #[test]
    fn test_clear_request_disarms() {
        let mut d = dispatcher(2023);
        d.dispatch(CalendarEvent::MoodSelect(Some(MoodId::Sad)));
        d.dispatch(CalendarEvent::DayClick(date(2023, 1, 1)));
        assert!(d.dispatch(CalendarEvent::ClearRequest));
        assert_eq!(d.calendar().current_mood(), None);
        assert_eq!(d.calendar().mood_on(date(2023, 1, 1)), None);
    }

    #[test]
    fn test_randomize_request_fills_every_day() {
        let mut d = dispatcher(2023);
        d.dispatch(CalendarEvent::MoodSelect(Some(MoodId::Laugh)));
        assert!(d.dispatch(CalendarEvent::RandomizeRequest));
        assert_eq!(d.calendar().tally().unset, 0);
        assert_eq!(d.calendar().current_mood(), None);
    }
}
