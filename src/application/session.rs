//! Interactive session use case
//!
//! Turns text commands into [`CalendarEvent`]s and tells the caller what to
//! render next.

use super::events::{CalendarEvent, EventDispatcher};
use crate::domain::month::parse_month;
use crate::domain::{MoodId, Year};
use crate::error::{MoodcalError, Result};
use chrono::{Datelike, Month, NaiveDate};

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Year(Year),
    Mood(Option<MoodId>),
    Paint(DayRef),
    Random,
    Clear,
    Show(Option<Month>),
    Palette,
    Stats,
    Help,
    Quit,
}

/// A day as typed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayRef {
    /// Full date (YYYY-MM-DD)
    Date(NaiveDate),
    /// Day of the month last shown
    DayOfMonth(u32),
}

/// What the caller should display after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Re-render the whole year
    Year,
    /// Re-render a single month
    Month(Month),
    Palette,
    Stats,
    Help,
    /// Nothing changed
    Unchanged,
    Quit,
}

impl SessionCommand {
    /// Parse a command line
    pub fn parse(input: &str) -> Result<Self> {
        let mut parts = input.split_whitespace();
        let Some(head) = parts.next() else {
            return Err(MoodcalError::InvalidCommand(input.to_string()));
        };
        let arg = parts.next();
        if parts.next().is_some() {
            return Err(MoodcalError::InvalidCommand(input.to_string()));
        }

        match (head.to_lowercase().as_str(), arg) {
            ("year", Some(y)) => Ok(SessionCommand::Year(y.parse()?)),
            ("mood", Some(m)) => Ok(SessionCommand::Mood(MoodId::parse_optional(m)?)),
            ("paint", Some(d)) => Ok(SessionCommand::Paint(DayRef::parse(d)?)),
            ("random" | "randomize", None) => Ok(SessionCommand::Random),
            ("clear" | "reset", None) => Ok(SessionCommand::Clear),
            ("show", month) => Ok(SessionCommand::Show(month.map(parse_month).transpose()?)),
            ("palette", None) => Ok(SessionCommand::Palette),
            ("stats", None) => Ok(SessionCommand::Stats),
            ("help" | "?", None) => Ok(SessionCommand::Help),
            ("quit" | "exit" | "q", None) => Ok(SessionCommand::Quit),
            _ => Err(MoodcalError::InvalidCommand(input.to_string())),
        }
    }
}

impl DayRef {
    pub fn parse(input: &str) -> Result<Self> {
        if let Ok(day) = input.parse::<u32>() {
            return Ok(DayRef::DayOfMonth(day));
        }
        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map(DayRef::Date)
            .map_err(|_| MoodcalError::InvalidDate(input.to_string()))
    }
}

/// Interactive session over one calendar model
pub struct Session {
    dispatcher: EventDispatcher,
    focus: Month,
}

impl Session {
    pub fn new(dispatcher: EventDispatcher) -> Self {
        Session {
            dispatcher,
            focus: Month::January,
        }
    }

    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    /// Month that bare day numbers refer to
    pub fn focus(&self) -> Month {
        self.focus
    }

    /// Parse and apply one line of input
    pub fn execute_line(&mut self, line: &str) -> Result<Reply> {
        let command = SessionCommand::parse(line)?;
        self.execute(command)
    }

    pub fn execute(&mut self, command: SessionCommand) -> Result<Reply> {
        match command {
            SessionCommand::Year(year) => {
                self.dispatcher.dispatch(CalendarEvent::YearChange(year));
                Ok(Reply::Year)
            }
            SessionCommand::Mood(mood) => {
                self.dispatcher.dispatch(CalendarEvent::MoodSelect(mood));
                Ok(Reply::Palette)
            }
            SessionCommand::Paint(day) => {
                let date = self.resolve(day)?;
                if self.dispatcher.dispatch(CalendarEvent::DayClick(date)) {
                    self.focus = chrono_month(date);
                    Ok(Reply::Month(self.focus))
                } else {
                    Ok(Reply::Unchanged)
                }
            }
            SessionCommand::Random => {
                self.dispatcher.dispatch(CalendarEvent::RandomizeRequest);
                Ok(Reply::Year)
            }
            SessionCommand::Clear => {
                self.dispatcher.dispatch(CalendarEvent::ClearRequest);
                Ok(Reply::Year)
            }
            SessionCommand::Show(Some(month)) => {
                self.focus = month;
                Ok(Reply::Month(month))
            }
            SessionCommand::Show(None) => Ok(Reply::Year),
            SessionCommand::Palette => Ok(Reply::Palette),
            SessionCommand::Stats => Ok(Reply::Stats),
            SessionCommand::Help => Ok(Reply::Help),
            SessionCommand::Quit => Ok(Reply::Quit),
        }
    }

    fn resolve(&self, day: DayRef) -> Result<NaiveDate> {
        match day {
            DayRef::Date(date) => Ok(date),
            DayRef::DayOfMonth(d) => {
                let year = self.dispatcher.calendar().year().get();
                NaiveDate::from_ymd_opt(year, self.focus.number_from_month(), d).ok_or_else(
                    || {
                        MoodcalError::InvalidDate(format!(
                            "{} {} {}",
                            d,
                            self.focus.name(),
                            year
                        ))
                    },
                )
            }
        }
    }
}

fn chrono_month(date: NaiveDate) -> Month {
    Month::try_from(date.month() as u8).unwrap_or(Month::January)
}
