//! Domain layer - Calendar model and mood catalog

pub mod calendar;
pub mod month;
pub mod mood;
pub mod store;
pub mod year;

pub use calendar::{MoodCalendar, MoodTally};
pub use month::{MonthView, MONTH_NAMES, WEEKDAY_LABELS};
pub use mood::{MoodId, Rgb, PALETTE, UNSET_COLOR};
pub use store::{Day, DayMoodStore};
pub use year::Year;
