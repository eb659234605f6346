//! Application layer - Use cases and orchestration

pub mod events;
pub mod session;
pub mod show_calendar;

pub use events::{CalendarEvent, EventDispatcher};
pub use session::{Reply, Session, SessionCommand};
pub use show_calendar::{ShowCalendarService, ShowOptions};
