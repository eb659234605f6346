//! moodcal - Mood tracking calendar
//!
//! Renders a year of days as month grids, lets the user arm one of five moods
//! and paint days with it, and supports randomizing or clearing the whole year.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodcalError;
