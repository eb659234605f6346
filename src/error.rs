//! Error types for moodcal

use thiserror::Error;

/// Main error type for moodcal
#[derive(Debug, Error)]
pub enum MoodcalError {
    #[error("Unknown mood: {0}")]
    UnknownMoodId(String),

    #[error("Invalid year: {0}")]
    InvalidYear(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MoodcalError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodcalError::InvalidYear(_) => 2,
            MoodcalError::InvalidDate(_) => 3,
            MoodcalError::UnknownMoodId(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodcalError::UnknownMoodId(name) => {
                format!(
                    "Unknown mood: '{}'\n\n\
                    Valid moods:\n\
                    • laugh, smile, meh, frown, sad\n\
                    • none (disarm painting)\n\n\
                    Example: moodcal show --mood smile --paint 2024-03-01",
                    name
                )
            }
            MoodcalError::InvalidYear(input) => {
                format!(
                    "Invalid year: '{}'\n\n\
                    Years must be whole numbers between -200000 and 200000\n\
                    Example: moodcal --year 2024",
                    input
                )
            }
            MoodcalError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD (e.g., 2024-02-29)\n\
                    In an interactive session a bare day number (e.g., 14)\n\
                    refers to the month last shown",
                    input
                )
            }
            MoodcalError::InvalidMonth(input) => {
                format!(
                    "Invalid month: '{}'\n\n\
                    Use a month name (january, feb, ...) or a number from 1 to 12",
                    input
                )
            }
            MoodcalError::InvalidCommand(input) => {
                format!("Invalid command: '{}'\n\nType 'help' for a list of commands", input)
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodcalError
pub type Result<T> = std::result::Result<T, MoodcalError>;
