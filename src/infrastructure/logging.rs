//! Logger setup

use crate::error::{MoodcalError, Result};
use flexi_logger::{Logger, LoggerHandle};

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Start logging to stderr. The level comes from `RUST_LOG`, defaulting to warn.
///
/// The returned handle must be kept alive for the lifetime of the program.
pub fn init_logger() -> Result<LoggerHandle> {
    Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)
        .and_then(|logger| logger.log_to_stderr().start())
        .map_err(|e| MoodcalError::Config(format!("Failed to start logger: {}", e)))
}
