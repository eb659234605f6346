//! Configuration management

use crate::domain::{MoodId, Year};
use crate::error::{MoodcalError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "MOODCAL_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Year shown at startup, current year when absent
    pub year: Option<i32>,
    /// Draw cells with ANSI colors
    pub color: bool,
    /// Mood armed when an interactive session starts
    pub mood: Option<MoodId>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            year: None,
            color: true,
            mood: None,
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodcalError::Config(format!("Config file not found: {}", path.display()))
            } else {
                MoodcalError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            MoodcalError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Resolve config from an explicit path, then `MOODCAL_CONFIG`, then defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::resolve_from(explicit, from_env.as_deref())
    }

    fn resolve_from(explicit: Option<&Path>, from_env: Option<&Path>) -> Result<Self> {
        match explicit.or(from_env) {
            Some(path) => {
                log::info!("Loading config from {}", path.display());
                Self::load(path)
            }
            None => {
                log::info!("No config file given, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Configured start year, validated
    pub fn start_year(&self) -> Result<Option<Year>> {
        self.year.map(Year::new).transpose()
    }

    /// Whether color output is enabled, honoring `NO_COLOR`
    pub fn use_color(&self) -> bool {
        self.color && std::env::var_os("NO_COLOR").map_or(true, |v| v.is_empty())
    }
}
