//! Event configuration.
//!
//! Loaded once per editing session, typically from a TOML file:
//!
//! ```toml
//! team_count = 36
//! default_cycle_secs = 420      # optional, default 360
//! first_block_lead_hours = 2    # optional, default 1
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::models::TeamCount;

/// Cycle used to seed provisional end times when none can be inferred.
pub const DEFAULT_CYCLE_SECS: i64 = 360;

fn default_cycle_secs() -> i64 {
    DEFAULT_CYCLE_SECS
}

fn default_lead_hours() -> i64 {
    1
}

/// Event-wide settings for a scheduling session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventConfig {
    /// Teams competing. Must be positive.
    pub team_count: TeamCount,
    /// Seconds per match when seeding a new block without a prior cycle.
    #[serde(default = "default_cycle_secs")]
    pub default_cycle_secs: i64,
    /// Hours ahead of "now" the first block starts (before truncating to the hour).
    #[serde(default = "default_lead_hours")]
    pub first_block_lead_hours: i64,
}

impl EventConfig {
    /// Creates a configuration with default seeding parameters.
    pub fn new(team_count: TeamCount) -> Self {
        Self {
            team_count,
            default_cycle_secs: DEFAULT_CYCLE_SECS,
            first_block_lead_hours: default_lead_hours(),
        }
    }

    /// Sets the default cycle.
    pub fn with_default_cycle(mut self, secs: i64) -> Self {
        self.default_cycle_secs = secs;
        self
    }

    /// Sets the first-block lead time.
    pub fn with_first_block_lead(mut self, hours: i64) -> Self {
        self.first_block_lead_hours = hours;
        self
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loading event config from {}", path.as_ref().display());
        Self::from_toml_str(&source)
    }

    /// Checks settings that the type system does not.
    pub fn validate(&self) -> Result<()> {
        if self.default_cycle_secs <= 0 {
            log::warn!(
                "rejecting non-positive default cycle of {}s",
                self.default_cycle_secs
            );
            return Err(ScheduleError::InvalidCycle(self.default_cycle_secs));
        }
        Ok(())
    }
}
