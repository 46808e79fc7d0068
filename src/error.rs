//! Error types for match-block scheduling.
//!
//! The calculators themselves never fail: invalid block inputs degrade to
//! an invalid outcome. Errors only arise at the edges (configuration,
//! team count construction, addressing a block that does not exist).

use thiserror::Error;

/// Result type for match-block operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors raised outside the pure calculation path.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Team count must be a positive integer.
    #[error("Invalid team count: {0} (must be positive)")]
    InvalidTeamCount(i64),

    /// Default cycle time must be a positive number of seconds.
    #[error("Invalid default cycle: {0}s (must be positive)")]
    InvalidCycle(i64),

    /// No block with this number is registered.
    #[error("Unknown block: {0}")]
    UnknownBlock(u32),

    /// Configuration file could not be parsed.
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
