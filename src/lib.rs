//! Qualification match-block calculator.
//!
//! Lays out the time blocks in which a robotics competition's qualification
//! matches are played and computes, per block and for the event, how many
//! matches fit and how tightly they are spaced.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `TeamCount`, `TimeWindow`, `BlockInputs`, `Block`
//! - **`scheduler`**: `BlockCalculator`, `EventStats`, `BlockRegistry`, `ScheduleRequest`
//! - **`validation`**: Advisory layout checks (incomplete and overlapping blocks)
//! - **`config`**: `EventConfig`, loaded from TOML
//! - **`clock`**: Wall-clock seam for placing the first block
//! - **`error`**: `ScheduleError`
//!
//! # Example
//!
//! ```
//! use match_blocks::config::EventConfig;
//! use match_blocks::scheduler::{BlockRegistry, ScheduleRequest};
//!
//! let config = EventConfig::from_toml_str("team_count = 24").unwrap();
//! let mut registry = BlockRegistry::new(config);
//! registry.add_block(None);
//! registry.add_block(None);
//!
//! // 4 matches per block at the default 6:00 cycle
//! assert_eq!(registry.stats().total_matches, 8);
//! assert_eq!(registry.stats().matches_per_team, 2);
//!
//! let request = ScheduleRequest::build(&registry);
//! assert_eq!(request.len(), 2);
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Result, ScheduleError};
