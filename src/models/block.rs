//! Match block model.
//!
//! A block is one contiguous window of qualification play. It carries the
//! raw inputs an organizer edits (start, end, matches per team) and the
//! outcome derived from them.
//!
//! # Derivation
//!
//! The outcome is either [`BlockOutcome::Valid`] with every derived field
//! populated, or [`BlockOutcome::Invalid`] with none. A block is never
//! partially derived.

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use super::TimeWindow;

/// Raw, possibly malformed inputs for a block.
///
/// `None` means the collaborator could not supply a well-formed value
/// (blank or unparseable field).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockInputs {
    /// Requested window start.
    pub start_time: Option<NaiveDateTime>,
    /// Requested window end.
    pub end_time: Option<NaiveDateTime>,
    /// Desired matches each team plays within the block.
    pub matches_per_team: Option<i64>,
}

impl BlockInputs {
    /// Creates fully specified inputs.
    pub fn new(start_time: NaiveDateTime, end_time: NaiveDateTime, matches_per_team: i64) -> Self {
        Self {
            start_time: Some(start_time),
            end_time: Some(end_time),
            matches_per_team: Some(matches_per_team),
        }
    }

    /// The requested window, if both instants are present.
    pub fn window(&self) -> Option<TimeWindow> {
        Some(TimeWindow::new(self.start_time?, self.end_time?))
    }
}

/// Caller-supplied starting point for a new block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHint {
    /// Start of the new block.
    pub start_time: NaiveDateTime,
    /// Matches per team; defaults to 1.
    pub matches_per_team: Option<i64>,
}

impl BlockHint {
    /// Creates a hint starting at the given instant.
    pub fn starting_at(start_time: NaiveDateTime) -> Self {
        Self {
            start_time,
            matches_per_team: None,
        }
    }

    /// Sets the matches per team.
    pub fn with_matches_per_team(mut self, matches_per_team: i64) -> Self {
        self.matches_per_team = Some(matches_per_team);
        self
    }
}

/// Derived timing of a valid block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTiming {
    /// Matches played in the block. Always at least 1.
    pub num_matches: u64,
    /// Whole seconds allotted to each match.
    pub cycle_secs: i64,
    /// `start + num_matches × cycle_secs`. Never after the requested end.
    pub actual_end_time: NaiveDateTime,
}

/// Result of calculating a block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockOutcome {
    /// Inputs were complete and consistent.
    Valid(BlockTiming),
    /// Inputs were missing, non-positive, or out of order.
    #[default]
    Invalid,
}

impl BlockOutcome {
    /// Timing, if valid.
    pub fn timing(&self) -> Option<&BlockTiming> {
        match self {
            Self::Valid(timing) => Some(timing),
            Self::Invalid => None,
        }
    }

    /// Whether the block produced a valid timing.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// A scheduling block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Block number; identity and ordering key.
    pub number: u32,
    /// Raw inputs as last edited.
    pub inputs: BlockInputs,
    /// Outcome derived from `inputs`.
    pub outcome: BlockOutcome,
}

impl Block {
    /// Creates an underived block. Run it through the calculator before use.
    pub fn new(number: u32, inputs: BlockInputs) -> Self {
        Self {
            number,
            inputs,
            outcome: BlockOutcome::Invalid,
        }
    }

    /// Matches in the block (0 when invalid).
    pub fn num_matches(&self) -> u64 {
        self.outcome.timing().map_or(0, |t| t.num_matches)
    }

    /// Seconds per match (0 when invalid).
    pub fn cycle_secs(&self) -> i64 {
        self.outcome.timing().map_or(0, |t| t.cycle_secs)
    }

    /// When the last match ends (`None` when invalid).
    pub fn actual_end_time(&self) -> Option<NaiveDateTime> {
        self.outcome.timing().map(|t| t.actual_end_time)
    }

    /// Unused time between the actual end and the requested end.
    ///
    /// Caused by flooring the cycle to whole seconds. `None` when invalid.
    pub fn slack(&self) -> Option<TimeDelta> {
        Some(self.inputs.end_time? - self.actual_end_time()?)
    }

    /// Window from requested start to actual end (`None` when invalid).
    pub fn scheduled_window(&self) -> Option<TimeWindow> {
        Some(TimeWindow::new(
            self.inputs.start_time?,
            self.actual_end_time()?,
        ))
    }

    /// Whether the block has a valid derived timing.
    pub fn is_valid(&self) -> bool {
        self.outcome.is_valid()
    }
}
