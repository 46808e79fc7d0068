//! Team count model.
//!
//! The number of teams is fixed for an event and drives every match-count
//! formula together with [`TEAM_SLOTS_PER_MATCH`].

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Team slots consumed by one match (two alliances of three).
pub const TEAM_SLOTS_PER_MATCH: u64 = 6;

/// Number of teams competing at the event. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct TeamCount(u32);

impl TeamCount {
    /// Creates a team count, rejecting zero and negative values.
    pub fn new(count: i64) -> Result<Self> {
        u32::try_from(count)
            .ok()
            .filter(|&c| c > 0)
            .map(Self)
            .ok_or(ScheduleError::InvalidTeamCount(count))
    }

    /// Raw team count.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Matches needed for every team to play `matches_per_team` times:
    /// `ceil(matches_per_team × teams / 6)`.
    ///
    /// Returns `None` on arithmetic overflow.
    pub fn matches_for(self, matches_per_team: u64) -> Option<u64> {
        let slots = matches_per_team.checked_mul(u64::from(self.0))?;
        Some(slots.div_ceil(TEAM_SLOTS_PER_MATCH))
    }

    /// Largest matches-per-team level fully covered by `total_matches`:
    /// `floor(total_matches × 6 / teams)`.
    pub fn matches_per_team_for(self, total_matches: u64) -> u64 {
        total_matches.saturating_mul(TEAM_SLOTS_PER_MATCH) / u64::from(self.0)
    }
}

impl TryFrom<i64> for TeamCount {
    type Error = ScheduleError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<TeamCount> for i64 {
    fn from(count: TeamCount) -> Self {
        i64::from(count.0)
    }
}
