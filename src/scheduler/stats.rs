//! Event-wide match statistics.
//!
//! Summarizes how far the matches scheduled so far go toward giving every
//! team an equal number of matches.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total matches | Σ num_matches over all blocks |
//! | Matches per team | floor(total × 6 / teams) |
//! | Excess matches | total − ceil(matches_per_team × teams / 6) |
//! | Matches to next level | ceil((matches_per_team + 1) × teams / 6) − total |

use serde::{Deserialize, Serialize};

use crate::models::{Block, TeamCount};

/// Aggregate statistics across every block in a registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventStats {
    /// Matches across all blocks. Invalid blocks contribute 0.
    pub total_matches: u64,
    /// Matches every team is guaranteed to play.
    pub matches_per_team: u64,
    /// Matches beyond what the guaranteed level needs.
    pub excess_matches: u64,
    /// Additional matches required to raise the guarantee by one.
    pub matches_to_next_level: u64,
}

impl EventStats {
    /// Computes statistics from per-block match counts.
    pub fn calculate<I>(block_matches: I, team_count: TeamCount) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let total_matches: u64 = block_matches.into_iter().fold(0, u64::saturating_add);
        let matches_per_team = team_count.matches_per_team_for(total_matches);

        let guaranteed = team_count.matches_for(matches_per_team).unwrap_or(u64::MAX);
        let next_level = team_count
            .matches_for(matches_per_team.saturating_add(1))
            .unwrap_or(u64::MAX);

        Self {
            total_matches,
            matches_per_team,
            excess_matches: total_matches.saturating_sub(guaranteed),
            matches_to_next_level: next_level.saturating_sub(total_matches),
        }
    }

    /// Computes statistics over a set of blocks.
    pub fn from_blocks<'a, I>(blocks: I, team_count: TeamCount) -> Self
    where
        I: IntoIterator<Item = &'a Block>,
    {
        Self::calculate(blocks.into_iter().map(Block::num_matches), team_count)
    }
}
