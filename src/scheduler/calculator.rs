//! Per-block match calculation.
//!
//! # Algorithm
//!
//! Given a window [start, end) and a matches-per-team target:
//!
//! 1. `num_matches = ceil(matches_per_team × teams / 6)`
//! 2. `cycle_secs = floor((end − start) / num_matches)` in whole seconds
//! 3. `actual_end = start + num_matches × cycle_secs`
//!
//! The floor in step 2 can leave the actual end short of the requested end.
//! That slack is reported through [`Block::slack`](crate::models::Block::slack)
//! and never redistributed.

use chrono::TimeDelta;

use crate::models::{BlockInputs, BlockOutcome, BlockTiming, TeamCount};

const MILLIS_PER_SEC: i64 = 1000;

/// Computes match count, cycle, and actual end for a single block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockCalculator {
    team_count: TeamCount,
}

impl BlockCalculator {
    /// Creates a calculator for an event with the given team count.
    pub fn new(team_count: TeamCount) -> Self {
        Self { team_count }
    }

    /// Team count this calculator was built for.
    pub fn team_count(&self) -> TeamCount {
        self.team_count
    }

    /// Calculates a block's outcome from its raw inputs.
    ///
    /// Returns [`BlockOutcome::Invalid`] if matches per team is missing or
    /// non-positive, either instant is missing, or the end is not strictly
    /// after the start.
    pub fn calculate(&self, inputs: &BlockInputs) -> BlockOutcome {
        let Some(mpt) = inputs.matches_per_team.filter(|&m| m > 0) else {
            return BlockOutcome::Invalid;
        };
        let Some(window) = inputs.window().filter(|w| w.is_forward()) else {
            return BlockOutcome::Invalid;
        };
        // mpt > 0, so the cast is lossless
        let Some(num_matches) = self.team_count.matches_for(mpt as u64) else {
            return BlockOutcome::Invalid;
        };
        let Ok(divisor) = i64::try_from(num_matches) else {
            return BlockOutcome::Invalid;
        };

        let total_ms = window.duration().num_milliseconds();
        let cycle_secs = total_ms / MILLIS_PER_SEC / divisor;

        let actual_end_time = divisor
            .checked_mul(cycle_secs)
            .and_then(TimeDelta::try_seconds)
            .and_then(|span| window.start.checked_add_signed(span));
        let Some(actual_end_time) = actual_end_time else {
            return BlockOutcome::Invalid;
        };

        BlockOutcome::Valid(BlockTiming {
            num_matches,
            cycle_secs,
            actual_end_time,
        })
    }
}
