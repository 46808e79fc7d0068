//! Block registry.
//!
//! Owns the blocks of one editing session, keyed and ordered by block
//! number. Every mutation recalculates the touched block and then the
//! event statistics, so readers always see a consistent view.
//!
//! # Default placement
//!
//! A block added without a hint is seeded from its predecessor:
//! - no predecessor: [`first_block_seed`] (next whole hour, 1 match per team,
//!   default cycle)
//! - predecessor: [`following_block_seed`] (starts at its actual end, reuses
//!   its matches per team and effective cycle)

use std::collections::BTreeMap;

use chrono::{DurationRound, NaiveDateTime, TimeDelta};

use crate::clock::{Clock, SystemClock};
use crate::config::EventConfig;
use crate::error::{Result, ScheduleError};
use crate::models::{Block, BlockHint, BlockInputs, TeamCount};

use super::{BlockCalculator, EventStats};

/// Starting inputs for a newly added block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSeed {
    /// Start of the new block.
    pub start_time: NaiveDateTime,
    /// Provisional end, sized to fit the matches at the seeding cycle.
    pub end_time: NaiveDateTime,
    /// Matches per team.
    pub matches_per_team: i64,
}

impl BlockSeed {
    /// Seeds a block of `matches_per_team` starting at `start_time`, spaced at `cycle_secs`.
    pub fn sized(
        start_time: NaiveDateTime,
        matches_per_team: i64,
        cycle_secs: i64,
        team_count: TeamCount,
    ) -> Self {
        let span = u64::try_from(matches_per_team)
            .ok()
            .and_then(|m| team_count.matches_for(m))
            .and_then(|n| i64::try_from(n).ok())
            .and_then(|n| n.checked_mul(cycle_secs))
            .and_then(TimeDelta::try_seconds);
        let end_time = span
            .and_then(|span| start_time.checked_add_signed(span))
            .unwrap_or(start_time);

        Self {
            start_time,
            end_time,
            matches_per_team,
        }
    }

    /// Converts the seed into block inputs.
    pub fn into_inputs(self) -> BlockInputs {
        BlockInputs::new(self.start_time, self.end_time, self.matches_per_team)
    }
}

/// Seed for the first block of a session.
///
/// Starts `first_block_lead_hours` after `now`, truncated to the hour, with
/// one match per team at the default cycle.
pub fn first_block_seed(now: NaiveDateTime, config: &EventConfig) -> BlockSeed {
    let shifted = TimeDelta::try_hours(config.first_block_lead_hours)
        .and_then(|lead| now.checked_add_signed(lead))
        .unwrap_or(now);
    let start_time = shifted
        .duration_trunc(TimeDelta::hours(1))
        .unwrap_or(shifted);

    log::trace!("seeding first block at {start_time}");
    BlockSeed::sized(start_time, 1, config.default_cycle_secs, config.team_count)
}

/// Seed for a block that follows `previous`.
///
/// Starts at the previous block's actual end and reuses its matches per
/// team as entered (1 only when blank) and its effective cycle (elapsed
/// seconds / matches, floored; the default cycle if it had no matches).
/// Falls back to the previous block's requested end when it has no actual
/// end. A non-positive matches per team carries over, so the new block
/// starts out invalid just like its predecessor.
///
/// Returns `None` when `previous` has no usable instant to start from.
pub fn following_block_seed(previous: &Block, config: &EventConfig) -> Option<BlockSeed> {
    let start_time = previous
        .actual_end_time()
        .or(previous.inputs.end_time)?;

    let matches_per_team = previous.inputs.matches_per_team.unwrap_or(1);

    let cycle_secs = match (previous.inputs.window(), previous.num_matches()) {
        (Some(window), matches) if matches > 0 => {
            let elapsed = window.duration().num_seconds();
            i64::try_from(matches).map_or(config.default_cycle_secs, |m| elapsed / m)
        }
        _ => config.default_cycle_secs,
    };

    log::trace!(
        "seeding block after #{} at {start_time} ({cycle_secs}s cycle)",
        previous.number
    );
    Some(BlockSeed::sized(
        start_time,
        matches_per_team,
        cycle_secs,
        config.team_count,
    ))
}

/// Seed for a block placed explicitly by the caller.
///
/// A missing or zero matches per team becomes 1.
pub fn hinted_block_seed(hint: &BlockHint, config: &EventConfig) -> BlockSeed {
    BlockSeed::sized(
        hint.start_time,
        hint.matches_per_team.filter(|&m| m != 0).unwrap_or(1),
        config.default_cycle_secs,
        config.team_count,
    )
}

/// Ordered set of blocks for one scheduling session.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use match_blocks::config::EventConfig;
/// use match_blocks::models::{BlockHint, BlockInputs, TeamCount};
/// use match_blocks::scheduler::BlockRegistry;
///
/// let nine = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let ten = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap().and_hms_opt(10, 0, 0).unwrap();
///
/// let mut registry = BlockRegistry::new(EventConfig::new(TeamCount::new(24).unwrap()));
/// let number = registry.add_block(Some(BlockHint::starting_at(nine)));
/// registry.update_block(number, BlockInputs::new(nine, ten, 1)).unwrap();
///
/// let block = registry.get(number).unwrap();
/// assert_eq!(block.num_matches(), 4);
/// assert_eq!(block.cycle_secs(), 900);
/// assert_eq!(registry.stats().total_matches, 4);
/// ```
#[derive(Debug)]
pub struct BlockRegistry {
    config: EventConfig,
    calculator: BlockCalculator,
    blocks: BTreeMap<u32, Block>,
    stats: EventStats,
    clock: Box<dyn Clock>,
}

impl BlockRegistry {
    /// Creates an empty registry using the system clock.
    pub fn new(config: EventConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Creates an empty registry with a custom clock.
    pub fn with_clock(config: EventConfig, clock: impl Clock + 'static) -> Self {
        let calculator = BlockCalculator::new(config.team_count);
        let stats = EventStats::calculate([], config.team_count);
        Self {
            config,
            calculator,
            blocks: BTreeMap::new(),
            stats,
            clock: Box::new(clock),
        }
    }

    /// Session configuration.
    pub fn config(&self) -> &EventConfig {
        &self.config
    }

    /// Team count for the event.
    pub fn team_count(&self) -> TeamCount {
        self.config.team_count
    }

    /// Adds a block and returns its number.
    ///
    /// With a hint, the block starts at the hinted time. Without one it is
    /// seeded from the highest-numbered block, or placed as the first block
    /// of the session if the registry is empty.
    pub fn add_block(&mut self, hint: Option<BlockHint>) -> u32 {
        let seed = match hint {
            Some(hint) => hinted_block_seed(&hint, &self.config),
            None => self.inferred_seed(),
        };

        let number = self.last_block_number() + 1;
        let mut block = Block::new(number, seed.into_inputs());
        block.outcome = self.calculator.calculate(&block.inputs);
        log::debug!(
            "added block #{number}: {} matches, {}s cycle",
            block.num_matches(),
            block.cycle_secs()
        );

        self.blocks.insert(number, block);
        self.refresh_stats();
        number
    }

    /// Overwrites a block's inputs and recalculates it.
    ///
    /// # Errors
    /// [`ScheduleError::UnknownBlock`] if no block has this number.
    pub fn update_block(&mut self, number: u32, inputs: BlockInputs) -> Result<&Block> {
        let block = self
            .blocks
            .get_mut(&number)
            .ok_or(ScheduleError::UnknownBlock(number))?;

        block.inputs = inputs;
        block.outcome = self.calculator.calculate(&block.inputs);
        log::debug!(
            "updated block #{number}: valid={}, {} matches, {}s cycle",
            block.is_valid(),
            block.num_matches(),
            block.cycle_secs()
        );

        self.refresh_stats();
        Ok(&self.blocks[&number])
    }

    /// Removes a block. Unknown numbers are ignored.
    ///
    /// Returns the removed block, if any.
    pub fn delete_block(&mut self, number: u32) -> Option<Block> {
        let removed = self.blocks.remove(&number);
        if removed.is_none() {
            log::warn!("delete of unknown block #{number} ignored");
        }
        self.refresh_stats();
        removed
    }

    /// Highest block number in use, or 0 if empty.
    pub fn last_block_number(&self) -> u32 {
        self.blocks.keys().next_back().copied().unwrap_or(0)
    }

    /// Looks up a block by number.
    pub fn get(&self, number: u32) -> Option<&Block> {
        self.blocks.get(&number)
    }

    /// Blocks in ascending number order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.values()
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the registry has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Current event statistics.
    pub fn stats(&self) -> &EventStats {
        &self.stats
    }

    fn inferred_seed(&self) -> BlockSeed {
        self.blocks
            .values()
            .next_back()
            .and_then(|previous| following_block_seed(previous, &self.config))
            .unwrap_or_else(|| first_block_seed(self.clock.now(), &self.config))
    }

    fn refresh_stats(&mut self) {
        self.stats = EventStats::from_blocks(self.blocks.values(), self.config.team_count);
        log::debug!(
            "event stats: {} matches, {} per team, {} excess, {} to next level",
            self.stats.total_matches,
            self.stats.matches_per_team,
            self.stats.excess_matches,
            self.stats.matches_to_next_level
        );
    }
}
