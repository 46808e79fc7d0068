//! Property tests for block calculation and event statistics.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use match_blocks::clock::FixedClock;
use match_blocks::config::EventConfig;
use match_blocks::models::{BlockInputs, TeamCount};
use match_blocks::scheduler::{BlockCalculator, BlockRegistry, EventStats};
use proptest::prelude::*;

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 9)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap()
}

fn registry(teams: i64) -> BlockRegistry {
    let config = EventConfig::new(TeamCount::new(teams).unwrap());
    BlockRegistry::with_clock(config, FixedClock(base()))
}

proptest! {
    #[test]
    fn match_count_is_at_least_one(mpt in 1u64..50, teams in 1i64..200) {
        let teams = TeamCount::new(teams).unwrap();
        let n = teams.matches_for(mpt).unwrap();
        prop_assert!(n >= 1);
        prop_assert_eq!(n, (mpt * u64::from(teams.get()) + 5) / 6);
    }

    #[test]
    fn actual_end_never_exceeds_requested(
        mpt in 1i64..10,
        teams in 1i64..100,
        window_secs in 1i64..36_000,
    ) {
        let calc = BlockCalculator::new(TeamCount::new(teams).unwrap());
        let end = base() + TimeDelta::seconds(window_secs);
        let outcome = calc.calculate(&BlockInputs::new(base(), end, mpt));
        let timing = outcome.timing().unwrap();

        prop_assert!(timing.actual_end_time <= end);
        let exact = window_secs % timing.num_matches as i64 == 0;
        prop_assert_eq!(timing.actual_end_time == end, exact);
        prop_assert_eq!(timing.cycle_secs, window_secs / timing.num_matches as i64);
    }

    #[test]
    fn non_forward_window_is_invalid(
        mpt in 1i64..10,
        teams in 1i64..100,
        back_secs in 0i64..36_000,
    ) {
        let calc = BlockCalculator::new(TeamCount::new(teams).unwrap());
        let end = base() - TimeDelta::seconds(back_secs);
        let outcome = calc.calculate(&BlockInputs::new(base(), end, mpt));
        prop_assert!(!outcome.is_valid());
    }

    #[test]
    fn stats_levels_bracket_total(total in 0u64..10_000, teams in 1i64..500) {
        let teams = TeamCount::new(teams).unwrap();
        let stats = EventStats::calculate([total], teams);

        let guaranteed = teams.matches_for(stats.matches_per_team).unwrap();
        let next = teams.matches_for(stats.matches_per_team + 1).unwrap();
        prop_assert!(guaranteed <= total);
        prop_assert!(next >= total);
        prop_assert_eq!(stats.excess_matches, total - guaranteed);
        prop_assert_eq!(stats.matches_to_next_level, next - total);
    }

    #[test]
    fn update_is_idempotent(
        mpt in -2i64..6,
        teams in 1i64..80,
        window_secs in -600i64..20_000,
    ) {
        let mut reg = registry(teams);
        reg.add_block(None);
        reg.add_block(None);
        let inputs = BlockInputs::new(base(), base() + TimeDelta::seconds(window_secs), mpt);

        let first = reg.update_block(2, inputs).unwrap().clone();
        let first_stats = *reg.stats();
        let second = reg.update_block(2, inputs).unwrap().clone();

        prop_assert_eq!(first, second);
        prop_assert_eq!(first_stats, *reg.stats());
    }

    #[test]
    fn delete_removes_exact_contribution(
        mpts in proptest::collection::vec(0i64..5, 1..8),
        teams in 1i64..80,
        victim in 0usize..8,
    ) {
        let mut reg = registry(teams);
        for (i, &mpt) in mpts.iter().enumerate() {
            let number = reg.add_block(None);
            let start = base() + TimeDelta::hours(i as i64);
            reg.update_block(number, BlockInputs::new(start, start + TimeDelta::minutes(50), mpt))
                .unwrap();
        }

        let number = (victim % mpts.len()) as u32 + 1;
        let before = reg.stats().total_matches;
        let removed = reg.delete_block(number).unwrap();
        prop_assert_eq!(before - reg.stats().total_matches, removed.num_matches());
    }
}

#[test]
fn scenario_twenty_four_teams() {
    let mut reg = registry(24);
    reg.add_block(None);
    let block = reg
        .update_block(1, BlockInputs::new(base(), base() + TimeDelta::seconds(3600), 1))
        .unwrap();
    assert_eq!(block.num_matches(), 4);
    assert_eq!(block.cycle_secs(), 900);
    assert_eq!(block.actual_end_time(), Some(base() + TimeDelta::seconds(3600)));
}

#[test]
fn scenario_twenty_five_teams() {
    let mut reg = registry(25);
    reg.add_block(None);
    let block = reg
        .update_block(1, BlockInputs::new(base(), base() + TimeDelta::seconds(1000), 1))
        .unwrap();
    assert_eq!(block.num_matches(), 5);
    assert_eq!(block.cycle_secs(), 200);
    assert_eq!(block.slack(), Some(TimeDelta::zero()));
}

#[test]
fn scenario_aggregate_and_invalid_block() {
    let mut reg = registry(24);
    reg.add_block(None);
    reg.add_block(None);
    reg.add_block(None);
    // 4 + 8 matches; 24 teams always yield multiples of 4 per block
    reg.update_block(1, BlockInputs::new(base(), base() + TimeDelta::hours(1), 1))
        .unwrap();
    reg.update_block(2, BlockInputs::new(base(), base() + TimeDelta::hours(1), 2))
        .unwrap();
    let invalid = reg
        .update_block(3, BlockInputs::new(base(), base() + TimeDelta::hours(1), 0))
        .unwrap();
    assert_eq!(invalid.num_matches(), 0);
    assert_eq!(invalid.cycle_secs(), 0);
    assert_eq!(invalid.actual_end_time(), None);

    let stats = reg.stats();
    assert_eq!(stats.total_matches, 12);
    assert_eq!(stats.matches_per_team, 3);
    assert_eq!(stats.excess_matches, 0);
    assert_eq!(stats.matches_to_next_level, 4);

    let teams = TeamCount::new(24).unwrap();
    let stats = EventStats::calculate([4, 5], teams);
    assert_eq!(
        (
            stats.total_matches,
            stats.matches_per_team,
            stats.excess_matches,
            stats.matches_to_next_level
        ),
        (9, 2, 1, 3)
    );
}
