//! Schedule generation request.
//!
//! Flattens a registry into the ordered list of per-block records handed to
//! the schedule generator. No validation happens here: an invalid block is
//! submitted with zero matches and zero cycle, which the generator treats as
//! "no matches for this block".

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::BlockRegistry;

/// Start-time layout expected by the generate endpoint's form fields.
pub const FORM_TIME_FORMAT: &str = "%Y-%m-%d %I:%M:%S %p";

/// One block's contribution to a schedule generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Requested block start.
    pub start_time: Option<NaiveDateTime>,
    /// Matches to generate (0 for an invalid block).
    pub num_matches: u64,
    /// Seconds between match starts (0 for an invalid block).
    pub cycle_secs: i64,
    /// Matches per team as entered.
    pub matches_per_team: Option<i64>,
}

/// Ordered payload for the schedule generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Entries in ascending block-number order.
    pub blocks: Vec<ScheduleEntry>,
    /// Number of entries.
    pub num_schedule_blocks: usize,
}

impl ScheduleRequest {
    /// Builds a request from the registry's current state.
    pub fn build(registry: &BlockRegistry) -> Self {
        let blocks: Vec<ScheduleEntry> = registry
            .blocks()
            .map(|block| ScheduleEntry {
                start_time: block.inputs.start_time,
                num_matches: block.num_matches(),
                cycle_secs: block.cycle_secs(),
                matches_per_team: block.inputs.matches_per_team,
            })
            .collect();

        log::debug!("built schedule request with {} blocks", blocks.len());
        Self {
            num_schedule_blocks: blocks.len(),
            blocks,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.num_schedule_blocks
    }

    /// Whether the request has no entries.
    pub fn is_empty(&self) -> bool {
        self.num_schedule_blocks == 0
    }

    /// Total matches across all entries.
    pub fn total_matches(&self) -> u64 {
        self.blocks.iter().map(|e| e.num_matches).sum()
    }

    /// Encodes the request as form fields.
    ///
    /// Entry `i` produces `startTime{i}`, `numMatches{i}`,
    /// `matchSpacingSec{i}`, and `matchesPerTeam{i}`; a final
    /// `numScheduleBlocks` carries the count. Missing values encode as an
    /// empty string.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = Vec::with_capacity(self.blocks.len() * 4 + 1);
        for (i, entry) in self.blocks.iter().enumerate() {
            let start = entry
                .start_time
                .map(|t| t.format(FORM_TIME_FORMAT).to_string())
                .unwrap_or_default();
            let mpt = entry
                .matches_per_team
                .map(|m| m.to_string())
                .unwrap_or_default();

            fields.push((format!("startTime{i}"), start));
            fields.push((format!("numMatches{i}"), entry.num_matches.to_string()));
            fields.push((format!("matchSpacingSec{i}"), entry.cycle_secs.to_string()));
            fields.push((format!("matchesPerTeam{i}"), mpt));
        }
        fields.push((
            "numScheduleBlocks".to_string(),
            self.num_schedule_blocks.to_string(),
        ));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::EventConfig;
    use crate::models::{BlockInputs, TeamCount};
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .unwrap()
    }

    fn sample_registry() -> BlockRegistry {
        let config = EventConfig::new(TeamCount::new(24).unwrap());
        let mut reg = BlockRegistry::with_clock(config, FixedClock(at(7, 10, 0)));
        reg.add_block(None);
        reg.add_block(None);
        reg.add_block(None);
        reg.update_block(1, BlockInputs::new(at(8, 0, 0), at(9, 0, 0), 1))
            .unwrap();
        reg.update_block(2, BlockInputs::new(at(13, 0, 0), at(15, 0, 0), 2))
            .unwrap();
        reg.update_block(3, BlockInputs::new(at(16, 0, 0), at(15, 0, 0), 1))
            .unwrap();
        reg
    }

    #[test]
    fn test_build_orders_by_number() {
        let mut reg = sample_registry();
        reg.delete_block(1);
        let request = ScheduleRequest::build(&reg);

        assert_eq!(request.len(), 2);
        assert_eq!(request.blocks[0].start_time, Some(at(13, 0, 0)));
        assert_eq!(request.blocks[1].start_time, Some(at(16, 0, 0)));
    }

    #[test]
    fn test_build_includes_invalid_blocks_as_zero() {
        let request = ScheduleRequest::build(&sample_registry());
        assert_eq!(request.num_schedule_blocks, 3);

        assert_eq!(request.blocks[0].num_matches, 4);
        assert_eq!(request.blocks[0].cycle_secs, 900);
        assert_eq!(request.blocks[1].num_matches, 8);
        assert_eq!(request.blocks[1].cycle_secs, 900);

        let invalid = &request.blocks[2];
        assert_eq!(invalid.num_matches, 0);
        assert_eq!(invalid.cycle_secs, 0);
        assert_eq!(invalid.matches_per_team, Some(1));

        assert_eq!(request.total_matches(), 12);
    }

    #[test]
    fn test_build_empty() {
        let reg = BlockRegistry::with_clock(
            EventConfig::new(TeamCount::new(24).unwrap()),
            FixedClock(at(7, 0, 0)),
        );
        let request = ScheduleRequest::build(&reg);
        assert!(request.is_empty());
        assert_eq!(
            request.form_fields(),
            vec![("numScheduleBlocks".to_string(), "0".to_string())]
        );
    }

    #[test]
    fn test_form_fields() {
        let request = ScheduleRequest::build(&sample_registry());
        let fields = request.form_fields();
        assert_eq!(fields.len(), 13);

        let get = |name: &str| {
            fields
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("startTime0"), Some("2024-03-09 08:00:00 AM"));
        assert_eq!(get("startTime1"), Some("2024-03-09 01:00:00 PM"));
        assert_eq!(get("numMatches1"), Some("8"));
        assert_eq!(get("matchSpacingSec1"), Some("900"));
        assert_eq!(get("matchesPerTeam1"), Some("2"));
        assert_eq!(get("numMatches2"), Some("0"));
        assert_eq!(get("numScheduleBlocks"), Some("3"));
        assert_eq!(fields.last().map(|(k, _)| k.as_str()), Some("numScheduleBlocks"));
    }

    #[test]
    fn test_request_json() {
        let request = ScheduleRequest::build(&sample_registry());
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["num_schedule_blocks"], 3);
        assert_eq!(json["blocks"][0]["num_matches"], 4);
        assert_eq!(json["blocks"][0]["start_time"], "2024-03-09T08:00:00");
        assert_eq!(json["blocks"][2]["cycle_secs"], 0);
    }
}
