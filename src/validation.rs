//! Advisory checks over a block layout.
//!
//! Detects:
//! - Incomplete blocks (no derived timing; they will generate no matches)
//! - Blocks whose window starts before the previous block's last match ends
//!
//! Nothing here blocks submission. The registry and request builder accept
//! any mixture of valid and invalid blocks; these checks only surface what
//! an organizer probably wants to fix.

use crate::models::Block;
use crate::scheduler::BlockRegistry;

/// Validation result.
pub type ValidationResult = Result<(), Vec<BlockIssue>>;

/// A problem found in one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockIssue {
    /// Block the issue concerns.
    pub block_number: u32,
    /// Issue category.
    pub kind: BlockIssueKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of block issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockIssueKind {
    /// Inputs are missing or inconsistent; the block contributes no matches.
    Incomplete,
    /// Block starts before the previous valid block finishes.
    OverlapsPrevious,
}

impl BlockIssue {
    fn new(block_number: u32, kind: BlockIssueKind, message: impl Into<String>) -> Self {
        Self {
            block_number,
            kind,
            message: message.into(),
        }
    }
}

/// Checks every block in the registry.
///
/// # Returns
/// `Ok(())` if all blocks are valid and sequential, `Err(issues)` with all
/// detected issues otherwise.
pub fn check_blocks(registry: &BlockRegistry) -> ValidationResult {
    check_block_list(registry.blocks())
}

/// Checks blocks given in ascending number order.
pub fn check_block_list<'a, I>(blocks: I) -> ValidationResult
where
    I: IntoIterator<Item = &'a Block>,
{
    let mut issues = Vec::new();
    let mut previous: Option<&Block> = None;

    for block in blocks {
        let Some(window) = block.scheduled_window() else {
            issues.push(BlockIssue::new(
                block.number,
                BlockIssueKind::Incomplete,
                format!("Block {} has no valid timing and will produce no matches", block.number),
            ));
            continue;
        };

        if let Some(prev_window) = previous.and_then(Block::scheduled_window) {
            if window.overlaps(&prev_window) || window.start < prev_window.start {
                issues.push(BlockIssue::new(
                    block.number,
                    BlockIssueKind::OverlapsPrevious,
                    format!(
                        "Block {} starts at {} before block {} ends at {}",
                        block.number,
                        window.start,
                        previous.map_or(0, |p| p.number),
                        prev_window.end
                    ),
                ));
            }
        }
        previous = Some(block);
    }

    if issues.is_empty() {
        log::debug!("block layout passed all checks");
        Ok(())
    } else {
        log::debug!("block layout has {} issue(s)", issues.len());
        Err(issues)
    }
}
