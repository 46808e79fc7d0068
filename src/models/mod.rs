//! Match-block domain models.
//!
//! Provides the data types exchanged between the organizer's editing
//! surface and the calculators.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `TeamCount` | Teams at the event (fixed) |
//! | `TimeWindow` | Half-open wall-clock interval |
//! | `BlockInputs` | Raw start / end / matches-per-team as edited |
//! | `Block` | Numbered block with its derived outcome |

mod block;
mod team;
mod window;

pub use block::{Block, BlockHint, BlockInputs, BlockOutcome, BlockTiming};
pub use team::{TeamCount, TEAM_SLOTS_PER_MATCH};
pub use window::TimeWindow;
