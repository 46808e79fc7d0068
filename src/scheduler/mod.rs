//! Block calculation, event statistics, and the session registry.
//!
//! # Flow
//!
//! An edit (add, update, delete) goes to [`BlockRegistry`], which runs
//! [`BlockCalculator`] on the touched block and then recomputes
//! [`EventStats`] over every block. On submission, [`ScheduleRequest::build`]
//! flattens the registry for the schedule generator.
//!
//! Everything is synchronous; the registry is mutated through `&mut self` by
//! a single owner.

mod calculator;
mod registry;
mod request;
mod stats;

pub use calculator::BlockCalculator;
pub use registry::{
    first_block_seed, following_block_seed, hinted_block_seed, BlockRegistry, BlockSeed,
};
pub use request::{ScheduleEntry, ScheduleRequest, FORM_TIME_FORMAT};
pub use stats::EventStats;
