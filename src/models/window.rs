//! Time window model.
//!
//! A window is the half-open interval [start, end) a block occupies on the
//! event's wall clock. All instants are local event time (`NaiveDateTime`);
//! the consumer decides which timezone that is.

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// A time interval [start, end).
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeWindow {
    /// Interval start (inclusive).
    pub start: NaiveDateTime,
    /// Interval end (exclusive).
    pub end: NaiveDateTime,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Elapsed time from start to end. Negative for reversed windows.
    #[inline]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Whether the end lies strictly after the start.
    ///
    /// A zero-length window is not forward.
    #[inline]
    pub fn is_forward(&self) -> bool {
        self.end > self.start
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}
