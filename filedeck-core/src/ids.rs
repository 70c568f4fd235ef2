//! Id generation and the wall clock used for record timestamps.
//!
//! Both are injected into the store so tests get deterministic ids and times.

use filedeck_common::FileId;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of wall-clock time in milliseconds since epoch.
pub type WallClock = Box<dyn Fn() -> u64 + Send + Sync>;

/// Produces ids for new records.
///
/// Implementations must never return the same id twice. The store also
/// skips any id already present in the list, so a generator only has to be
/// unique with respect to itself.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> FileId;
}

/// Strictly increasing counter.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> FileId {
        let id = self.next;
        self.next += 1;
        FileId(id)
    }
}

/// Ids derived from wall-clock milliseconds.
///
/// Two calls within the same millisecond (or a clock that steps backwards)
/// get `last + 1`, so the sequence is strictly increasing.
pub struct ClockIds {
    last: u64,
    wall_clock: WallClock,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::with_wall_clock(Box::new(wall_clock_ms))
    }

    pub fn with_wall_clock(wall_clock: WallClock) -> Self {
        Self {
            last: 0,
            wall_clock,
        }
    }
}

impl Default for ClockIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for ClockIds {
    fn next_id(&mut self) -> FileId {
        let wall = (self.wall_clock)();
        self.last = if wall > self.last { wall } else { self.last + 1 };
        FileId(self.last)
    }
}

pub fn wall_clock_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
