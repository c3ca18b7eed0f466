//! Deterministic identity sources for testing and development

use crate::identity::PidReader;
use std::cell::Cell;

/// Always reports the same configured pid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPidReader {
    pid: i64,
}

impl FixedPidReader {
    pub fn new(pid: i64) -> Self {
        Self { pid }
    }
}

impl PidReader for FixedPidReader {
    fn pid(&self) -> i64 {
        self.pid
    }
}

/// Fixed pid reader that also records how often it was asked
#[derive(Debug, Default)]
pub struct CountingPidReader {
    pid: i64,
    reads: Cell<u32>,
}

impl CountingPidReader {
    pub fn new(pid: i64) -> Self {
        Self {
            pid,
            reads: Cell::new(0),
        }
    }

    /// Number of times `pid()` has been called
    pub fn read_count(&self) -> u32 {
        self.reads.get()
    }
}

impl PidReader for CountingPidReader {
    fn pid(&self) -> i64 {
        self.reads.set(self.reads.get() + 1);
        self.pid
    }
}
