//! Process identity capture
//!
//! A request records the id of the process that built it. The id is read
//! through the [`PidReader`] trait so hosts and tests can substitute their
//! own source.

pub mod reader;
pub mod mock;

pub use reader::{HostPidReader, PidReader};
pub use mock::{CountingPidReader, FixedPidReader};
