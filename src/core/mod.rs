//! Core types and constants for location requests

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
