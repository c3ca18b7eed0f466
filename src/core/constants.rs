//! Request defaults and wire constants

/// Default interval between location updates (milliseconds)
pub const DEFAULT_INTERVAL_IN_MS: i64 = 3_600_000;

/// Default fastest interval the requester accepts updates at (milliseconds)
pub const DEFAULT_FASTEST_INTERVAL_IN_MS: i64 = 600_000;

/// Default minimum displacement between updates (meters)
pub const DEFAULT_SMALLEST_DISPLACEMENT_IN_METERS: f32 = 0.0;

pub const PRIORITY_HIGH_ACCURACY: i32 = 0x64;
pub const PRIORITY_BALANCED_POWER_ACCURACY: i32 = 0x66;
pub const PRIORITY_LOW_POWER: i32 = 0x68;
pub const PRIORITY_NO_POWER: i32 = 0x69;
