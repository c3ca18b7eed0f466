//! Core data types shared by requests and profiles

use crate::core::constants::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Accuracy/power tradeoff a requester asks the location subsystem for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    /// Most accurate fix available, highest power draw
    HighAccuracy,
    /// Block-level accuracy
    BalancedPowerAccuracy,
    /// City-level accuracy
    LowPower,
    /// Only piggy-back on fixes requested by others
    NoPower,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::HighAccuracy,
        Priority::BalancedPowerAccuracy,
        Priority::LowPower,
        Priority::NoPower,
    ];

    /// Integer value carried on the wire
    pub fn value(self) -> i32 {
        match self {
            Priority::HighAccuracy => PRIORITY_HIGH_ACCURACY,
            Priority::BalancedPowerAccuracy => PRIORITY_BALANCED_POWER_ACCURACY,
            Priority::LowPower => PRIORITY_LOW_POWER,
            Priority::NoPower => PRIORITY_NO_POWER,
        }
    }

    pub fn from_value(value: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.value() == value)
    }

    pub fn name(self) -> &'static str {
        match self {
            Priority::HighAccuracy => "HIGH_ACCURACY",
            Priority::BalancedPowerAccuracy => "BALANCED_POWER_ACCURACY",
            Priority::LowPower => "LOW_POWER",
            Priority::NoPower => "NO_POWER",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::BalancedPowerAccuracy
    }
}

impl From<Priority> for i32 {
    fn from(priority: Priority) -> Self {
        priority.value()
    }
}

impl TryFrom<i32> for Priority {
    type Error = i32;

    /// Returns the rejected value on failure
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Priority::from_value(value).ok_or(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
