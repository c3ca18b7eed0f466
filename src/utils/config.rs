use crate::core::constants::*;
use crate::core::types::Priority;
use crate::identity::{HostPidReader, PidReader};
use crate::request::{LocationRequest, RequestError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Stored description of a location request, without the owning process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestProfile {
    /// Interval between updates (milliseconds)
    pub interval_ms: i64,
    /// Fastest accepted interval for updates triggered by others (milliseconds)
    ///
    /// When absent the request keeps whatever `interval_ms` leaves it at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fastest_interval_ms: Option<i64>,
    /// Minimum movement before an update (meters)
    pub smallest_displacement_m: f32,
    /// Accuracy/power tradeoff
    pub priority: Priority,
}

/// Profile loading and conversion errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Invalid parameter value
    InvalidParameter { parameter: String, value: String, reason: String },
    /// Profile file I/O error
    IoError { message: String },
    /// JSON serialization/deserialization error
    SerializationError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidParameter { parameter, value, reason } => {
                write!(f, "Invalid parameter '{}' = '{}': {}", parameter, value, reason)
            }
            ConfigError::IoError { message } => write!(f, "I/O error: {}", message),
            ConfigError::SerializationError { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<RequestError> for ConfigError {
    fn from(error: RequestError) -> Self {
        match error {
            RequestError::InvalidArgument { parameter, value } => ConfigError::InvalidParameter {
                parameter,
                value,
                reason: "rejected by location request".to_string(),
            },
        }
    }
}

impl Default for RequestProfile {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_IN_MS,
            fastest_interval_ms: None,
            smallest_displacement_m: DEFAULT_SMALLEST_DISPLACEMENT_IN_METERS,
            priority: Priority::default(),
        }
    }
}

impl RequestProfile {
    /// Capture the configuration of an existing request
    pub fn from_request(request: &LocationRequest) -> Result<Self, ConfigError> {
        let priority = request.priority_level().ok_or_else(|| ConfigError::InvalidParameter {
            parameter: "priority".to_string(),
            value: request.priority().to_string(),
            reason: "not a named priority level".to_string(),
        })?;

        Ok(Self {
            interval_ms: request.interval(),
            fastest_interval_ms: Some(request.fastest_interval()),
            smallest_displacement_m: request.smallest_displacement(),
            priority,
        })
    }

    /// Build a request owned by the process `reader` reports
    ///
    /// Fields go through the public mutators, interval first. An explicit
    /// fastest interval above the interval is reproduced as written; without
    /// one the fastest interval is lowered along with the interval.
    pub fn build<R: PidReader + ?Sized>(&self, reader: &R) -> Result<LocationRequest, ConfigError> {
        let mut request = LocationRequest::create_with(reader);
        request.set_interval(self.interval_ms);
        if let Some(fastest_interval_ms) = self.fastest_interval_ms {
            request.set_fastest_interval(fastest_interval_ms);
        }
        request
            .set_smallest_displacement(self.smallest_displacement_m)
            .set_priority(self.priority)?;
        Ok(request)
    }

    /// Build a request owned by the current host process
    pub fn build_for_host(&self) -> Result<LocationRequest, ConfigError> {
        self.build(&HostPidReader)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::SerializationError {
            message: format!("Failed to parse request profile: {}", e),
        })
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializationError {
            message: format!("Failed to serialize request profile: {}", e),
        })
    }

    /// Load a profile from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            message: format!("Failed to read profile '{}': {}", path_str, e),
        })?;

        let profile = Self::from_json(&content)?;
        debug!(path = %path_str, priority = %profile.priority, "loaded request profile");
        Ok(profile)
    }

    /// Save the profile as pretty-printed JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let content = self.to_json()?;

        fs::write(&path, content).map_err(|e| ConfigError::IoError {
            message: format!("Failed to write profile '{}': {}", path_str, e),
        })?;

        debug!(path = %path_str, "saved request profile");
        Ok(())
    }
}
