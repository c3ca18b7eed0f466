//! Byte channel error types

use std::fmt;

/// Errors raised by a parcel channel
#[derive(Debug, Clone, PartialEq)]
pub enum ParcelError {
    /// Fewer bytes remain than the next read needs
    InsufficientData { required: usize, available: usize },
    /// Bytes were left over after a complete value was read
    TrailingData { remaining: usize },
    /// Seek beyond the end of the written data
    InvalidPosition { position: usize, size: usize },
}

impl fmt::Display for ParcelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParcelError::InsufficientData { required, available } => {
                write!(f, "Insufficient data: need {} bytes, got {}", required, available)
            }
            ParcelError::TrailingData { remaining } => {
                write!(f, "Trailing data: {} unread bytes", remaining)
            }
            ParcelError::InvalidPosition { position, size } => {
                write!(f, "Invalid data position {} for parcel of {} bytes", position, size)
            }
        }
    }
}

impl std::error::Error for ParcelError {}

/// Result type for parcel operations
pub type ParcelResult<T> = Result<T, ParcelError>;
