//! Location Request
//!
//! The descriptor a client hands to a location provider to say how often,
//! how precisely and at what power cost it wants position updates, together
//! with its equality semantics and fixed binary wire form.

pub mod core;
pub mod identity;
pub mod request;
pub mod parcel;
pub mod utils;

// Re-export commonly used types
pub use self::core::{Priority, DEFAULT_FASTEST_INTERVAL_IN_MS, DEFAULT_INTERVAL_IN_MS};
pub use identity::{FixedPidReader, HostPidReader, PidReader};
pub use request::{LocationRequest, RequestError, RequestResult};
pub use parcel::{decode, encode, ByteParcel, ParcelError, ParcelReader, ParcelResult, ParcelWriter, Parcelable};
pub use utils::{ConfigError, RequestProfile};
