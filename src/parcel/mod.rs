//! Binary codec for location requests
//!
//! Requests are flattened to a fixed sequence of primitives with no length
//! prefix or version tag:
//!
//! ```text
//! i64 interval | i64 fastest interval | f32 displacement | i32 priority | i64 creator pid
//! ```

pub mod channel;
pub mod codec;
pub mod error;

pub use channel::{ByteParcel, ParcelReader, ParcelWriter};
pub use codec::{decode, encode, Parcelable};
pub use error::{ParcelError, ParcelResult};
