//! Parcelable contract and the location request wire layout

use crate::parcel::channel::{ByteParcel, ParcelReader, ParcelWriter};
use crate::parcel::error::{ParcelError, ParcelResult};
use crate::request::LocationRequest;
use tracing::trace;

/// A value that can be flattened into, and rebuilt from, a byte channel
pub trait Parcelable: Sized {
    /// Write every field to `dest` in wire order
    fn write_to_parcel<W: ParcelWriter + ?Sized>(&self, dest: &mut W) -> ParcelResult<()>;

    /// Read every field from `source` in wire order
    fn create_from_parcel<R: ParcelReader + ?Sized>(source: &mut R) -> ParcelResult<Self>;

    /// Bitmask of special objects in the flattened form; none for plain values
    fn describe_contents(&self) -> i32 {
        0
    }
}

impl LocationRequest {
    /// Encoded size: two i64 intervals, f32 displacement, i32 priority, i64 pid
    pub const PARCEL_SIZE: usize = 8 + 8 + 4 + 4 + 8;
}

impl Parcelable for LocationRequest {
    fn write_to_parcel<W: ParcelWriter + ?Sized>(&self, dest: &mut W) -> ParcelResult<()> {
        dest.write_i64(self.interval())?;
        dest.write_i64(self.fastest_interval())?;
        dest.write_f32(self.smallest_displacement())?;
        dest.write_i32(self.priority())?;
        dest.write_i64(self.creator_pid())?;
        Ok(())
    }

    /// Rebuilds the request exactly as written; neither the priority nor the
    /// interval ordering is checked.
    fn create_from_parcel<R: ParcelReader + ?Sized>(source: &mut R) -> ParcelResult<Self> {
        let interval = source.read_i64()?;
        let fastest_interval = source.read_i64()?;
        let smallest_displacement = source.read_f32()?;
        let priority = source.read_i32()?;
        let pid = source.read_i64()?;

        Ok(LocationRequest::from_raw_parts(
            interval,
            fastest_interval,
            smallest_displacement,
            priority,
            pid,
        ))
    }
}

/// Flatten `value` into a fresh byte buffer
pub fn encode<T: Parcelable>(value: &T) -> ParcelResult<Vec<u8>> {
    let mut parcel = ByteParcel::new();
    value.write_to_parcel(&mut parcel)?;
    trace!(bytes = parcel.data_size(), "encoded parcelable");
    Ok(parcel.into_bytes())
}

/// Rebuild a value from `bytes`, which must hold exactly one encoded value
pub fn decode<T: Parcelable>(bytes: &[u8]) -> ParcelResult<T> {
    let mut parcel = ByteParcel::unmarshall(bytes);
    let value = T::create_from_parcel(&mut parcel)?;

    let remaining = parcel.data_avail();
    if remaining != 0 {
        return Err(ParcelError::TrailingData { remaining });
    }

    trace!(bytes = bytes.len(), "decoded parcelable");
    Ok(value)
}
