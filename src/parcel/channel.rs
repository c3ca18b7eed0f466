//! Ordered primitive byte channels

use crate::parcel::error::{ParcelError, ParcelResult};

/// Write side of a byte channel
pub trait ParcelWriter {
    fn write_i32(&mut self, value: i32) -> ParcelResult<()>;

    fn write_i64(&mut self, value: i64) -> ParcelResult<()>;

    fn write_f32(&mut self, value: f32) -> ParcelResult<()>;
}

/// Read side of a byte channel
///
/// Values come back in the order they were written.
pub trait ParcelReader {
    fn read_i32(&mut self) -> ParcelResult<i32>;

    fn read_i64(&mut self) -> ParcelResult<i64>;

    fn read_f32(&mut self) -> ParcelResult<f32>;
}

/// Growable in-memory parcel, little-endian
///
/// Reads and writes share one cursor. After writing, rewind with
/// `set_data_position(0)` before reading back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ByteParcel {
    data: Vec<u8>,
    position: usize,
}

impl ByteParcel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parcel positioned at the start of `bytes`
    pub fn unmarshall(bytes: &[u8]) -> Self {
        Self {
            data: bytes.to_vec(),
            position: 0,
        }
    }

    /// Raw bytes written so far
    pub fn marshall(&self) -> Vec<u8> {
        self.data.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn data_size(&self) -> usize {
        self.data.len()
    }

    pub fn data_position(&self) -> usize {
        self.position
    }

    /// Bytes left between the cursor and the end of the data
    pub fn data_avail(&self) -> usize {
        self.data.len() - self.position
    }

    pub fn set_data_position(&mut self, position: usize) -> ParcelResult<()> {
        if position > self.data.len() {
            return Err(ParcelError::InvalidPosition {
                position,
                size: self.data.len(),
            });
        }
        self.position = position;
        Ok(())
    }

    fn write_bytes<const N: usize>(&mut self, bytes: [u8; N]) {
        let end = self.position + N;
        if end > self.data.len() {
            self.data.resize(end, 0);
        }
        self.data[self.position..end].copy_from_slice(&bytes);
        self.position = end;
    }

    fn read_bytes<const N: usize>(&mut self) -> ParcelResult<[u8; N]> {
        let available = self.data_avail();
        if available < N {
            return Err(ParcelError::InsufficientData {
                required: N,
                available,
            });
        }

        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.data[self.position..self.position + N]);
        self.position += N;
        Ok(bytes)
    }
}

impl ParcelWriter for ByteParcel {
    fn write_i32(&mut self, value: i32) -> ParcelResult<()> {
        self.write_bytes(value.to_le_bytes());
        Ok(())
    }

    fn write_i64(&mut self, value: i64) -> ParcelResult<()> {
        self.write_bytes(value.to_le_bytes());
        Ok(())
    }

    fn write_f32(&mut self, value: f32) -> ParcelResult<()> {
        self.write_bytes(value.to_le_bytes());
        Ok(())
    }
}

impl ParcelReader for ByteParcel {
    fn read_i32(&mut self) -> ParcelResult<i32> {
        self.read_bytes().map(i32::from_le_bytes)
    }

    fn read_i64(&mut self) -> ParcelResult<i64> {
        self.read_bytes().map(i64::from_le_bytes)
    }

    fn read_f32(&mut self) -> ParcelResult<f32> {
        self.read_bytes().map(f32::from_le_bytes)
    }
}
