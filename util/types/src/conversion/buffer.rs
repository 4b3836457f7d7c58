use crate::{HexBytes, Number};
use bytes::Bytes;
use hexseq_error::ValidationError;

impl HexBytes {
    /// Encodes a sequence of integers, each of which must be a byte value.
    pub fn from_array<T: Number>(values: &[T]) -> Result<HexBytes, ValidationError> {
        values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                value
                    .to_magnitude()
                    .and_then(|magnitude| u8::try_from(magnitude).ok())
                    .ok_or_else(|| ValidationError::ByteOutOfRange {
                        index,
                        value: value.to_string(),
                    })
            })
            .collect::<Result<Vec<u8>, _>>()
            .map(HexBytes::from_vec)
    }

    /// The byte values in order.
    pub fn to_array(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Copies a raw binary buffer byte for byte.
    pub fn from_buffer(buffer: &[u8]) -> HexBytes {
        HexBytes::from(buffer)
    }

    /// A raw binary buffer of `self.len()` bytes. Shares the underlying storage.
    pub fn to_buffer(&self) -> Bytes {
        self.inner().clone()
    }
}
