use crate::HexBytes;
use bytes::{BufMut, BytesMut};
use hexseq_error::RangeError;

impl HexBytes {
    /// Byte count, half the digit count of the canonical form.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether this is `0x`.
    pub fn is_empty(&self) -> bool {
        0 == self.len()
    }

    /// The bytes of `self` followed by the bytes of `other`.
    pub fn concat(&self, other: &HexBytes) -> HexBytes {
        let mut buf = BytesMut::with_capacity(self.len() + other.len());
        buf.put_slice(self.as_bytes());
        buf.put_slice(other.as_bytes());
        HexBytes::from_bytes(buf.freeze())
    }

    /// The half-open byte range `[start, end)`.
    ///
    /// Fails when `start > end` or `end > self.len()`.
    pub fn slice(&self, start: usize, end: usize) -> Result<HexBytes, RangeError> {
        let len = self.len();
        if start > end || end > len {
            return Err(RangeError::Slice { start, end, len });
        }
        Ok(HexBytes::from_bytes(self.inner().slice(start..end)))
    }

    /// Reverses byte order. The two digits of each byte stay together.
    pub fn reverse(&self) -> HexBytes {
        let mut bytes = self.as_bytes().to_vec();
        bytes.reverse();
        HexBytes::from_vec(bytes)
    }

    /// Prepends zero bytes until the value is `target` bytes long.
    pub fn pad_left(&self, target: usize) -> Result<HexBytes, RangeError> {
        let fill = self.padding(target)?;
        let mut buf = BytesMut::with_capacity(target);
        buf.put_bytes(0, fill);
        buf.put_slice(self.as_bytes());
        Ok(HexBytes::from_bytes(buf.freeze()))
    }

    /// Appends zero bytes until the value is `target` bytes long.
    pub fn pad_right(&self, target: usize) -> Result<HexBytes, RangeError> {
        let fill = self.padding(target)?;
        let mut buf = BytesMut::with_capacity(target);
        buf.put_slice(self.as_bytes());
        buf.put_bytes(0, fill);
        Ok(HexBytes::from_bytes(buf.freeze()))
    }

    fn padding(&self, target: usize) -> Result<usize, RangeError> {
        let len = self.len();
        target
            .checked_sub(len)
            .ok_or(RangeError::Pad { target, len })
    }
}
