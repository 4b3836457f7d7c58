use crate::HexBytes;
use hexseq_error::{PrecisionError, ValidationError};
use std::fmt;

/// A native fixed-width integer which can be encoded as an unsigned big-endian magnitude.
pub trait Number: Copy + fmt::Display {
    /// The type name used in error messages.
    const NAME: &'static str;

    /// The magnitude of a non-negative value, `None` for negatives.
    fn to_magnitude(self) -> Option<u128>;

    /// The value for a magnitude, `None` if it does not fit.
    fn from_magnitude(magnitude: u128) -> Option<Self>;
}

macro_rules! impl_number {
    ($($inner:ident),*) => {
        $(
            impl Number for $inner {
                const NAME: &'static str = stringify!($inner);

                fn to_magnitude(self) -> Option<u128> {
                    u128::try_from(self).ok()
                }

                fn from_magnitude(magnitude: u128) -> Option<Self> {
                    $inner::try_from(magnitude).ok()
                }
            }
        )*
    };
}

impl_number!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Drops leading zero bytes.
pub(crate) fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

pub(crate) fn significant_bits(bytes: &[u8]) -> u64 {
    let trimmed = trim_leading_zeros(bytes);
    match trimmed.first() {
        Some(first) => (trimmed.len() as u64 - 1) * 8 + u64::from(8 - first.leading_zeros()),
        None => 0,
    }
}

impl HexBytes {
    /// Encodes a non-negative integer as its minimal big-endian bytes.
    ///
    /// Zero is the single byte `0x00`. Negative input is rejected.
    ///
    /// ```
    /// use hexseq_types::HexBytes;
    ///
    /// assert_eq!(HexBytes::from_number(255u32).unwrap().to_string(), "0xff");
    /// assert_eq!(HexBytes::from_number(256u32).unwrap().to_string(), "0x0100");
    /// assert!(HexBytes::from_number(-1i64).is_err());
    /// ```
    pub fn from_number<T: Number>(value: T) -> Result<HexBytes, ValidationError> {
        let magnitude = value
            .to_magnitude()
            .ok_or_else(|| ValidationError::Negative(value.to_string()))?;
        let bytes = magnitude.to_be_bytes();
        let minimal = trim_leading_zeros(&bytes);
        if minimal.is_empty() {
            Ok(HexBytes::from_vec(vec![0]))
        } else {
            Ok(HexBytes::from(minimal))
        }
    }

    /// Decodes the bytes as an unsigned big-endian integer of type `T`.
    ///
    /// Leading zero bytes are ignored and `0x` decodes to zero. Fails when the magnitude does
    /// not fit in `T`.
    pub fn to_number<T: Number>(&self) -> Result<T, PrecisionError> {
        let trimmed = trim_leading_zeros(self.as_bytes());
        let overflow = || PrecisionError {
            bits: significant_bits(trimmed),
            target: T::NAME,
        };
        if trimmed.len() > 16 {
            return Err(overflow());
        }
        let magnitude = trimmed
            .iter()
            .fold(0u128, |acc, &b| (acc << 8) | u128::from(b));
        T::from_magnitude(magnitude).ok_or_else(overflow)
    }
}
