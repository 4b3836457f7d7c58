use crate::HexBytes;
use hexseq_error::ValidationError;
use num_bigint::{BigInt, BigUint};

impl HexBytes {
    /// Encodes a natural number as its minimal big-endian bytes, zero as `0x00`.
    pub fn from_nat(value: &BigUint) -> HexBytes {
        HexBytes::from_vec(value.to_bytes_be())
    }

    /// Like [`HexBytes::from_nat`] for a signed big integer, rejecting negatives.
    pub fn from_big_int(value: &BigInt) -> Result<HexBytes, ValidationError> {
        value
            .to_biguint()
            .map(|nat| HexBytes::from_nat(&nat))
            .ok_or_else(|| ValidationError::Negative(value.to_string()))
    }

    /// Decodes the bytes as an unsigned big-endian natural number; `0x` is zero.
    pub fn to_nat(&self) -> BigUint {
        BigUint::from_bytes_be(self.as_bytes())
    }
}
