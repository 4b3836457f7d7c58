//! The canonical byte-sequence representation.
//!
//! Every wire value, hash, address and ABI-encoded parameter is interchanged as a [`HexBytes`]:
//! an ordered sequence of bytes whose only textual form is `0x` followed by an even number of
//! lowercase hex digits. This crate is the single place that validates that shape and converts
//! into or out of it.
//!
//! ```
//! use hexseq_types::HexBytes;
//!
//! let value: HexBytes = "0x1234".parse().unwrap();
//! let joined = value.concat(&HexBytes::from_number(0x56u8).unwrap());
//! assert_eq!(joined.to_string(), "0x123456");
//! assert_eq!(joined.reverse().to_string(), "0x563412");
//! ```

mod bytes;
pub mod conversion;
mod fragment;
mod random;
mod serde;
mod std_fmt;
mod std_str;
mod structural;

#[cfg(test)]
mod tests;

pub use self::bytes::HexBytes;
pub use self::conversion::Number;
pub use self::fragment::{Fragment, flatten};
pub use self::random::EntropySource;
pub use self::std_str::normalize;
pub use ::bytes::Bytes;
pub use hexseq_error::{
    EncodingError, EntropyError, Error, ErrorKind, PrecisionError, RangeError, ValidationError,
};
pub use num_bigint::{BigInt, BigUint};
