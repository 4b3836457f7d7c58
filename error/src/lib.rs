//! Underlying error types used over hexseq crates.
//!
//! Every operation fails with exactly one of the category errors below. The top-level [`Error`]
//! wraps them for callers who only want a single error type, and [`Error::kind`] recovers the
//! category.

use derive_more::Display;
use thiserror::Error;

pub mod util;

/// A list specifying categories of hexseq error.
///
/// It is used with [`Error`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Display)]
pub enum ErrorKind {
    /// It indicates that the underlying error is [`EncodingError`].
    Encoding,
    /// It indicates that the underlying error is [`RangeError`].
    Range,
    /// It indicates that the underlying error is [`ValidationError`].
    Validation,
    /// It indicates that the underlying error is [`PrecisionError`].
    Precision,
    /// It indicates that the underlying error is [`EntropyError`].
    Entropy,
}

/// A malformed hex value was presented for decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// The input does not start with `0x`.
    #[error("missing `0x` prefix")]
    MissingPrefix,
    /// The number of digits after the prefix is odd.
    #[error("odd number of hex digits: {0}")]
    OddLength(usize),
    /// Invalid character, `idx` counts digits after the prefix.
    #[error("invalid character code `{chr}` at {idx}")]
    InvalidCharacter {
        /// The value of the invalid character.
        chr: u8,
        /// The index of the invalid character.
        idx: usize,
    },
}

/// An index or a target length is outside the valid range of a structural operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// `start > end` or `end > len`.
    #[error("slice [{start}, {end}) out of range for {len} bytes")]
    Slice {
        /// Inclusive start byte index.
        start: usize,
        /// Exclusive end byte index.
        end: usize,
        /// Byte length of the sliced value.
        len: usize,
    },
    /// The value is already longer than the padding target.
    #[error("cannot pad {len} bytes to {target} bytes")]
    Pad {
        /// Requested total byte length.
        target: usize,
        /// Byte length of the padded value.
        len: usize,
    },
}

/// A value lies outside the representable domain of the target encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// An array element is not a byte.
    #[error("array element {value} at {index} is not in 0..=255")]
    ByteOutOfRange {
        /// Position of the element.
        index: usize,
        /// Decimal rendering of the element.
        value: String,
    },
    /// A negative number where an unsigned magnitude is expected.
    #[error("negative number {0} has no unsigned encoding")]
    Negative(String),
    /// A character does not fit a single byte.
    #[error("code point U+{code_point:04X} at {index} does not fit in one byte")]
    NonByteCodePoint {
        /// Position of the character, counted in characters.
        index: usize,
        /// The offending code point.
        code_point: u32,
    },
}

/// A decoded magnitude exceeds the exact range of the requested native integer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{bits}-bit magnitude does not fit in {target}")]
pub struct PrecisionError {
    /// Significant bits of the decoded magnitude.
    pub bits: u64,
    /// Name of the requested integer type.
    pub target: &'static str,
}

/// The secure random source is unavailable or failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("entropy source failure: {0}")]
pub struct EntropyError(pub String);

/// Top-level hexseq error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// See [`EncodingError`].
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    /// See [`RangeError`].
    #[error(transparent)]
    Range(#[from] RangeError),
    /// See [`ValidationError`].
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// See [`PrecisionError`].
    #[error(transparent)]
    Precision(#[from] PrecisionError),
    /// See [`EntropyError`].
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}

impl Error {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Encoding(_) => ErrorKind::Encoding,
            Error::Range(_) => ErrorKind::Range,
            Error::Validation(_) => ErrorKind::Validation,
            Error::Precision(_) => ErrorKind::Precision,
            Error::Entropy(_) => ErrorKind::Entropy,
        }
    }
}
