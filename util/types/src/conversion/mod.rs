//! Conversions between [`HexBytes`](crate::HexBytes) and the other representations used by the
//! client stack.
//!
//! Every numeric conversion treats the byte sequence as an unsigned big-endian magnitude; no
//! sequence carries a sign.

mod buffer;
mod nat;
mod number;
mod text;

pub use number::Number;
