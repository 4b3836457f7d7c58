mod convert;
mod random;
mod structural;

pub use self::convert::{decode, encode};
pub use self::random::random;
pub use self::structural::{concat, flatten, length, pad, reverse, slice};
