use crate::HexBytes;
use std::fmt;

impl fmt::Debug for HexBytes {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "HexBytes({:#x})", self)
    }
}

impl fmt::LowerHex for HexBytes {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        write!(f, "{}", faster_hex::hex_string(self.as_bytes()))
    }
}

/// Always the canonical form, `0x` included.
impl fmt::Display for HexBytes {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#x}", self)
    }
}
