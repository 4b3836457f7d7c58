mod std_str;
mod structural;

use crate::HexBytes;

pub(crate) fn hex(input: &str) -> HexBytes {
    input.parse().unwrap()
}
