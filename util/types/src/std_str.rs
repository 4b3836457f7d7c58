use crate::HexBytes;
use hexseq_error::EncodingError;

const PREFIX: &str = "0x";

const DICT_HEX_ERROR: u8 = u8::MAX;
static DICT_HEX_LO: [u8; 256] = {
    const ____: u8 = DICT_HEX_ERROR;
    [
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, ____, ____,
        ____, ____, ____, ____, ____, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____,
    ]
};
static DICT_HEX_HI: [u8; 256] = {
    const ____: u8 = DICT_HEX_ERROR;
    [
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, 0x00, 0x10, 0x20, 0x30, 0x40, 0x50, 0x60, 0x70, 0x80, 0x90, ____, ____,
        ____, ____, ____, ____, ____, 0xa0, 0xb0, 0xc0, 0xd0, 0xe0, 0xf0, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, 0xa0, 0xb0, 0xc0, 0xd0, 0xe0, 0xf0, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____,
        ____,
    ]
};

/// Decodes the digits that follow the `0x` prefix.
///
/// Both cases are accepted; the index in [`EncodingError::InvalidCharacter`] counts digits.
fn decode_digits(digits: &[u8]) -> Result<Vec<u8>, EncodingError> {
    let len = digits.len();
    if len % 2 != 0 {
        return Err(EncodingError::OddLength(len));
    }
    let mut ret = vec![0u8; len / 2];
    for (idx, &chr) in digits.iter().enumerate() {
        let val = if idx % 2 == 0 {
            DICT_HEX_HI[usize::from(chr)]
        } else {
            DICT_HEX_LO[usize::from(chr)]
        };
        if val == DICT_HEX_ERROR {
            return Err(EncodingError::InvalidCharacter { chr, idx });
        }
        ret[idx / 2] |= val;
    }
    Ok(ret)
}

impl HexBytes {
    /// Validates a hex value presented by a caller.
    ///
    /// The input must carry the `0x` prefix followed by an even number of hex digits. Uppercase
    /// digits are accepted and the value renders lowercase afterwards.
    pub fn parse(input: &str) -> Result<Self, EncodingError> {
        let digits = input
            .strip_prefix(PREFIX)
            .ok_or(EncodingError::MissingPrefix)?;
        decode_digits(digits.as_bytes()).map(HexBytes::from_vec)
    }
}

impl ::std::str::FromStr for HexBytes {
    type Err = EncodingError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        HexBytes::parse(input)
    }
}

/// Validates `input` and returns its canonical lowercase spelling.
///
/// ```
/// assert_eq!(hexseq_types::normalize("0xABcd").unwrap(), "0xabcd");
/// assert!(hexseq_types::normalize("0xabc").is_err());
/// ```
pub fn normalize(input: &str) -> Result<String, EncodingError> {
    HexBytes::parse(input).map(|value| value.hex_string())
}
