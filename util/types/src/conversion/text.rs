use crate::HexBytes;
use hexseq_error::ValidationError;
use std::char::DecodeUtf16Error;
use std::string::FromUtf8Error;

impl HexBytes {
    /// Maps each character to one byte equal to its code point.
    ///
    /// Fails when a code point is above `0xff`.
    pub fn from_ascii(text: &str) -> Result<HexBytes, ValidationError> {
        text.chars()
            .enumerate()
            .map(|(index, chr)| {
                u8::try_from(chr).map_err(|_| ValidationError::NonByteCodePoint {
                    index,
                    code_point: u32::from(chr),
                })
            })
            .collect::<Result<Vec<u8>, _>>()
            .map(HexBytes::from_vec)
    }

    /// Maps each byte to the character with that code point.
    pub fn to_ascii(&self) -> String {
        self.as_bytes().iter().copied().map(char::from).collect()
    }

    /// Encodes text as its UTF-8 bytes.
    pub fn from_utf8_str(text: &str) -> HexBytes {
        HexBytes::from(text.as_bytes())
    }

    /// Encodes UTF-16 code units as UTF-8 bytes.
    ///
    /// Unpaired surrogates have no UTF-8 encoding and are reported as an error.
    pub fn from_utf16(units: &[u16]) -> Result<HexBytes, DecodeUtf16Error> {
        char::decode_utf16(units.iter().copied())
            .collect::<Result<String, _>>()
            .map(|text| HexBytes::from_utf8_str(&text))
    }

    /// Decodes the bytes as UTF-8 text.
    pub fn to_utf8_string(&self) -> Result<String, FromUtf8Error> {
        String::from_utf8(self.to_array())
    }
}
