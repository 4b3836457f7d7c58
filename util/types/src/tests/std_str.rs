use crate::{EncodingError, HexBytes, normalize};
use std::str::FromStr;

#[test]
fn parse_empty() {
    let value = HexBytes::from_str("0x").unwrap();
    assert!(value.is_empty());
    assert_eq!(value, HexBytes::default());
    assert_eq!(value.to_string(), "0x");
}

#[test]
fn parse_mixed_case_renders_lowercase() {
    let value = HexBytes::parse("0xDeAdBeEf").unwrap();
    assert_eq!(value.as_bytes(), &[0xde, 0xad, 0xbe, 0xef]);
    assert_eq!(value.to_string(), "0xdeadbeef");
    assert_eq!(normalize("0xABCDEF01").unwrap(), "0xabcdef01");
}

#[test]
fn parse_missing_prefix() {
    for input in ["", "0", "1234", "0X12", "x012", " 0x12"] {
        assert_eq!(
            HexBytes::parse(input),
            Err(EncodingError::MissingPrefix),
            "{:?}",
            input
        );
    }
}

#[test]
fn parse_odd_length() {
    assert_eq!(HexBytes::parse("0x1"), Err(EncodingError::OddLength(1)));
    assert_eq!(HexBytes::parse("0x123"), Err(EncodingError::OddLength(3)));
    assert_eq!(normalize("0xabc"), Err(EncodingError::OddLength(3)));
}

#[test]
fn parse_invalid_character() {
    assert_eq!(
        HexBytes::parse("0x0g"),
        Err(EncodingError::InvalidCharacter { chr: b'g', idx: 1 })
    );
    assert_eq!(
        HexBytes::parse("0xz0"),
        Err(EncodingError::InvalidCharacter { chr: b'z', idx: 0 })
    );
    assert_eq!(
        HexBytes::parse("0x0x00"),
        Err(EncodingError::InvalidCharacter { chr: b'x', idx: 1 })
    );
    // a multi-byte character is reported by its first byte
    assert_eq!(
        HexBytes::parse("0x\u{e9}"),
        Err(EncodingError::InvalidCharacter { chr: 0xc3, idx: 0 })
    );
}

#[test]
fn format_variants() {
    let value = HexBytes::from_vec(vec![0x00, 0x0a, 0xff]);
    assert_eq!(format!("{}", value), "0x000aff");
    assert_eq!(format!("{:x}", value), "000aff");
    assert_eq!(format!("{:#x}", value), "0x000aff");
    assert_eq!(format!("{:?}", value), "HexBytes(0x000aff)");
    assert_eq!(value.hex_string(), value.to_string());
}

#[test]
fn format_padding_and_width() {
    let value = HexBytes::from_vec(vec![0x01, 0x00, 0xf0]);
    assert_eq!(format!("{:x}", value), "0100f0");
    assert_eq!(format!("{:x}", HexBytes::default()), "");
    assert_eq!(HexBytes::default().hex_string(), "0x");
    let long = HexBytes::from_vec((0..=255).collect());
    let expected: String = (0..=255u8).map(|b| format!("{:02x}", b)).collect();
    assert_eq!(format!("{:x}", long), expected);
    assert_eq!(long.hex_string(), format!("0x{}", expected));
}
