use super::hex;
use crate::{Fragment, HexBytes, RangeError, flatten};

#[test]
fn length() {
    assert_eq!(hex("0x").len(), 0);
    assert_eq!(hex("0x00").len(), 1);
    assert_eq!(hex("0x123456").len(), 3);
}

#[test]
fn concat() {
    assert_eq!(hex("0x1234").concat(&hex("0x56")), hex("0x123456"));
    assert_eq!(hex("0x").concat(&hex("0x56")), hex("0x56"));
    assert_eq!(hex("0x56").concat(&hex("0x")), hex("0x56"));
}

#[test]
fn flatten_nested() {
    let fragments = vec![
        Fragment::Hex(hex("0x01")),
        Fragment::List(vec![
            Fragment::Hex(hex("0x02")),
            Fragment::List(vec![Fragment::Hex(hex("0x0304"))]),
        ]),
        Fragment::List(vec![]),
        Fragment::Hex(hex("0x05")),
    ];
    assert_eq!(flatten(&fragments), hex("0x0102030405"));
    assert_eq!(Fragment::List(fragments).flatten(), hex("0x0102030405"));
}

#[test]
fn flatten_empty() {
    assert_eq!(flatten(&[]), HexBytes::default());
    assert_eq!(Fragment::List(vec![]).flatten().to_string(), "0x");
}

#[test]
fn slice() {
    let value = hex("0x0011223344");
    assert_eq!(value.slice(1, 3).unwrap(), hex("0x1122"));
    assert_eq!(value.slice(2, 2).unwrap(), hex("0x"));
    assert_eq!(value.slice(0, value.len()).unwrap(), value);
    assert_eq!(value.slice(5, 5).unwrap(), hex("0x"));
}

#[test]
fn slice_out_of_range() {
    let value = hex("0x001122");
    assert_eq!(
        value.slice(2, 1),
        Err(RangeError::Slice {
            start: 2,
            end: 1,
            len: 3
        })
    );
    assert_eq!(
        value.slice(0, 4),
        Err(RangeError::Slice {
            start: 0,
            end: 4,
            len: 3
        })
    );
    assert!(value.slice(4, 4).is_err());
}

#[test]
fn reverse() {
    assert_eq!(hex("0x010203").reverse(), hex("0x030201"));
    assert_eq!(hex("0xabcd").reverse().to_string(), "0xcdab");
    assert_eq!(hex("0x").reverse(), hex("0x"));
}

#[test]
fn pad() {
    assert_eq!(hex("0xab").pad_left(4).unwrap().to_string(), "0x000000ab");
    assert_eq!(hex("0xab").pad_right(4).unwrap().to_string(), "0xab000000");
    assert_eq!(hex("0xab").pad_left(1).unwrap(), hex("0xab"));
    assert_eq!(hex("0x").pad_right(2).unwrap(), hex("0x0000"));
}

#[test]
fn pad_too_short() {
    let expected = Err(RangeError::Pad { target: 1, len: 2 });
    assert_eq!(hex("0xabcd").pad_left(1), expected);
    assert_eq!(hex("0xabcd").pad_right(1), expected);
}
