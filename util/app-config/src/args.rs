use clap::ValueEnum;
use clap::builder::PossibleValue;
use hexseq_types::{Fragment, HexBytes};

/// A representation `encode` reads from and `decode` writes to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Representation {
    /// One byte per character, code points up to 255.
    Ascii,
    /// UTF-8 text.
    Utf8,
    /// Decimal native integer.
    Number,
    /// Decimal arbitrary-precision natural number.
    Nat,
    /// Comma separated byte values.
    Array,
}

impl ValueEnum for Representation {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Representation::Ascii,
            Representation::Utf8,
            Representation::Number,
            Representation::Nat,
            Representation::Array,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Representation::Ascii => PossibleValue::new("ascii"),
            Representation::Utf8 => PossibleValue::new("utf8").alias("string"),
            Representation::Number => PossibleValue::new("number"),
            Representation::Nat => PossibleValue::new("nat"),
            Representation::Array => PossibleValue::new("array"),
        })
    }
}

/// Parsed command line arguments for `hexseq encode`.
pub struct EncodeArgs {
    /// Representation of `value`.
    pub from: Representation,
    /// Raw input.
    pub value: String,
}

/// Parsed command line arguments for `hexseq decode`.
pub struct DecodeArgs {
    /// Target representation.
    pub to: Representation,
    /// Validated input.
    pub hex: HexBytes,
}

/// Parsed command line arguments for `hexseq length` and `hexseq reverse`.
pub struct HexArgs {
    /// Validated input.
    pub hex: HexBytes,
}

/// Parsed command line arguments for `hexseq concat`.
pub struct ConcatArgs {
    /// Validated inputs in order.
    pub values: Vec<HexBytes>,
}

/// Parsed command line arguments for `hexseq flatten`.
pub struct FlattenArgs {
    /// The nested fragments.
    pub fragments: Vec<Fragment>,
}

/// Parsed command line arguments for `hexseq slice`.
pub struct SliceArgs {
    pub hex: HexBytes,
    pub start: usize,
    pub end: usize,
}

/// Parsed command line arguments for `hexseq pad`.
pub struct PadArgs {
    pub hex: HexBytes,
    /// Total byte length after padding.
    pub len: usize,
    /// Pad on the right instead of the left.
    pub right: bool,
}

/// Parsed command line arguments for `hexseq random`.
pub struct RandomArgs {
    /// Byte length to draw.
    pub len: usize,
}
