//! Command line definitions of the `hexseq` executable.
use crate::Representation;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use hexseq_types::HexBytes;
use std::path::PathBuf;

/// binary file name(hexseq)
pub const BIN_NAME: &str = "hexseq";

/// Subcommand `encode`.
pub const CMD_ENCODE: &str = "encode";
/// Subcommand `decode`.
pub const CMD_DECODE: &str = "decode";
/// Subcommand `length`.
pub const CMD_LENGTH: &str = "length";
/// Subcommand `concat`.
pub const CMD_CONCAT: &str = "concat";
/// Subcommand `flatten`.
pub const CMD_FLATTEN: &str = "flatten";
/// Subcommand `slice`.
pub const CMD_SLICE: &str = "slice";
/// Subcommand `reverse`.
pub const CMD_REVERSE: &str = "reverse";
/// Subcommand `pad`.
pub const CMD_PAD: &str = "pad";
/// Subcommand `random`.
pub const CMD_RANDOM: &str = "random";

/// Command line argument `--config`.
pub const ARG_CONFIG: &str = "config";
/// Command line argument `--from`.
pub const ARG_FROM: &str = "from";
/// Command line argument `--to`.
pub const ARG_TO: &str = "to";
/// Positional input of `encode`.
pub const ARG_VALUE: &str = "value";
/// Positional hex input.
pub const ARG_HEX: &str = "hex";
/// Positional JSON input of `flatten`.
pub const ARG_JSON: &str = "json";
/// Positional slice start.
pub const ARG_START: &str = "start";
/// Positional slice end.
pub const ARG_END: &str = "end";
/// Positional target byte length.
pub const ARG_LEN: &str = "len";
/// Command line flag `--right`.
pub const ARG_RIGHT: &str = "right";

/// Returns the executable name and the parsed arguments.
pub fn get_bin_name_and_matches() -> (String, ArgMatches) {
    let bin_name = std::env::args()
        .next()
        .unwrap_or_else(|| BIN_NAME.to_owned());
    let matches = basic_app().get_matches();
    (bin_name, matches)
}

/// The root command with every subcommand attached.
pub fn basic_app() -> Command {
    Command::new(BIN_NAME)
        .about("Canonical 0x-prefixed hex byte sequences")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .term_width(110)
        .arg(
            Arg::new(ARG_CONFIG)
                .global(true)
                .short('C')
                .long(ARG_CONFIG)
                .value_name("path")
                .action(ArgAction::Set)
                .value_parser(value_parser!(PathBuf))
                .help("Reads options from <path> instead of ./hexseq.toml"),
        )
        .subcommand(encode())
        .subcommand(decode())
        .subcommand(length())
        .subcommand(concat())
        .subcommand(flatten())
        .subcommand(slice())
        .subcommand(reverse())
        .subcommand(pad())
        .subcommand(random())
}

fn arg_hex() -> Arg {
    Arg::new(ARG_HEX)
        .required(true)
        .value_parser(HexBytes::parse)
        .help("0x-prefixed hex value with an even number of digits")
}

fn arg_representation(name: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .required(true)
        .value_parser(value_parser!(Representation))
}

pub(crate) fn encode() -> Command {
    Command::new(CMD_ENCODE)
        .about("Builds a hex value from another representation")
        .arg(arg_representation(ARG_FROM).help("Representation of <value>"))
        .arg(
            Arg::new(ARG_VALUE)
                .required(true)
                .allow_hyphen_values(true)
                .help("Text, a decimal number, or comma separated byte values"),
        )
}

pub(crate) fn decode() -> Command {
    Command::new(CMD_DECODE)
        .about("Renders a hex value in another representation")
        .arg(arg_representation(ARG_TO).help("Target representation"))
        .arg(arg_hex())
}

pub(crate) fn length() -> Command {
    Command::new(CMD_LENGTH)
        .about("Prints the byte count")
        .arg(arg_hex())
}

pub(crate) fn concat() -> Command {
    Command::new(CMD_CONCAT)
        .about("Concatenates hex values in order")
        .arg(arg_hex().num_args(1..).action(ArgAction::Append))
}

pub(crate) fn flatten() -> Command {
    Command::new(CMD_FLATTEN)
        .about("Flattens a JSON nested array of hex values")
        .arg(
            Arg::new(ARG_JSON)
                .required(true)
                .help("e.g. '[\"0x01\", [\"0x02\"]]'"),
        )
}

pub(crate) fn slice() -> Command {
    Command::new(CMD_SLICE)
        .about("Extracts the byte range [start, end)")
        .arg(arg_hex())
        .arg(
            Arg::new(ARG_START)
                .required(true)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new(ARG_END)
                .required(true)
                .value_parser(value_parser!(usize)),
        )
}

pub(crate) fn reverse() -> Command {
    Command::new(CMD_REVERSE)
        .about("Reverses byte order")
        .arg(arg_hex())
}

pub(crate) fn pad() -> Command {
    Command::new(CMD_PAD)
        .about("Pads with zero bytes to a total byte length")
        .arg(arg_hex())
        .arg(
            Arg::new(ARG_LEN)
                .required(true)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new(ARG_RIGHT)
                .long(ARG_RIGHT)
                .action(ArgAction::SetTrue)
                .help("Appends instead of prepending"),
        )
}

pub(crate) fn random() -> Command {
    Command::new(CMD_RANDOM)
        .about("Draws secure random bytes")
        .arg(
            Arg::new(ARG_LEN)
                .value_parser(value_parser!(usize))
                .help("Byte length, defaults to random.default_length in the config"),
        )
}
