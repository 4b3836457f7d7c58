use hexseq_app_config::{ConcatArgs, ExitCode, FlattenArgs, HexArgs, PadArgs, SliceArgs};
use hexseq_error::Error;
use hexseq_types::{HexBytes, flatten as flatten_fragments};

pub fn length(args: HexArgs) -> String {
    args.hex.len().to_string()
}

pub fn concat(args: ConcatArgs) -> String {
    args.values
        .iter()
        .fold(HexBytes::default(), |acc, value| acc.concat(value))
        .to_string()
}

pub fn flatten(args: FlattenArgs) -> String {
    flatten_fragments(&args.fragments).to_string()
}

pub fn slice(args: SliceArgs) -> Result<String, ExitCode> {
    let value = args.hex.slice(args.start, args.end).map_err(Error::from)?;
    Ok(value.to_string())
}

pub fn reverse(args: HexArgs) -> String {
    args.hex.reverse().to_string()
}

pub fn pad(args: PadArgs) -> Result<String, ExitCode> {
    let padded = if args.right {
        args.hex.pad_right(args.len)
    } else {
        args.hex.pad_left(args.len)
    };
    Ok(padded.map_err(Error::from)?.to_string())
}
