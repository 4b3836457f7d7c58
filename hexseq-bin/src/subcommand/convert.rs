use hexseq_app_config::{DecodeArgs, EncodeArgs, ExitCode, Representation};
use hexseq_error::Error;
use hexseq_logger::debug;
use hexseq_types::{BigInt, HexBytes};
use std::fmt::Display;
use std::str::FromStr;

pub fn encode(args: EncodeArgs) -> Result<String, ExitCode> {
    let input = args.value.as_str();
    let value = match args.from {
        Representation::Ascii => HexBytes::from_ascii(input).map_err(Error::from)?,
        Representation::Utf8 => HexBytes::from_utf8_str(input),
        Representation::Number => encode_number(input)?,
        Representation::Nat => {
            HexBytes::from_big_int(&parse_decimal::<BigInt>(input)?).map_err(Error::from)?
        }
        Representation::Array => {
            let input = input.trim();
            let values = if input.is_empty() {
                Vec::new()
            } else {
                input
                    .split(',')
                    .map(parse_decimal::<i64>)
                    .collect::<Result<Vec<_>, _>>()?
            };
            HexBytes::from_array(&values).map_err(Error::from)?
        }
    };
    debug!("encoded {:?} into {} bytes", args.from, value.len());
    Ok(value.to_string())
}

pub fn decode(args: DecodeArgs) -> Result<String, ExitCode> {
    let hex = args.hex;
    let output = match args.to {
        Representation::Ascii => hex.to_ascii(),
        Representation::Utf8 => hex.to_utf8_string().map_err(|err| {
            eprintln!("Decode Error: {hex} is not valid UTF-8: {err}");
            ExitCode::Failure
        })?,
        Representation::Number => hex.to_number::<u128>().map_err(Error::from)?.to_string(),
        Representation::Nat => hex.to_nat().to_string(),
        Representation::Array => hex
            .to_array()
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(","),
    };
    Ok(output)
}

/// Accepts the whole `u128` range. Negative input is parsed as `i128` so it fails the sign check.
fn encode_number(input: &str) -> Result<HexBytes, ExitCode> {
    let value = match input.trim().parse::<u128>() {
        Ok(value) => HexBytes::from_number(value),
        Err(_) => HexBytes::from_number(parse_decimal::<i128>(input)?),
    };
    Ok(value.map_err(Error::from)?)
}

fn parse_decimal<T>(input: &str) -> Result<T, ExitCode>
where
    T: FromStr,
    T::Err: Display,
{
    input.trim().parse().map_err(|err| {
        eprintln!("Args Error: {input:?} is not a decimal number: {err}");
        ExitCode::Cli
    })
}
