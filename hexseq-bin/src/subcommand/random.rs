use hexseq_app_config::{ExitCode, RandomArgs};
use hexseq_error::Error;
use hexseq_logger::trace;
use hexseq_types::HexBytes;

pub fn random(args: RandomArgs) -> Result<String, ExitCode> {
    trace!("drawing {} bytes from the OS generator", args.len);
    let value = HexBytes::random_os(args.len).map_err(Error::from)?;
    Ok(value.to_string())
}
