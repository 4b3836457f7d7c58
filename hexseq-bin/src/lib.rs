//! Hexseq executable.
//!
//! This crate is created to keep the root binary a thin entry point.
mod logger;
mod subcommand;

#[cfg(test)]
mod tests;

use clap::ArgMatches;
use hexseq_app_config::{ExitCode, Setup, cli};
use hexseq_logger::{debug, debug_target, error, warn};

const CONFIG_TARGET: &str = "hexseq::config";

/// The executable main entry.
///
/// It returns `Ok` when the process exits normally, otherwise the `ExitCode` is converted to the
/// process exit status code.
pub fn run_app() -> Result<(), ExitCode> {
    let (bin_name, app_matches) = cli::get_bin_name_and_matches();
    let setup = Setup::from_matches(&app_matches)?;
    logger::init(setup.config.logger())?;
    if let Some(path) = &setup.config.source {
        debug_target!(CONFIG_TARGET, "loaded from {}", path.display());
    } else {
        debug_target!(CONFIG_TARGET, "no config file, using defaults");
    }
    for warning in setup.config.warnings() {
        warn!("{}", warning);
    }

    let matches = app_matches
        .subcommand_matches(&setup.subcommand_name)
        .ok_or(ExitCode::Cli)?;
    debug!("{} {}", bin_name, setup.subcommand_name);
    let output = run_subcommand(&setup, matches).inspect_err(|code| {
        error!("{} failed with {:?}", setup.subcommand_name, code);
    })?;
    println!("{output}");
    Ok(())
}

/// Runs the subcommand named by `setup` and returns the line to print.
///
/// `matches` are the matches of that subcommand.
pub fn run_subcommand(setup: &Setup, matches: &ArgMatches) -> Result<String, ExitCode> {
    let cmd = setup.subcommand_name.as_str();
    match cmd {
        cli::CMD_ENCODE => subcommand::encode(setup.encode(matches)?),
        cli::CMD_DECODE => subcommand::decode(setup.decode(matches)?),
        cli::CMD_LENGTH => Ok(subcommand::length(setup.hex(matches)?)),
        cli::CMD_CONCAT => Ok(subcommand::concat(setup.concat(matches)?)),
        cli::CMD_FLATTEN => Ok(subcommand::flatten(setup.flatten(matches)?)),
        cli::CMD_SLICE => subcommand::slice(setup.slice(matches)?),
        cli::CMD_REVERSE => Ok(subcommand::reverse(setup.hex(matches)?)),
        cli::CMD_PAD => subcommand::pad(setup.pad(matches)?),
        cli::CMD_RANDOM => subcommand::random(setup.random(matches)?),
        _ => {
            eprintln!("unknown subcommand {cmd}");
            Err(ExitCode::Cli)
        }
    }
}
