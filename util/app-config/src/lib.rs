//! Hexseq command line arguments and config options.
mod app_config;
mod args;
pub mod cli;
mod exit_code;


pub use app_config::{AppConfig, DEFAULT_CONFIG_FILE, DEFAULT_RANDOM_LENGTH, RandomConfig};
pub use args::{
    ConcatArgs, DecodeArgs, EncodeArgs, FlattenArgs, HexArgs, PadArgs, RandomArgs,
    Representation, SliceArgs,
};
pub use exit_code::ExitCode;

use clap::ArgMatches;
use hexseq_types::{Fragment, HexBytes};
use std::path::PathBuf;

/// The parsed subcommand together with the loaded config.
pub struct Setup {
    /// The name of the subcommand being run.
    pub subcommand_name: String,
    /// The loaded `hexseq.toml`, or the defaults.
    pub config: AppConfig,
}

impl Setup {
    /// Loads the config for the subcommand. `matches` are the root matches.
    pub fn from_matches(matches: &ArgMatches) -> Result<Setup, ExitCode> {
        let subcommand_name = match matches.subcommand_name() {
            Some(subcommand_name) => subcommand_name,
            None => {
                eprintln!("expect a subcommand");
                return Err(ExitCode::Cli);
            }
        };
        let root_dir = std::env::current_dir()?;
        let explicit = matches
            .get_one::<PathBuf>(cli::ARG_CONFIG)
            .map(PathBuf::as_path);
        let config = AppConfig::load(&root_dir, explicit)?;

        Ok(Setup {
            subcommand_name: subcommand_name.to_string(),
            config,
        })
    }

    /// Arguments of `hexseq encode`.
    pub fn encode(&self, matches: &ArgMatches) -> Result<EncodeArgs, ExitCode> {
        Ok(EncodeArgs {
            from: required::<Representation>(matches, cli::ARG_FROM)?,
            value: required::<String>(matches, cli::ARG_VALUE)?,
        })
    }

    /// Arguments of `hexseq decode`.
    pub fn decode(&self, matches: &ArgMatches) -> Result<DecodeArgs, ExitCode> {
        Ok(DecodeArgs {
            to: required::<Representation>(matches, cli::ARG_TO)?,
            hex: required::<HexBytes>(matches, cli::ARG_HEX)?,
        })
    }

    /// Arguments of `hexseq length` and `hexseq reverse`.
    pub fn hex(&self, matches: &ArgMatches) -> Result<HexArgs, ExitCode> {
        Ok(HexArgs {
            hex: required::<HexBytes>(matches, cli::ARG_HEX)?,
        })
    }

    /// Arguments of `hexseq concat`.
    pub fn concat(&self, matches: &ArgMatches) -> Result<ConcatArgs, ExitCode> {
        let values = matches
            .get_many::<HexBytes>(cli::ARG_HEX)
            .ok_or(ExitCode::Cli)?
            .cloned()
            .collect();
        Ok(ConcatArgs { values })
    }

    /// Arguments of `hexseq flatten`.
    pub fn flatten(&self, matches: &ArgMatches) -> Result<FlattenArgs, ExitCode> {
        let json = required::<String>(matches, cli::ARG_JSON)?;
        let fragments: Vec<Fragment> = serde_json::from_str(&json).map_err(|err| {
            eprintln!("Args Error: {json} is not a nested array of hex values: {err}");
            ExitCode::Cli
        })?;
        Ok(FlattenArgs { fragments })
    }

    /// Arguments of `hexseq slice`.
    pub fn slice(&self, matches: &ArgMatches) -> Result<SliceArgs, ExitCode> {
        Ok(SliceArgs {
            hex: required::<HexBytes>(matches, cli::ARG_HEX)?,
            start: required::<usize>(matches, cli::ARG_START)?,
            end: required::<usize>(matches, cli::ARG_END)?,
        })
    }

    /// Arguments of `hexseq pad`.
    pub fn pad(&self, matches: &ArgMatches) -> Result<PadArgs, ExitCode> {
        Ok(PadArgs {
            hex: required::<HexBytes>(matches, cli::ARG_HEX)?,
            len: required::<usize>(matches, cli::ARG_LEN)?,
            right: matches.get_flag(cli::ARG_RIGHT),
        })
    }

    /// Arguments of `hexseq random`, falling back to `random.default_length`.
    pub fn random(&self, matches: &ArgMatches) -> Result<RandomArgs, ExitCode> {
        let len = matches
            .get_one::<usize>(cli::ARG_LEN)
            .copied()
            .unwrap_or(self.config.random.default_length);
        Ok(RandomArgs { len })
    }
}

fn required<T: Clone + Send + Sync + 'static>(
    matches: &ArgMatches,
    id: &str,
) -> Result<T, ExitCode> {
    match matches.try_get_one::<T>(id) {
        Ok(Some(value)) => Ok(value.clone()),
        Ok(None) => {
            eprintln!("Args Error: missing <{id}>");
            Err(ExitCode::Cli)
        }
        Err(err) => {
            eprintln!("Args Error: {err}");
            Err(ExitCode::Cli)
        }
    }
}
