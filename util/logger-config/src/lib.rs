//! Hexseq logger configurations.
//!
//! This crate is used to configure the logger installed by the `hexseq` executable.

use serde::{Deserialize, Serialize};


/// The whole logger configuration, the `[logger]` section of `hexseq.toml`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// An optional string which is used to build [env_logger::Filter].
    ///
    /// If the value is `None`, the executable falls back to its default level.
    ///
    /// [env_logger::Filter]: https://docs.rs/env_logger/*/env_logger/filter/struct.Filter.html
    pub filter: Option<String>,
    /// Colorize the output which was written into the stderr.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            filter: None,
            color: !cfg!(windows),
        }
    }
}
