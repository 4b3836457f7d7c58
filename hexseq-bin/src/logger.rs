use env_logger::{Builder, Target, WriteStyle};
use hexseq_app_config::ExitCode;
use hexseq_logger_config::Config;

/// Filter used when the config does not name one.
const DEFAULT_FILTER: &str = "warn";

/// Installs the global logger. Records go to stderr so stdout only carries results.
pub(crate) fn init(config: &Config) -> Result<(), ExitCode> {
    builder(config).try_init().map_err(|err| {
        eprintln!("Logger Error: {err}");
        ExitCode::Failure
    })
}

fn builder(config: &Config) -> Builder {
    let mut builder = Builder::new();
    builder
        .parse_filters(
            config
                .filter
                .as_deref()
                .filter(|filter| !filter.is_empty())
                .unwrap_or(DEFAULT_FILTER),
        )
        .write_style(if config.color {
            WriteStyle::Auto
        } else {
            WriteStyle::Never
        })
        .target(Target::Stderr);
    builder
}
