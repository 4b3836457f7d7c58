/// Hexseq process exit codes.
#[repr(i32)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ExitCode {
    /// Command line arguments error.
    Cli = 64,
    /// Config options error.
    Config = 65,
    /// Input/output error.
    IO = 66,
    /// The conversion or operation failed.
    Failure = 113,
}

impl ExitCode {
    /// Converts into signed 32-bit integer which can be used as the process exit status.
    pub fn into(self) -> i32 {
        self as i32
    }
}

impl From<std::io::Error> for ExitCode {
    fn from(err: std::io::Error) -> ExitCode {
        eprintln!("IO Error: {err:?}");
        ExitCode::IO
    }
}

impl From<toml::de::Error> for ExitCode {
    fn from(err: toml::de::Error) -> ExitCode {
        eprintln!("Config Error: {err}");
        ExitCode::Config
    }
}

impl From<clap::Error> for ExitCode {
    fn from(err: clap::Error) -> ExitCode {
        eprintln!("Args Error: {err}");
        ExitCode::Cli
    }
}

impl From<hexseq_error::Error> for ExitCode {
    fn from(err: hexseq_error::Error) -> ExitCode {
        eprintln!("{} Error: {err}", err.kind());
        ExitCode::Failure
    }
}
