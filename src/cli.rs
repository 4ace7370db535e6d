use std::{ffi::OsString, path::PathBuf, process};

use clap::Parser;

#[derive(Parser)]
#[command(name=env!("CARGO_PKG_NAME"), version=env!("CARGO_PKG_VERSION"), about="Run a command with environment variables read from a directory", long_about = None)]
pub struct Cli {
    /// Directory containing one file per environment variable
    pub dir: PathBuf,

    /// Command to run, followed by its arguments
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<OsString>,
}

/// Parse the process arguments, exiting on failure.
///
/// Usage errors always exit with status 1; `--help` and `--version`
/// print to stdout and exit with status 0.
pub fn parse() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    }
}
