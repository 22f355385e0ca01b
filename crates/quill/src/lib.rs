mod ops;

use std::ffi::OsString;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ops::{diagnostics, projects, refresh_file};

pub use ops::refresh_file::RefreshFileCommand;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Reload a file of a project from disk
    RefreshFile(refresh_file::Args),

    /// List the projects of a workspace
    Projects(projects::Args),

    /// Render diagnostics stored in a JSON file
    Diagnostics(diagnostics::Args),
}

#[derive(Copy, Debug, Clone, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<bool> for ExitStatus {
    fn from(value: bool) -> Self {
        if value {
            ExitStatus::Success
        } else {
            ExitStatus::Error
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::SUCCESS,
            ExitStatus::Error => ExitCode::FAILURE,
        }
    }
}

pub fn run_with_args<T, I>(args: I) -> Result<ExitStatus, anyhow::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::parse_from(args);
    match args.command {
        Command::RefreshFile(args) => refresh_file::refresh_file(args),
        Command::Projects(args) => projects::projects(args),
        Command::Diagnostics(args) => diagnostics::diagnostics(args),
    }
}
