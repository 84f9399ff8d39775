use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;

use nupack::runner::{self, DEFAULT_TOOL, RunError};
use nupack::{ArgumentOptions, load_or_default};

use crate::invocation::InvocationArgs;

#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    invocation: InvocationArgs,

    /// Package manager executable
    #[arg(long, default_value = DEFAULT_TOOL)]
    nuget: PathBuf,
}

/// Pack, then push when publishing is enabled.
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded or the package
/// manager cannot be started. A failing package manager has already printed
/// its failure line and is reported through the exit code only.
pub fn run(args: &BuildArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let arguments = ArgumentOptions::from(&args.invocation);
    let options = load_or_default(&arguments)?;

    exit_code(runner::run(&args.nuget, &options, &arguments))
}

/// Map a run result to the exit code. Tool failures were already printed by
/// the runner, so only spawn failures go back to `main` for reporting.
fn exit_code(result: Result<(), RunError>) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e @ RunError::ToolFailed { .. }) => {
            Ok(ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1)))
        }
        Err(e) => Err(e.into()),
    }
}
