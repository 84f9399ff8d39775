use std::process::ExitCode;

use clap::Args;

use nupack::runner::plan;
use nupack::{ArgumentOptions, load_or_default};

use crate::invocation::InvocationArgs;

#[derive(Args, Debug)]
pub struct PrintArgs {
    #[command(flatten)]
    invocation: InvocationArgs,
}

/// Print one command line per planned invocation.
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded.
pub fn run(args: &PrintArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let arguments = ArgumentOptions::from(&args.invocation);
    let options = load_or_default(&arguments)?;
    for invocation in plan(&options, &arguments) {
        println!("{invocation}");
    }
    Ok(ExitCode::SUCCESS)
}
