use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write package.builder.json into
    #[arg(short = 'd', long, default_value = ".")]
    working_dir: PathBuf,

    /// Overwrite an existing config file
    #[arg(long)]
    force: bool,
}

/// Write the default config file.
///
/// # Errors
///
/// Returns an error if the file exists (without `--force`) or cannot be written.
pub fn run(args: &InitArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    nupack::init::run(&args.working_dir, args.force)?;
    Ok(ExitCode::SUCCESS)
}
