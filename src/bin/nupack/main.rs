mod build;
mod init;
mod invocation;
mod print;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "nupack",
    about = "Pack and publish NuGet packages from a package.builder.json",
    version
)]
struct Cli {
    /// Log file path (enables file logging in addition to stderr)
    #[arg(long, global = true)]
    log_file: Option<String>,

    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack the target and push it when publishing is enabled
    Build(build::BuildArgs),
    /// Print the package manager command lines without running them
    Print(print::PrintArgs),
    /// Write a default package.builder.json
    Init(init::InitArgs),
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_file = cli
        .log_file
        .as_ref()
        .map(std::fs::File::create)
        .transpose()?;
    nupack::logger::init(nupack::logger::level_filter(cli.verbose), log_file);

    match cli.command {
        Commands::Build(ref args) => build::run(args),
        Commands::Print(ref args) => print::run(args),
        Commands::Init(ref args) => init::run(args),
    }
}
