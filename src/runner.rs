//! Invokes the package manager for `pack` and, when publishing, `push`

use std::path::{Path, PathBuf};
use std::process::Command as ProcessCommand;
use std::time::Instant;

use log::{debug, info};
use thiserror::Error;

use crate::arguments::ArgumentOptions;
use crate::messages::{
    describe_exit, format_failure_message, format_start_message, format_success_message,
};
use crate::options::PackageOptions;
use crate::tool_args::{ToolArgs, pack_args, push_args};

/// Executable used when the caller does not name one
pub const DEFAULT_TOOL: &str = "nuget";

#[derive(Error, Debug)]
pub enum RunError {
    #[error("Unable to start {tool} for {operation}: {source}")]
    Spawn {
        tool: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{tool} {operation} failed ({})", describe_exit(*.exit_code))]
    ToolFailed {
        tool: PathBuf,
        operation: String,
        exit_code: Option<i32>,
    },
}

impl RunError {
    /// Exit code to hand back to the calling build
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::ToolFailed {
                exit_code: Some(code),
                ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

/// Invocations for one build, in execution order: always `pack`, then `push`
/// when `publish.publish_on_build` is set.
#[must_use]
pub fn plan(options: &PackageOptions, arguments: &ArgumentOptions) -> Vec<ToolArgs> {
    let mut invocations = vec![pack_args(options, arguments)];
    if options.publish.publish_on_build {
        invocations.push(push_args(options, arguments));
    } else {
        debug!("Publishing disabled, skipping push");
    }
    invocations
}

/// Runs one invocation with inherited stdio and waits for it.
///
/// The child inherits the caller's working directory; the target path already
/// carries the working directory and `out_dir` is relative to the caller.
///
/// # Errors
///
/// Returns `RunError::Spawn` if the tool cannot be started and
/// `RunError::ToolFailed` if it exits unsuccessfully.
pub fn execute(tool: &Path, args: &ToolArgs) -> Result<(), RunError> {
    let operation = args.operation().to_string();
    eprintln!(
        "{}",
        format_start_message(&tool.display().to_string(), &args.command_line())
    );

    let mut command = ProcessCommand::new(tool);
    command.args(args.to_args());

    let start = Instant::now();
    let status = command.status().map_err(|e| RunError::Spawn {
        tool: tool.to_path_buf(),
        operation: operation.clone(),
        source: e,
    })?;
    debug!("{operation} finished in {:.1}s", start.elapsed().as_secs_f64());

    if status.success() {
        eprintln!("{}", format_success_message(&operation));
        Ok(())
    } else {
        eprintln!("{}", format_failure_message(&operation, status.code()));
        Err(RunError::ToolFailed {
            tool: tool.to_path_buf(),
            operation,
            exit_code: status.code(),
        })
    }
}

/// Packs, then pushes if publishing is enabled. Stops at the first failure.
///
/// # Errors
///
/// Returns the first `RunError` encountered; a failed pack means no push.
pub fn run(
    tool: &Path,
    options: &PackageOptions,
    arguments: &ArgumentOptions,
) -> Result<(), RunError> {
    let invocations = plan(options, arguments);
    info!(
        "Running {} package manager invocation(s) for {}",
        invocations.len(),
        arguments.target_name
    );
    for args in &invocations {
        execute(tool, args)?;
    }
    Ok(())
}
