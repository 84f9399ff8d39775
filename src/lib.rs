//! Core implementation of the nupack package builder
//!
//! nupack packs a project (or a bare nuspec) with an external NuGet-style
//! package manager and optionally pushes the result to a feed. Per-project
//! settings live in a `package.builder.json` next to the project file; the
//! invocation context (target name, output directory, overrides) comes from
//! the caller, usually a post-build step.

pub mod arguments;
pub mod init;
pub mod logger;
pub mod messages;
pub mod options;
pub mod runner;
pub mod tool_args;

pub use arguments::ArgumentOptions;
pub use options::{OptionsError, PackageOptions, PushPackageOptions, load_or_default};
pub use tool_args::{ToolArg, ToolArgs, pack_args, push_args};
