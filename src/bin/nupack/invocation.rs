use std::path::PathBuf;

use clap::Args;

use nupack::ArgumentOptions;

/// Invocation context, named after the MSBuild macros a post-build step passes
#[derive(Args, Debug)]
pub struct InvocationArgs {
    /// Directory holding the project and package.builder.json ($(ProjectDir))
    #[arg(short = 'd', long, default_value = ".")]
    working_dir: PathBuf,

    /// Project name without extension ($(TargetName))
    #[arg(short, long)]
    target_name: String,

    /// Project file extension ($(ProjectExt))
    #[arg(long, default_value = ".csproj")]
    project_ext: String,

    /// Build output directory ($(OutDir))
    #[arg(short, long)]
    out_dir: String,

    /// Extra properties passed to pack, semicolon separated
    #[arg(short, long, default_value = "")]
    properties: String,

    /// Feed to push to, overriding the configured source
    #[arg(long)]
    source: Option<String>,

    /// API key to push with, overriding the configured key
    #[arg(long)]
    api_key: Option<String>,

    /// Push after packing regardless of publishOnBuild
    #[arg(long)]
    publish: bool,
}

impl From<&InvocationArgs> for ArgumentOptions {
    fn from(args: &InvocationArgs) -> Self {
        ArgumentOptions {
            working_directory: args.working_dir.clone(),
            target_name: args.target_name.clone(),
            project_ext: args.project_ext.clone(),
            out_dir: args.out_dir.clone(),
            properties: args.properties.clone(),
            override_source: args.source.clone(),
            override_api_key: args.api_key.clone(),
            force_publishing: args.publish,
        }
    }
}
