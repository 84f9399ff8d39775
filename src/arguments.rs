use std::path::PathBuf;

/// Invocation context supplied by the caller, usually a post-build step
/// passing MSBuild's `$(ProjectDir)`, `$(TargetName)`, `$(ProjectExt)` and
/// `$(OutDir)` through.
#[derive(Debug, Clone, Default)]
pub struct ArgumentOptions {
    /// Directory holding the project file and `package.builder.json`
    pub working_directory: PathBuf,
    /// Project name without extension, e.g. `MyLib`
    pub target_name: String,
    /// Project file extension including the dot, e.g. `.csproj`
    pub project_ext: String,
    /// Build output directory; packages are written here too
    pub out_dir: String,
    /// Semicolon separated `key=value` pairs forwarded to `-Properties`
    pub properties: String,
    /// Feed to push to instead of the configured source
    pub override_source: Option<String>,
    /// API key to push with instead of the configured one
    pub override_api_key: Option<String>,
    /// Push after packing even if the config says otherwise
    pub force_publishing: bool,
}
