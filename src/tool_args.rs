//! Argument lists for the package manager's `pack` and `push` operations
//!
//! Both formatters build a list of [`ToolArg`] tokens. The list is handed to
//! the process as-is and only flattened into a single command line for display,
//! where [`ToolArg::Quoted`] values are wrapped in double quotes and
//! [`ToolArg::Secret`] values are masked.

use std::fmt;

use crate::arguments::ArgumentOptions;
use crate::options::{PackageOptions, non_blank};

/// A single token on the package manager's command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolArg {
    /// An operation name or switch, e.g. `pack` or `-Symbols`
    Flag(&'static str),
    /// A value rendered as-is
    Value(String),
    /// A path-like value rendered inside double quotes
    Quoted(String),
    /// A credential passed to the process but rendered as `***`
    Secret(String),
}

impl ToolArg {
    fn as_str(&self) -> &str {
        match self {
            ToolArg::Flag(flag) => *flag,
            ToolArg::Value(value) | ToolArg::Quoted(value) | ToolArg::Secret(value) => {
                value.as_str()
            }
        }
    }
}

impl fmt::Display for ToolArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolArg::Quoted(value) => write!(f, "\"{value}\""),
            ToolArg::Secret(_) => f.write_str("***"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Ordered argument tokens for one package manager invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolArgs {
    tokens: Vec<ToolArg>,
}

impl ToolArgs {
    fn flag(&mut self, flag: &'static str) -> &mut Self {
        self.tokens.push(ToolArg::Flag(flag));
        self
    }

    fn flag_if(&mut self, enabled: bool, flag: &'static str) -> &mut Self {
        if enabled {
            self.flag(flag);
        }
        self
    }

    fn value(&mut self, value: impl Into<String>) -> &mut Self {
        self.tokens.push(ToolArg::Value(value.into()));
        self
    }

    fn secret(&mut self, value: impl Into<String>) -> &mut Self {
        self.tokens.push(ToolArg::Secret(value.into()));
        self
    }

    fn quoted(&mut self, value: impl Into<String>) -> &mut Self {
        self.tokens.push(ToolArg::Quoted(value.into()));
        self
    }

    fn verbosity(&mut self, options: &PackageOptions) -> &mut Self {
        if let Some(verbosity) = options.effective_verbosity() {
            self.flag("-Verbosity").value(verbosity);
        }
        self
    }

    #[must_use]
    pub fn tokens(&self) -> &[ToolArg] {
        &self.tokens
    }

    /// The operation name, i.e. the first token
    #[must_use]
    pub fn operation(&self) -> &str {
        self.tokens.first().map_or("", ToolArg::as_str)
    }

    /// Whether the list holds this exact switch
    #[must_use]
    pub fn has_flag(&self, flag: &str) -> bool {
        self.tokens
            .iter()
            .any(|t| matches!(t, ToolArg::Flag(f) if *f == flag))
    }

    /// The token following a switch, e.g. the level after `-Verbosity`
    #[must_use]
    pub fn value_of(&self, flag: &str) -> Option<&str> {
        let idx = self
            .tokens
            .iter()
            .position(|t| matches!(t, ToolArg::Flag(f) if *f == flag))?;
        self.tokens.get(idx + 1).map(ToolArg::as_str)
    }

    /// Raw arguments for `std::process::Command::args`, without display quoting
    #[must_use]
    pub fn to_args(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.as_str().to_string()).collect()
    }

    /// The command line as a single string, quoting path-like values and
    /// masking secrets
    #[must_use]
    pub fn command_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ToolArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Project file (or nuspec when `use_nuspec_file_only` is set) to pack
#[must_use]
pub fn package_target(options: &PackageOptions, arguments: &ArgumentOptions) -> String {
    let ext = if options.use_nuspec_file_only {
        ".nuspec"
    } else {
        arguments.project_ext.as_str()
    };
    arguments
        .working_directory
        .join(format!("{}{ext}", arguments.target_name))
        .display()
        .to_string()
}

fn properties(options: &PackageOptions, arguments: &ArgumentOptions) -> String {
    let mut properties = format!("OutDir={};{}", arguments.out_dir, arguments.properties);
    if let Some(additional) = options.effective_additional_properties() {
        properties.push(';');
        properties.push_str(additional);
    }
    properties
}

/// Arguments for `pack`.
///
/// Token order matches what existing build scripts expect:
/// target, symbols, default excludes, verbosity, properties, `-NonInteractive`,
/// output directory, base path, referenced projects.
#[must_use]
pub fn pack_args(options: &PackageOptions, arguments: &ArgumentOptions) -> ToolArgs {
    let mut args = ToolArgs::default();
    args.flag("pack")
        .quoted(package_target(options, arguments))
        .flag_if(options.symbols, "-Symbols")
        .flag_if(options.no_default_excludes, "-NoDefaultExcludes")
        .verbosity(options)
        .flag("-Properties")
        .quoted(properties(options, arguments))
        .flag("-NonInteractive")
        .flag("-OutputDirectory")
        .quoted(arguments.out_dir.as_str())
        .flag("-basepath")
        .quoted(arguments.out_dir.as_str())
        .flag_if(options.include_referenced_projects, "-IncludeReferencedProjects");
    args
}

/// Glob matching every package `pack` produced for the target
#[must_use]
pub fn packages_to_push(arguments: &ArgumentOptions) -> String {
    format!("{}\\{}.*.nupkg", arguments.out_dir, arguments.target_name)
}

/// API key to push with: the caller's override, else the configured key
#[must_use]
pub fn effective_api_key<'a>(
    options: &'a PackageOptions,
    arguments: &'a ArgumentOptions,
) -> Option<&'a str> {
    arguments
        .override_api_key
        .as_deref()
        .or(options.publish.api_key.as_deref())
}

/// Feed to push to: the caller's override, else the configured source
#[must_use]
pub fn effective_source<'a>(
    options: &'a PackageOptions,
    arguments: &'a ArgumentOptions,
) -> Option<&'a str> {
    arguments
        .override_source
        .as_deref()
        .or(options.publish.source.as_deref())
}

/// Arguments for `push`.
///
/// The API key and `-s` source are left out when neither the caller nor the
/// config supplies them, so the package manager falls back to its own settings.
#[must_use]
pub fn push_args(options: &PackageOptions, arguments: &ArgumentOptions) -> ToolArgs {
    let mut args = ToolArgs::default();
    args.flag("push").quoted(packages_to_push(arguments));
    if let Some(api_key) = non_blank(effective_api_key(options, arguments)) {
        args.secret(api_key);
    }
    if let Some(source) = non_blank(effective_source(options, arguments)) {
        args.flag("-s").value(source);
    }
    args.flag("-Timeout")
        .value(options.publish.timeout.to_string())
        .verbosity(options)
        .flag("-NonInteractive");
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::PushPackageOptions;

    fn my_lib() -> ArgumentOptions {
        ArgumentOptions {
            working_directory: "C:\\proj".into(),
            target_name: "MyLib".to_string(),
            project_ext: ".csproj".to_string(),
            out_dir: "C:\\out".to_string(),
            properties: "Configuration=Release".to_string(),
            ..Default::default()
        }
    }

    fn count(args: &ToolArgs, flag: &str) -> usize {
        args.tokens()
            .iter()
            .filter(|t| matches!(t, ToolArg::Flag(f) if *f == flag))
            .count()
    }

    #[test]
    fn test_pack_all_flags_once() {
        let args = pack_args(&PackageOptions::default(), &my_lib());
        assert_eq!(args.operation(), "pack");
        for flag in [
            "-Symbols",
            "-NoDefaultExcludes",
            "-Verbosity",
            "-IncludeReferencedProjects",
            "-NonInteractive",
        ] {
            assert_eq!(count(&args, flag), 1, "{flag}");
        }
        assert_eq!(args.value_of("-Verbosity"), Some("Detailed"));
        let line = args.command_line();
        assert!(line.contains("MyLib.csproj\""), "got: {line}");
        assert!(line.contains("-Verbosity Detailed"), "got: {line}");
    }

    #[test]
    fn test_pack_nuspec_only() {
        let options = PackageOptions {
            use_nuspec_file_only: true,
            ..Default::default()
        };
        let target = package_target(&options, &my_lib());
        assert!(target.ends_with("MyLib.nuspec"), "got: {target}");
        assert!(!target.contains(".csproj"));
    }

    #[test]
    fn test_pack_disabled_flags_are_omitted() {
        let options = PackageOptions {
            symbols: false,
            no_default_excludes: false,
            include_referenced_projects: false,
            verbosity: Some(String::new()),
            ..Default::default()
        };
        let args = pack_args(&options, &my_lib());
        assert!(!args.has_flag("-Symbols"));
        assert!(!args.has_flag("-NoDefaultExcludes"));
        assert!(!args.has_flag("-IncludeReferencedProjects"));
        assert!(!args.has_flag("-Verbosity"));
        assert!(args.has_flag("-NonInteractive"));
    }

    #[test]
    fn test_pack_properties() {
        let args = pack_args(&PackageOptions::default(), &my_lib());
        assert_eq!(
            args.value_of("-Properties"),
            Some("OutDir=C:\\out;Configuration=Release")
        );

        let options = PackageOptions {
            additional_properties: Some("Version=1.2.3".to_string()),
            ..Default::default()
        };
        let args = pack_args(&options, &my_lib());
        assert_eq!(
            args.value_of("-Properties"),
            Some("OutDir=C:\\out;Configuration=Release;Version=1.2.3")
        );
        assert_eq!(args.value_of("-OutputDirectory"), Some("C:\\out"));
        assert_eq!(args.value_of("-basepath"), Some("C:\\out"));
    }

    #[test]
    fn test_pack_command_line() {
        let arguments = ArgumentOptions {
            working_directory: std::path::PathBuf::new(),
            ..my_lib()
        };
        let args = pack_args(&PackageOptions::default(), &arguments);
        insta::assert_snapshot!(
            args.command_line(),
            @r#"pack "MyLib.csproj" -Symbols -NoDefaultExcludes -Verbosity Detailed -Properties "OutDir=C:\out;Configuration=Release" -NonInteractive -OutputDirectory "C:\out" -basepath "C:\out" -IncludeReferencedProjects"#
        );
    }

    #[test]
    fn test_push_glob() {
        let args = push_args(&PackageOptions::default(), &my_lib());
        assert_eq!(
            args.tokens()[1],
            ToolArg::Quoted("C:\\out\\MyLib.*.nupkg".to_string())
        );
    }

    #[test]
    fn test_push_overrides_take_precedence() {
        let options = PackageOptions {
            publish: PushPackageOptions {
                source: Some("https://configured".to_string()),
                api_key: Some("configured-key".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let args = push_args(&options, &my_lib());
        assert_eq!(args.tokens()[2], ToolArg::Secret("configured-key".to_string()));
        assert_eq!(args.value_of("-s"), Some("https://configured"));

        let arguments = ArgumentOptions {
            override_source: Some("https://override".to_string()),
            override_api_key: Some("override-key".to_string()),
            ..my_lib()
        };
        let args = push_args(&options, &arguments);
        assert_eq!(args.tokens()[2], ToolArg::Secret("override-key".to_string()));
        assert_eq!(args.value_of("-s"), Some("https://override"));
    }

    #[test]
    fn test_push_without_key_or_source() {
        let args = push_args(&PackageOptions::default(), &my_lib());
        assert!(!args.has_flag("-s"));
        assert_eq!(args.tokens()[2], ToolArg::Flag("-Timeout"));
        assert_eq!(args.value_of("-Timeout"), Some("300"));
    }

    #[test]
    fn test_push_command_line() {
        let options = PackageOptions {
            publish: PushPackageOptions {
                source: Some("https://feed/api/v2".to_string()),
                api_key: Some("key".to_string()),
                timeout: 120,
                publish_on_build: true,
            },
            ..Default::default()
        };
        let args = push_args(&options, &my_lib());
        insta::assert_snapshot!(
            args.command_line(),
            @r#"push "C:\out\MyLib.*.nupkg" *** -s https://feed/api/v2 -Timeout 120 -Verbosity Detailed -NonInteractive"#
        );
    }

    #[test]
    fn test_to_args_has_no_display_quotes() {
        let args = push_args(&PackageOptions::default(), &my_lib());
        assert_eq!(args.to_args()[1], "C:\\out\\MyLib.*.nupkg");
    }

    #[test]
    fn test_push_command_line_masks_api_key() {
        let options = PackageOptions {
            publish: PushPackageOptions {
                api_key: Some("SECRET-KEY".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let args = push_args(&options, &my_lib());
        let line = args.command_line();
        assert!(!line.contains("SECRET-KEY"), "got: {line}");
        assert!(line.contains(" *** "), "got: {line}");
        assert_eq!(args.to_args()[2], "SECRET-KEY");
    }

    #[test]
    fn test_blank_override_suppresses_configured_values() {
        let options = PackageOptions {
            publish: PushPackageOptions {
                source: Some("https://configured".to_string()),
                api_key: Some("configured-key".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let arguments = ArgumentOptions {
            override_source: Some(String::new()),
            override_api_key: Some("  ".to_string()),
            ..my_lib()
        };
        let args = push_args(&options, &arguments);
        assert!(!args.has_flag("-s"));
        assert!(!args.to_args().iter().any(|a| a.contains("configured")));
        assert_eq!(args.tokens()[2], ToolArg::Flag("-Timeout"));
    }
}
