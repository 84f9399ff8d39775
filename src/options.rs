//! Package options and the `package.builder.json` config file

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::arguments::ArgumentOptions;

/// Name of the per-project config file, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "package.builder.json";

/// Default verbosity passed to the package manager
pub const DEFAULT_VERBOSITY: &str = "Detailed";

/// Default push timeout in seconds
pub const DEFAULT_PUSH_TIMEOUT: u32 = 300;

/// Errors that can occur while loading or saving package options
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("Unable to read config file {path}: {source}")]
    Read {
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("Unable to parse JSON config file {path}: {source}")]
    Json {
        source: serde_json::Error,
        path: PathBuf,
    },
    #[error("Unable to write config file {path}: {source}")]
    Write {
        source: std::io::Error,
        path: PathBuf,
    },
}

/// Settings for the `push` step
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PushPackageOptions {
    /// Push the package after every successful pack
    #[serde(alias = "PublishOnBuild")]
    pub publish_on_build: bool,
    /// Feed URL; the package manager's configured default is used when unset
    #[serde(alias = "Source", skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(alias = "ApiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Seconds before the package manager gives up on the upload
    #[serde(alias = "Timeout")]
    pub timeout: u32,
}

impl Default for PushPackageOptions {
    fn default() -> Self {
        Self {
            publish_on_build: false,
            source: None,
            api_key: None,
            timeout: DEFAULT_PUSH_TIMEOUT,
        }
    }
}

/// Settings for the `pack` step, plus the nested push settings.
///
/// Fields missing from the config file keep the values from [`Default`]:
/// symbols, referenced projects and default excludes are all on, verbosity is
/// `Detailed`, and the project file (not a bare nuspec) is packed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PackageOptions {
    /// Pack `<target>.nuspec` instead of the project file
    #[serde(alias = "UseNuspecFileOnly")]
    pub use_nuspec_file_only: bool,
    #[serde(alias = "Symbols")]
    pub symbols: bool,
    #[serde(alias = "IncludeReferencedProjects")]
    pub include_referenced_projects: bool,
    #[serde(alias = "NoDefaultExcludes")]
    pub no_default_excludes: bool,
    #[serde(alias = "Verbosity")]
    pub verbosity: Option<String>,
    /// Extra `key=value` pairs appended to `-Properties`, semicolon separated
    #[serde(alias = "AdditionalProperties", skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<String>,
    #[serde(alias = "Publish")]
    pub publish: PushPackageOptions,
}

impl Default for PackageOptions {
    fn default() -> Self {
        Self {
            use_nuspec_file_only: false,
            symbols: true,
            include_referenced_projects: true,
            no_default_excludes: true,
            verbosity: Some(DEFAULT_VERBOSITY.to_string()),
            additional_properties: None,
            publish: PushPackageOptions::default(),
        }
    }
}

impl PackageOptions {
    /// Loads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::Read` if the file cannot be read, or
    /// `OptionsError::Json` if it is not valid JSON for these options.
    pub fn from_file(file: &Path) -> Result<PackageOptions, OptionsError> {
        let contents = std::fs::read_to_string(file).map_err(|e| OptionsError::Read {
            source: e,
            path: file.to_path_buf(),
        })?;
        serde_json::from_str(&contents).map_err(|e| OptionsError::Json {
            source: e,
            path: file.to_path_buf(),
        })
    }

    /// Writes the options as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::Write` if the file cannot be written.
    pub fn save(&self, file: &Path) -> Result<(), OptionsError> {
        let mut contents = serde_json::to_string_pretty(self).map_err(|e| OptionsError::Json {
            source: e,
            path: file.to_path_buf(),
        })?;
        contents.push('\n');
        std::fs::write(file, contents).map_err(|e| OptionsError::Write {
            source: e,
            path: file.to_path_buf(),
        })
    }

    /// Verbosity to pass on, or `None` when unset or blank
    #[must_use]
    pub fn effective_verbosity(&self) -> Option<&str> {
        non_blank(self.verbosity.as_deref())
    }

    /// Additional properties to append, or `None` when unset or blank
    #[must_use]
    pub fn effective_additional_properties(&self) -> Option<&str> {
        non_blank(self.additional_properties.as_deref())
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Path of the config file for a working directory
#[must_use]
pub fn config_path(working_directory: &Path) -> PathBuf {
    working_directory.join(CONFIG_FILE_NAME)
}

/// Load the options for an invocation.
///
/// Reads `package.builder.json` from the working directory when it exists and
/// falls back to [`PackageOptions::default`] otherwise. When the caller forces
/// publishing, `publish.publish_on_build` is set regardless of the file.
///
/// # Errors
///
/// Returns `OptionsError` if the config file exists but cannot be read or parsed.
pub fn load_or_default(arguments: &ArgumentOptions) -> Result<PackageOptions, OptionsError> {
    let file = config_path(&arguments.working_directory);
    let mut options = if file.exists() {
        info!("Loading package options from {}", file.display());
        PackageOptions::from_file(&file)?
    } else {
        debug!(
            "No {CONFIG_FILE_NAME} in {}, using defaults",
            arguments.working_directory.display()
        );
        PackageOptions::default()
    };

    if arguments.force_publishing {
        debug!("Publishing forced by caller");
        options.publish.publish_on_build = true;
    }

    Ok(options)
}
