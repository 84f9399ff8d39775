use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::options::{OptionsError, PackageOptions, config_path};

#[derive(Error, Debug)]
pub enum InitError {
    #[error("config file already exists at {0} (use --force to overwrite)")]
    ConfigExists(PathBuf),

    #[error(transparent)]
    Options(#[from] OptionsError),
}

/// Write a `package.builder.json` holding the default options.
///
/// # Errors
///
/// Returns `InitError::ConfigExists` if the file exists (unless `force` is set),
/// or `InitError::Options` on write failure.
pub fn run(working_directory: &Path, force: bool) -> Result<PathBuf, InitError> {
    let path = config_path(working_directory);
    if path.exists() && !force {
        return Err(InitError::ConfigExists(path));
    }

    PackageOptions::default().save(&path)?;
    println!("Wrote default package options to {}", path.display());
    Ok(path)
}
