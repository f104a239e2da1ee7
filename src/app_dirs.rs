//! Resolve configuration and data directories for `sparkboard`, and locate the
//! dataset files a user may drop into the data directory.
//!
//! Environment overrides win; otherwise the platform locations provided by the
//! `directories` crate are used.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "sparkboard";
const APPLICATION: &str = "sparkboard";

const CONFIG_DIR_ENV: &str = "SPARKBOARD_CONFIG_DIR";
const DATA_DIR_ENV: &str = "SPARKBOARD_DATA_DIR";

/// File name of the project list inside the data directory.
pub const PROJECTS_FILE: &str = "projects.json";
/// File name of the founder list inside the data directory.
pub const FOUNDERS_FILE: &str = "founders.json";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| anyhow!("unable to determine project directories for sparkboard"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value.
fn dir_from_env(name: &str) -> Option<PathBuf> {
    let value = env::var_os(name)?;
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

/// Return the directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
    if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
        return Ok(dir);
    }

    Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Return the data directory that may hold `projects.json` and `founders.json`.
pub fn get_data_dir() -> Result<PathBuf> {
    if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
        return Ok(dir);
    }

    Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Return `dir/file_name` when that file exists.
pub fn dataset_file_in(dir: &Path, file_name: &str) -> Option<PathBuf> {
    let path = dir.join(file_name);
    path.is_file().then_some(path)
}

/// Return the data directory copy of `file_name`, if the user installed one.
pub fn installed_dataset(file_name: &str) -> Option<PathBuf> {
    let dir = get_data_dir().ok()?;
    dataset_file_in(&dir, file_name)
}
