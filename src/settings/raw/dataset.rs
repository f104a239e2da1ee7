use std::path::PathBuf;

use serde::Deserialize;
use sparkboard::app_dirs;
use sparkboard::catalog::DatasetSource;

use crate::cli::{CliArgs, EntityArg};

/// `[dataset]` paths as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DatasetSection {
    pub(super) projects: Option<PathBuf>,
    pub(super) founders: Option<PathBuf>,
}

impl DatasetSection {
    /// `--dataset` replaces the path of the entity being browsed.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(path) = cli.dataset.clone() {
            match cli.entity {
                EntityArg::Projects => self.projects = Some(path),
                EntityArg::Founders => self.founders = Some(path),
            }
        }
    }

    pub(super) fn resolve(self) -> (DatasetSource, DatasetSource) {
        (
            source_for(self.projects, || {
                app_dirs::installed_dataset(app_dirs::PROJECTS_FILE)
            }),
            source_for(self.founders, || {
                app_dirs::installed_dataset(app_dirs::FOUNDERS_FILE)
            }),
        )
    }
}

/// Pick the explicit path, then a file in the data directory, then the
/// bundled sample data.
pub(super) fn source_for(
    explicit: Option<PathBuf>,
    installed: impl FnOnce() -> Option<PathBuf>,
) -> DatasetSource {
    match explicit.or_else(installed) {
        Some(path) => DatasetSource::File(path),
        None => DatasetSource::Bundled,
    }
}
