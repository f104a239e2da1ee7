use std::time::Duration;

use serde::Deserialize;
use sparkboard::query::{DEFAULT_DEBOUNCE_MS, DEFAULT_PAGE_SIZE};

use crate::cli::CliArgs;

/// `[browse]` options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct BrowseSection {
    pub(super) page_size: Option<usize>,
    pub(super) debounce_ms: Option<u64>,
}

impl BrowseSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(value) = cli.page_size {
            self.page_size = Some(value);
        }
        if let Some(value) = cli.debounce_ms {
            self.debounce_ms = Some(value);
        }
    }

    pub(super) fn resolve(&self) -> (usize, Duration) {
        (
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            Duration::from_millis(self.debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS)),
        )
    }
}
