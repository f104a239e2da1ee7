use std::env;
use std::path::{Path, PathBuf};

/// Render a path for display, abbreviating the home directory to `~`.
pub(super) fn display_path(path: &Path) -> String {
    if let Some(home_os) = env::var_os("HOME") {
        let home = PathBuf::from(home_os);
        if let Ok(rel) = path.strip_prefix(&home) {
            if rel.components().next().is_none() {
                return "~".to_string();
            }
            let sep = std::path::MAIN_SEPARATOR;
            return format!("~{}{}", sep, rel.display());
        }
    }
    path.display().to_string()
}
