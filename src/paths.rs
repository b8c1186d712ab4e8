//! Centralized path helpers for config, cache, and artifact data directories.

use std::path::PathBuf;

use crate::app;

/// Project directories (config, cache, data) from the standard platform locations.
pub fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("io", app::VENDOR, app::NAME)
}

/// Config directory (~/.config/documind/).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Cache directory (~/.cache/documind/).
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.cache_dir().to_path_buf())
}

/// Default root for cached artifacts (~/.local/share/documind/artifacts/).
pub fn artifacts_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.data_dir().join("artifacts"))
}
