//! Location of the default settings file and locale directory.
//!
//! Resolution order:
//! 1. `PAGEKIT_DATA`, when set and non-empty
//! 2. `data/` in the current directory, for installs that ship it next to the app
//! 3. the `data/` directory bundled with this crate's sources

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::{debug, warn};

/// Environment variable naming the data directory explicitly.
pub const DATA_DIR_ENV: &str = "PAGEKIT_DATA";

/// `data/` shipped alongside the crate sources.
const BUNDLED_DATA: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(|| {
    let from_env = env::var_os(DATA_DIR_ENV).map(PathBuf::from);
    resolve_data_root(from_env, &[PathBuf::from("data"), PathBuf::from(BUNDLED_DATA)])
});

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Pick the data root: an explicit directory wins even if it does not exist yet,
/// otherwise the first existing candidate, otherwise the bundled directory.
pub fn resolve_data_root(explicit: Option<PathBuf>, candidates: &[PathBuf]) -> PathBuf {
    if let Some(dir) = explicit.filter(|dir| !dir.as_os_str().is_empty()) {
        if !dir.is_dir() {
            warn!("{DATA_DIR_ENV} points at '{}', which is not a directory", dir.display());
        }
        return dir;
    }

    let root = candidates
        .iter()
        .find(|candidate| candidate.is_dir())
        .cloned()
        .unwrap_or_else(|| PathBuf::from(BUNDLED_DATA));
    debug!("data root resolved to '{}'", root.display());
    root
}
