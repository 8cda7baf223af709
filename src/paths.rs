//! Where coach keeps its files

use std::ffi::OsString;
use std::path::PathBuf;

/// Debug log location, in the OS temp directory
#[must_use]
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("coach.log")
}

/// Per-user configuration directory for the current platform
///
/// `XDG_CONFIG_HOME` wins everywhere except Windows, where `APPDATA` is
/// used.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with(|key| std::env::var_os(key))
}

fn config_dir_with(env: impl Fn(&str) -> Option<OsString>) -> Option<PathBuf> {
    if cfg!(windows) {
        return env("APPDATA").map(PathBuf::from);
    }
    if let Some(xdg) = env("XDG_CONFIG_HOME").filter(|dir| !dir.is_empty()) {
        return Some(PathBuf::from(xdg));
    }

    let home = PathBuf::from(env("HOME")?);
    if cfg!(target_os = "macos") {
        Some(home.join("Library").join("Application Support"))
    } else {
        Some(home.join(".config"))
    }
}
