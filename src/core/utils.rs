use dirs::home_dir;
use std::{env, fs, io, path::Path, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".books_core";
const BOOKS_DIR: &str = "books";

/// Returns the application-specific data directory, defaulting to `~/.books_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("BOOKS_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Absolute path to the managed worksheet directory.
pub fn books_dir() -> PathBuf {
    app_data_dir().join(BOOKS_DIR)
}

/// Creates `path` and any missing parents.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}
