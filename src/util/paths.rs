//! Path utilities for bubblestep data directories

use std::path::PathBuf;
use std::sync::OnceLock;

/// Global storage for custom data directory path
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Initialize the data directory with an optional custom path.
/// Must be called early in main() before any other path functions are used.
/// If custom_path is None, uses the default ~/.bubblestep location.
pub fn init_data_dir(custom_path: Option<PathBuf>) {
    let path = custom_path.unwrap_or_else(default_data_dir);
    if DATA_DIR.set(path.clone()).is_err() {
        tracing::debug!(path = %path.display(), "Data directory already initialized");
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".bubblestep"))
        .unwrap_or_else(|| PathBuf::from(".bubblestep"))
}

/// Base data directory: the custom path if set via init_data_dir(), otherwise ~/.bubblestep
pub fn data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the logs directory (~/.bubblestep/logs)
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// Get the log file path (~/.bubblestep/logs/bubblestep.log)
pub fn log_file_path() -> PathBuf {
    logs_dir().join("bubblestep.log")
}

/// Get the config file path (~/.bubblestep/config.toml)
pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_live_under_data_dir() {
        let base = data_dir();
        assert!(config_path().starts_with(&base));
        assert_eq!(log_file_path().parent(), Some(logs_dir().as_path()));
        assert!(log_file_path().ends_with("logs/bubblestep.log"));
    }
}
