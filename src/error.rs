use std::path::PathBuf;

/// Errors raised while loading settings or touching the filesystem.
///
/// Failures of the orchestrated external commands are deliberately not
/// represented here: their exit codes are logged and otherwise ignored.
#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    /// Filesystem operation failed
    #[error("filesystem operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file existed but did not parse as JSON
    #[error("could not parse settings file {}: {source}", path.display())]
    Settings {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Result type for ramdisk control operations
pub type Result<T> = std::result::Result<T, ControlError>;
