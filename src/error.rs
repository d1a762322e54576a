use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A single window-manager call failed. Reactivation treats this as non-fatal.
    #[error("window call `{op}` failed: {message}")]
    Window { op: &'static str, message: String },

    #[error("tauri error: {0}")]
    Tauri(#[from] tauri::Error),

    #[error("registry step `{step}` failed: {message}")]
    Registry { step: &'static str, message: String },

    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn window(op: &'static str, err: impl std::fmt::Display) -> Self {
        Error::Window {
            op,
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
