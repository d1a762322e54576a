use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Extensions offered by the open dialog.
pub const OPEN_FILTER: (&str, &[&str]) = ("Markdown Files", &["md", "markdown"]);
/// Extensions offered by the save dialog.
pub const SAVE_FILTER: (&str, &[&str]) = ("Markdown Files", &["md"]);
pub const DEFAULT_SAVE_NAME: &str = "Untitled.md";

pub fn read_document(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

pub fn write_document(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, content).map_err(|e| Error::io(path, e))?;
    log::info!("Saved document {:?} ({} bytes)", path, content.len());
    Ok(())
}
