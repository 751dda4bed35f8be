use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandscriptError {
    #[error("Input not found or unreadable: {}", .path.display())]
    InputNotFound { path: PathBuf, source: io::Error },

    #[error("Glyph catalog unreadable: {}", .path.display())]
    CatalogUnreadable { path: PathBuf, source: io::Error },

    #[error("Glyph catalog has no variant sets but the document contains {glyphs} glyph(s)")]
    CatalogEmpty { glyphs: usize },

    #[error("Failed to write output: {}", .path.display())]
    OutputWrite { path: PathBuf, source: io::Error },

    #[error("Font unavailable: {0}")]
    FontUnavailable(String),

    #[error("Image encoding failed: {0}")]
    Encode(String),
}

/// Reads the whole input document before anything else happens.
///
/// Empty files are valid input and render as a page with no lines.
pub fn load_input_safe(path: &Path) -> Result<String, HandscriptError> {
    std::fs::read_to_string(path).map_err(|source| HandscriptError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })
}
