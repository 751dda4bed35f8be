//! GlyphCatalog - source of the number of interchangeable glyph variant sets
//!
//! Each variant set is a complete alphabet drawn by hand, laid out as
//! `set{n}/{color}/{char_code}.png`. The renderer only needs to know how many
//! sets exist; it picks one at random per glyph.

use crate::engine::error::HandscriptError;
use log::{debug, warn};
use std::io;
use std::path::{Path, PathBuf};

/// Reports how many variant sets are available.
///
/// Queried once per run; the count is treated as fixed afterwards.
pub trait GlyphCatalog {
    /// Count the available variant sets (indexed `1..=count`)
    ///
    /// # Errors
    /// Returns `HandscriptError::CatalogUnreadable` if the backing location
    /// cannot be inspected. An empty location is `Ok(0)`.
    fn discover(&self) -> Result<usize, HandscriptError>;
}

/// Catalog backed by a directory with one sub-directory per variant set
#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    root: PathBuf,
}

impl DirectoryCatalog {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl GlyphCatalog for DirectoryCatalog {
    fn discover(&self) -> Result<usize, HandscriptError> {
        let unreadable = |source: io::Error| HandscriptError::CatalogUnreadable {
            path: self.root.clone(),
            source,
        };

        let mut count = 0;
        for entry in std::fs::read_dir(&self.root).map_err(unreadable)? {
            let path = entry.map_err(unreadable)?.path();
            if path.is_dir() {
                count += 1;
            } else {
                warn!("Ignoring non-directory catalog entry: {}", path.display());
            }
        }

        debug!(
            "Discovered {} variant set(s) in {}",
            count,
            self.root.display()
        );
        Ok(count)
    }
}

/// Catalog with a known count, used when the sets are not on local disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCatalog(pub usize);

impl GlyphCatalog for FixedCatalog {
    fn discover(&self) -> Result<usize, HandscriptError> {
        Ok(self.0)
    }
}
