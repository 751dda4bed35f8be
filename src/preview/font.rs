use crate::engine::error::HandscriptError;
use ab_glyph::{Font, FontVec};
use std::path::Path;

pub fn load_font_from_path<P: AsRef<Path>>(path: P) -> Result<FontVec, HandscriptError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| HandscriptError::FontUnavailable(format!("{}: {}", path.display(), e)))?;
    FontVec::try_from_vec(bytes)
        .map_err(|e| HandscriptError::FontUnavailable(format!("{}: {}", path.display(), e)))
}

/// Whether the font has an outline for `c` (glyph 0 is the notdef box)
pub fn has_glyph<F: Font>(font: &F, c: char) -> bool {
    font.glyph_id(c).0 != 0
}
