//! GlyphResolver - turns tokens into page fragments
//!
//! Every glyph gets its own random draw, so repeated letters on a page come
//! out looking different. Nothing is cached.

use super::picker::VariantPicker;
use crate::engine::config::PathConfig;
use crate::engine::error::HandscriptError;
use crate::script::{InkColor, Token};

/// Markup for one token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Image { src: String },
    Spacer,
}

impl Fragment {
    pub fn to_markup(&self) -> String {
        match self {
            Fragment::Image { src } => format!("<img src='{}'/>", src),
            Fragment::Spacer => "<span></span>".to_string(),
        }
    }
}

pub struct GlyphResolver {
    variants: usize,
    public_base: String,
    extension: String,
}

impl GlyphResolver {
    pub fn new(variants: usize, paths: &PathConfig) -> Self {
        Self {
            variants,
            public_base: paths.public_base.trim_end_matches('/').to_string(),
            extension: paths.image_extension.clone(),
        }
    }

    pub fn variants(&self) -> usize {
        self.variants
    }

    /// Checks the whole document up front so a missing catalog never fails mid-page.
    pub fn ensure_resolvable(&self, lines: &[Vec<Token>]) -> Result<(), HandscriptError> {
        if self.variants >= 1 {
            return Ok(());
        }
        let glyphs = lines.iter().flatten().filter(|t| t.is_glyph()).count();
        if glyphs > 0 {
            return Err(HandscriptError::CatalogEmpty { glyphs });
        }
        Ok(())
    }

    /// Public URL of one glyph image
    pub fn reference(&self, variant: usize, color: InkColor, char_code: u32) -> String {
        format!(
            "{}/set{}/{}/{}.{}",
            self.public_base, variant, color, char_code, self.extension
        )
    }

    /// Resolve a single token. Must only be called after `ensure_resolvable`.
    pub fn resolve(&self, token: &Token, picker: &mut dyn VariantPicker) -> Fragment {
        match *token {
            Token::Blank => Fragment::Spacer,
            Token::Glyph { char_code, color } => {
                let variant = picker.pick(self.variants);
                Fragment::Image {
                    src: self.reference(variant, color, char_code),
                }
            }
        }
    }

    pub fn resolve_line(&self, tokens: &[Token], picker: &mut dyn VariantPicker) -> Vec<Fragment> {
        tokens.iter().map(|t| self.resolve(t, picker)).collect()
    }
}
