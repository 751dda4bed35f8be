//! Single character preview
//!
//! Draws one character onto a plain canvas and hands it back as a PNG data
//! URI, ready to drop into an `<img src=...>`. This is unrelated to the page
//! pipeline: it never touches the glyph sets.

use super::font::{has_glyph, load_font_from_path};
use crate::engine::config::PreviewConfig;
use crate::engine::error::HandscriptError;
use ab_glyph::{FontVec, PxScale};
use base64::Engine as _;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;
use log::{debug, warn};
use std::io::Cursor;

/// Drawn when the request is empty.
pub const FALLBACK_CHAR: char = 'A';

/// Only the first character of a request is previewed.
pub fn preview_char(text: &str) -> char {
    text.chars().next().unwrap_or(FALLBACK_CHAR)
}

pub fn rasterize_char(font: &FontVec, c: char, config: &PreviewConfig) -> RgbImage {
    let (width, height) = config.size;
    let mut canvas = RgbImage::from_pixel(width, height, Rgb(config.background));

    if !has_glyph(font, c) {
        warn!("Font has no glyph for {:?}; preview will show a placeholder", c);
    }

    let x = (width / 3) as i32;
    let y = (height / 3) as i32;
    draw_text_mut(
        &mut canvas,
        Rgb(config.ink),
        x,
        y,
        PxScale::from(config.font_size),
        font,
        &c.to_string(),
    );
    canvas
}

pub fn encode_png(canvas: RgbImage) -> Result<Vec<u8>, HandscriptError> {
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(canvas)
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| HandscriptError::Encode(format!("PNG encode failed: {e}")))?;
    Ok(buf.into_inner())
}

pub fn to_data_uri(png_bytes: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png_bytes)
    )
}

/// Loads the configured font, draws the first character of `text` and
/// returns it as a `data:image/png;base64,...` URI.
pub fn render_preview(text: &str, config: &PreviewConfig) -> Result<String, HandscriptError> {
    let font_path = config
        .font_path
        .as_ref()
        .ok_or_else(|| HandscriptError::FontUnavailable("no font path configured".to_string()))?;
    let font = load_font_from_path(font_path)?;

    let c = preview_char(text);
    let png_bytes = encode_png(rasterize_char(&font, c, config))?;
    debug!("Encoded preview of {:?} as {} PNG bytes", c, png_bytes.len());
    Ok(to_data_uri(&png_bytes))
}
