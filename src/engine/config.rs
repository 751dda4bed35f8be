// Configuration for the handwriting page renderer and the glyph preview.
// All defaults match the layout the glyph sets were drawn for.

use std::path::PathBuf;

/// Size of one character cell on the page, in pixels
#[derive(Debug, Clone, PartialEq)]
pub struct CellConfig {
    pub height: u32,
    pub width: u32,
    pub margin_top: u32,
    pub margin_bottom: u32,
}

impl Default for CellConfig {
    fn default() -> Self {
        Self {
            height: 25,
            width: 15,
            margin_top: 5,
            margin_bottom: 10,
        }
    }
}

/// Brightness filters applied to the two ink colors
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteConfig {
    /// Primary ink ("blue"), default 100%
    pub primary_brightness_percent: u8,

    /// Secondary ink ("black"), default 30%
    pub secondary_brightness_percent: u8,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            primary_brightness_percent: 100,
            secondary_brightness_percent: 30,
        }
    }
}

/// Where things are read from and written to
#[derive(Debug, Clone, PartialEq)]
pub struct PathConfig {
    /// Public URL prefix of the glyph sets, as referenced from the page
    pub public_base: String,

    /// Public URL of the paper background image
    pub background_image: String,

    /// Filesystem directory holding one sub-directory per variant set
    pub glyph_dir: PathBuf,

    pub image_extension: String,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            public_base: "/images/letters".to_string(),
            background_image: "/images/background.png".to_string(),
            glyph_dir: PathBuf::from("../client/public/images/letters"),
            image_extension: "png".to_string(),
            input: PathBuf::from("input.txt"),
            output: PathBuf::from("output.html"),
        }
    }
}

/// Master configuration for the text to page pipeline
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderConfig {
    pub cells: CellConfig,
    pub palette: PaletteConfig,
    pub paths: PathConfig,
}

/// Single character preview settings
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewConfig {
    /// Canvas size in pixels (width, height)
    pub size: (u32, u32),

    pub background: [u8; 3],
    pub ink: [u8; 3],
    pub font_size: f32,

    /// TrueType/OpenType font used to draw the character
    pub font_path: Option<PathBuf>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            size: (200, 200),
            background: [255, 255, 255],
            ink: [0, 0, 0],
            font_size: 24.0,
            font_path: None,
        }
    }
}
