pub mod font;
pub mod raster;

pub use font::load_font_from_path;
pub use raster::{render_preview, to_data_uri};
