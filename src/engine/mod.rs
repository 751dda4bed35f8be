pub mod config;
pub mod error;
pub mod pipeline;

pub use config::{PreviewConfig, RenderConfig};
pub use error::{load_input_safe, HandscriptError};
pub use pipeline::{render_file, render_text, RenderSummary};
