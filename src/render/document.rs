//! DocumentAssembler - wraps resolved lines into the final HTML page.

use super::resolver::Fragment;
use crate::engine::config::RenderConfig;
use crate::engine::error::HandscriptError;
use crate::script::InkColor;
use lazy_static::lazy_static;
use log::debug;
use std::path::Path;

pub const FOOTER: &str = "</div></body></html>";
const LINE_OPEN: &str = "<div class=\"lines\">";
const LINE_CLOSE: &str = "</div>";

lazy_static! {
    static ref DEFAULT_HEADER: String = build_header(&RenderConfig::default());
}

/// Stylesheet and document preamble, up to and including the paper container.
pub fn build_header(config: &RenderConfig) -> String {
    let cells = &config.cells;
    let palette = &config.palette;
    [
        "<html>".to_string(),
        "<head>".to_string(),
        "<style>".to_string(),
        ".lines { width: 100%; height: auto; float: left; }".to_string(),
        format!(
            "#paper {{ background: white; background-image: url('{}'); height: auto; float: left; padding: 50px 50px; width: 90%; }}",
            config.paths.background_image
        ),
        format!(
            "img, span {{ height: {}px; width: {}px; float: left; margin-top: {}px; margin-bottom: {}px; }}",
            cells.height, cells.width, cells.margin_top, cells.margin_bottom
        ),
        format!(
            ".{} {{ filter: brightness({}%); }}",
            InkColor::Secondary.css_class(),
            palette.secondary_brightness_percent
        ),
        format!(
            ".{} {{ filter: brightness({}%); }}",
            InkColor::Primary.css_class(),
            palette.primary_brightness_percent
        ),
        "</style>".to_string(),
        "</head>".to_string(),
        "<body>".to_string(),
        "<div id='paper'>".to_string(),
    ]
    .join("\n")
}

pub struct DocumentAssembler {
    header: String,
}

impl DocumentAssembler {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            header: build_header(config),
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// Builds the complete page in memory, one line container per input line.
    pub fn assemble(&self, lines: &[Vec<Fragment>]) -> String {
        let mut page = String::with_capacity(self.header.len() + FOOTER.len() + lines.len() * 64);
        page.push_str(&self.header);

        for fragments in lines {
            page.push('\n');
            page.push_str(LINE_OPEN);
            for fragment in fragments {
                page.push('\n');
                page.push_str(&fragment.to_markup());
            }
            page.push('\n');
            page.push_str(LINE_CLOSE);
        }

        page.push('\n');
        page.push_str(FOOTER);
        page.push('\n');
        page
    }
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.clone(),
        }
    }
}

/// Writes the finished page. No rollback if the write fails partway.
pub fn write_document(path: &Path, page: &str) -> Result<(), HandscriptError> {
    std::fs::write(path, page).map_err(|source| HandscriptError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {} bytes to {}", page.len(), path.display());
    Ok(())
}
