use super::config::RenderConfig;
use super::error::{load_input_safe, HandscriptError};
use crate::catalog::GlyphCatalog;
use crate::render::{write_document, DocumentAssembler, Fragment, GlyphResolver, VariantPicker};
use crate::script::{tokenize_document, Token};
use log::{debug, info};

/// Counts reported after a successful render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderSummary {
    pub lines: usize,
    pub glyphs: usize,
    pub blanks: usize,
    pub variants: usize,
}

/// Renders text into a complete page without touching the filesystem.
///
/// The catalog is queried exactly once. All validation happens before any
/// variant is drawn.
pub fn render_text(
    text: &str,
    catalog: &dyn GlyphCatalog,
    picker: &mut dyn VariantPicker,
    config: &RenderConfig,
) -> Result<(String, RenderSummary), HandscriptError> {
    let variants = catalog.discover()?;
    let lines = tokenize_document(text);
    debug!("Tokenized {} line(s)", lines.len());

    let resolver = GlyphResolver::new(variants, &config.paths);
    resolver.ensure_resolvable(&lines)?;

    let fragments: Vec<Vec<Fragment>> = lines
        .iter()
        .map(|tokens| resolver.resolve_line(tokens, picker))
        .collect();
    let page = DocumentAssembler::new(config).assemble(&fragments);

    let glyphs = lines.iter().flatten().filter(|t| t.is_glyph()).count();
    let blanks = lines
        .iter()
        .flatten()
        .filter(|t| matches!(t, Token::Blank))
        .count();

    Ok((
        page,
        RenderSummary {
            lines: lines.len(),
            glyphs,
            blanks,
            variants,
        },
    ))
}

/// Reads `config.paths.input`, renders it and writes `config.paths.output`.
///
/// The output file is only opened once the input has been read and the page
/// fully built, so a failed run never leaves an empty or partial page behind
/// (except when the write itself fails).
pub fn render_file(
    config: &RenderConfig,
    catalog: &dyn GlyphCatalog,
    picker: &mut dyn VariantPicker,
) -> Result<RenderSummary, HandscriptError> {
    let text = load_input_safe(&config.paths.input)?;
    debug!(
        "Read {} bytes from {}",
        text.len(),
        config.paths.input.display()
    );

    let (page, summary) = render_text(&text, catalog, picker, config)?;
    write_document(&config.paths.output, &page)?;

    info!(
        "Rendered {} line(s), {} glyph(s), {} blank(s) from {} variant set(s) into {}",
        summary.lines,
        summary.glyphs,
        summary.blanks,
        summary.variants,
        config.paths.output.display()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DirectoryCatalog, FixedCatalog};
    use crate::render::{RandomPicker, SequencePicker};
    use std::cell::Cell;
    use std::fs;
    use std::path::Path;

    struct CountingCatalog {
        calls: Cell<usize>,
        variants: usize,
    }

    impl GlyphCatalog for CountingCatalog {
        fn discover(&self) -> Result<usize, HandscriptError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.variants)
        }
    }

    fn config_in(dir: &Path) -> RenderConfig {
        let mut config = RenderConfig::default();
        config.paths.input = dir.join("input.txt");
        config.paths.output = dir.join("output.html");
        config.paths.glyph_dir = dir.join("letters");
        config
    }

    #[test]
    fn test_render_text_summary() {
        let mut picker = SequencePicker::new(vec![1]);
        let (_, summary) =
            render_text("A B\n#x$y\n", &FixedCatalog(2), &mut picker, &RenderConfig::default())
                .unwrap();
        assert_eq!(
            summary,
            RenderSummary {
                lines: 2,
                glyphs: 4,
                blanks: 2,
                variants: 2,
            }
        );
    }

    #[test]
    fn test_catalog_queried_once() {
        let catalog = CountingCatalog {
            calls: Cell::new(0),
            variants: 3,
        };
        let mut picker = RandomPicker::seeded(1);
        render_text("abc\ndef\nghi", &catalog, &mut picker, &RenderConfig::default()).unwrap();
        assert_eq!(catalog.calls.get(), 1);
    }

    #[test]
    fn test_fixed_picker_is_byte_identical() {
        let render = || {
            let mut picker = SequencePicker::new(vec![3, 1, 2]);
            render_text("Hello world\n##Dear $ diary", &FixedCatalog(3), &mut picker, &RenderConfig::default())
                .unwrap()
                .0
        };
        assert_eq!(render(), render());
    }

    #[test]
    fn test_secondary_color_reference() {
        let mut picker = SequencePicker::new(vec![2]);
        let (page, _) =
            render_text("##A", &FixedCatalog(2), &mut picker, &RenderConfig::default()).unwrap();
        assert!(page.contains("<img src='/images/letters/set2/black/65.png'/>"));
    }

    #[test]
    fn test_render_file_writes_page() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.paths.input, "Hi\n").unwrap();

        let mut picker = SequencePicker::new(vec![1]);
        let summary = render_file(&config, &FixedCatalog(1), &mut picker).unwrap();
        assert_eq!(summary.glyphs, 2);

        let page = fs::read_to_string(&config.paths.output).unwrap();
        assert!(page.contains("/images/letters/set1/blue/72.png"));
        assert!(page.contains("/images/letters/set1/blue/105.png"));
        assert!(page.ends_with("</div></body></html>\n"));
    }

    #[test]
    fn test_missing_input_leaves_output_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.paths.output, "previous page").unwrap();

        let mut picker = SequencePicker::new(vec![1]);
        let result = render_file(&config, &FixedCatalog(1), &mut picker);
        assert!(matches!(result, Err(HandscriptError::InputNotFound { .. })));
        assert_eq!(fs::read_to_string(&config.paths.output).unwrap(), "previous page");
    }

    #[test]
    fn test_missing_input_creates_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let mut picker = SequencePicker::new(vec![1]);
        assert!(render_file(&config, &FixedCatalog(1), &mut picker).is_err());
        assert!(!config.paths.output.exists());
    }

    #[test]
    fn test_empty_catalog_fails_before_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.paths.input, "  \nA\n").unwrap();
        fs::write(&config.paths.output, "previous page").unwrap();

        let mut picker = SequencePicker::new(vec![1]);
        let result = render_file(&config, &FixedCatalog(0), &mut picker);
        assert!(matches!(result, Err(HandscriptError::CatalogEmpty { glyphs: 1 })));
        assert_eq!(fs::read_to_string(&config.paths.output).unwrap(), "previous page");
    }

    #[test]
    fn test_unreadable_catalog_fails_before_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.paths.input, "A").unwrap();

        let catalog = DirectoryCatalog::new(&config.paths.glyph_dir);
        let mut picker = SequencePicker::new(vec![1]);
        let result = render_file(&config, &catalog, &mut picker);
        assert!(matches!(result, Err(HandscriptError::CatalogUnreadable { .. })));
        assert!(!config.paths.output.exists());
    }

    #[test]
    fn test_empty_catalog_with_blank_only_input_succeeds() {
        let mut picker = SequencePicker::new(Vec::new());
        let (page, summary) =
            render_text("# $\n", &FixedCatalog(0), &mut picker, &RenderConfig::default()).unwrap();
        assert_eq!(summary.glyphs, 0);
        assert_eq!(page.matches("<span></span>").count(), 2);
    }
}
