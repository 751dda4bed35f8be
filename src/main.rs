use clap::{Args, Parser, Subcommand};
use handscript::catalog::{DirectoryCatalog, FixedCatalog, GlyphCatalog};
use handscript::engine::{render_file, HandscriptError, PreviewConfig, RenderConfig};
use handscript::preview::render_preview;
use handscript::render::RandomPicker;
use log::{error, info};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

/// Render plain text as a handwritten-looking HTML page.
#[derive(Parser)]
#[clap(version, name = "handscript")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a text file into an HTML page of glyph images.
    Render(RenderArgs),

    /// Draw a single character and print it as a PNG data URI.
    Preview(PreviewArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// Text file to render. Default: input.txt
    #[clap(short, long)]
    input: Option<PathBuf>,

    /// HTML file to write. Default: output.html
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Directory holding one sub-directory per glyph variant set.
    #[clap(long)]
    glyph_dir: Option<PathBuf>,

    /// URL prefix of the glyph sets as seen from the page. Default: /images/letters
    #[clap(long)]
    public_base: Option<String>,

    /// Number of variant sets. Skips scanning the glyph directory.
    #[clap(long)]
    variants: Option<usize>,

    /// Seed to initialize the random number generator.
    ///
    /// Use this to generate output that is deterministic across runs.
    /// If not specified the random number generator is seeded from the operating system's
    /// random number generator.
    #[clap(short, long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct PreviewArgs {
    /// Text to preview; only the first character is drawn. Default: A
    text: Option<String>,

    /// TrueType or OpenType font to draw with.
    #[clap(short, long)]
    font: PathBuf,

    /// Font size in pixels. Default: 24
    #[clap(long)]
    font_size: Option<f32>,
}

fn render(args: RenderArgs) -> Result<(), HandscriptError> {
    let mut config = RenderConfig::default();
    if let Some(input) = args.input {
        config.paths.input = input;
    }
    if let Some(output) = args.output {
        config.paths.output = output;
    }
    if let Some(glyph_dir) = args.glyph_dir {
        config.paths.glyph_dir = glyph_dir;
    }
    if let Some(public_base) = args.public_base {
        config.paths.public_base = public_base;
    }

    let catalog: Box<dyn GlyphCatalog> = match args.variants {
        Some(count) => Box::new(FixedCatalog(count)),
        None => Box::new(DirectoryCatalog::new(&config.paths.glyph_dir)),
    };
    let mut picker = RandomPicker::new(args.seed);

    render_file(&config, catalog.as_ref(), &mut picker)?;
    Ok(())
}

fn preview(args: PreviewArgs) -> Result<(), HandscriptError> {
    let mut config = PreviewConfig {
        font_path: Some(args.font),
        ..PreviewConfig::default()
    };
    if let Some(font_size) = args.font_size {
        config.font_size = font_size;
    }

    let text = args.text.unwrap_or_default();
    let uri = render_preview(&text, &config)?;
    info!("Rendered preview for {:?}", text);
    println!("{}", uri);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Render(args) => render(args),
        Command::Preview(args) => preview(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            if let Some(source) = err.source() {
                error!("Caused by: {}", source);
            }
            ExitCode::FAILURE
        }
    }
}
