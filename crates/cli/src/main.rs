//! Qalam - Urdu text export tool
//!
//! Command-line shell over the export engine: reads a document through the
//! import boundary, applies the configured style, and writes it out in the
//! requested format.

use anyhow::{bail, Context};
use clap::Parser;
use doc_model::LyricsMetadata;
use std::path::{Path, PathBuf};
use store::{EditorSettings, ExportFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "qalam", version, about = "Export Urdu text to TXT, PDF, or DOCX")]
struct CliArguments {
    /// Input document (.txt, .rtf, .doc, or .docx)
    input: PathBuf,

    /// Output format: txt, pdf, docx, or lyrics
    #[arg(short, long)]
    format: String,

    /// Output file name without extension (defaults to the input's stem)
    #[arg(short, long)]
    output: Option<String>,

    /// Directory to write into (defaults to the input's directory)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Editor settings file holding the style configuration
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Lyrics title
    #[arg(long)]
    title: Option<String>,

    /// Lyrics singer
    #[arg(long)]
    singer: Option<String>,

    /// Lyrics raag
    #[arg(long)]
    raag: Option<String>,

    /// Lyrics taal
    #[arg(long)]
    taal: Option<String>,

    /// Lyrics beat
    #[arg(long)]
    beat: Option<String>,
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(error) = run() {
        tracing::error!("{:#}", error);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = CliArguments::parse();

    // Reject unknown formats before touching any file
    let format: ExportFormat = args.format.parse()?;

    let settings = match &args.settings {
        Some(path) => store::load_settings(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => EditorSettings::default(),
    };
    settings.style.validate()?;

    if !doc_model::fonts::is_known_family(&settings.style.font_family) {
        tracing::warn!(
            family = %settings.style.font_family,
            "font family is not one of the bundled typefaces"
        );
    }

    let metadata = build_metadata(&args, format)?;

    let text = store::open_text_document_sync(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?;

    let file_name = args
        .output
        .clone()
        .or_else(|| {
            args.input
                .file_stem()
                .and_then(|s| s.to_str())
                .map(String::from)
        })
        .unwrap_or_else(|| settings.default_file_name.clone());

    let out_dir = args
        .out_dir
        .clone()
        .or_else(|| args.input.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    let path = store::export_to_path_sync(
        &text,
        format,
        &settings.style,
        &file_name,
        metadata.as_ref(),
        &out_dir,
    )?;

    tracing::info!(path = %path.display(), "export complete");
    println!("{}", path.display());
    Ok(())
}

fn build_metadata(
    args: &CliArguments,
    format: ExportFormat,
) -> anyhow::Result<Option<LyricsMetadata>> {
    let any_field = args.title.is_some()
        || args.singer.is_some()
        || args.raag.is_some()
        || args.taal.is_some()
        || args.beat.is_some();

    if !any_field {
        if format == ExportFormat::Lyrics {
            bail!("lyrics export requires --title and --singer");
        }
        return Ok(None);
    }

    if format == ExportFormat::Lyrics && (args.title.is_none() || args.singer.is_none()) {
        bail!("lyrics export requires --title and --singer");
    }

    let mut metadata = LyricsMetadata::new(
        args.title.clone().unwrap_or_default(),
        args.singer.clone().unwrap_or_default(),
    );
    metadata.raag = args.raag.clone();
    metadata.taal = args.taal.clone();
    metadata.beat = args.beat.clone();
    Ok(Some(metadata))
}
