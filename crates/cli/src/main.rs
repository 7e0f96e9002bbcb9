//! CLI tool for converting PowerPoint files to reveal.js Markdown.

mod output;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use output::OutputTarget;
use pptx2md_core::{
    normalize_slides, DocumentExtractor, Error, JsonFormatter, MalformedShapePolicy,
    RevealMarkdownFormatter, SlideExtractor, SlideFormatter, SlideModel,
};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Convert a PowerPoint presentation into reveal.js Markdown.
#[derive(Parser, Debug)]
#[command(name = "pptx2md")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input PowerPoint file (.pptx)
    input: PathBuf,

    /// Output path: a `.md` file for one document, any other path for a
    /// directory with one file per slide. Prints to stdout when omitted.
    output: Option<PathBuf>,

    /// Output markup
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Reveal)]
    format: OutputFormat,

    /// Skip text shapes without a text body instead of failing
    #[arg(long)]
    skip_malformed: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// reveal.js Markdown
    Reveal,
    /// One JSON object per slide
    Json,
}

impl OutputFormat {
    fn formatter(self) -> Box<dyn SlideFormatter> {
        match self {
            Self::Reveal => Box::new(RevealMarkdownFormatter::new()),
            Self::Json => Box::new(JsonFormatter::new()),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let policy = if args.skip_malformed {
        MalformedShapePolicy::Skip
    } else {
        MalformedShapePolicy::Abort
    };
    let extractor = DocumentExtractor::new()
        .with_slide_extractor(SlideExtractor::new().with_malformed_policy(policy));

    log::info!("Processing: {}", args.input.display());
    let mut slides = process_file(&args.input, &extractor)
        .with_context(|| format!("Error processing {}", args.input.display()))?;
    log::info!("Found {} slides", slides.len());

    normalize_slides(&mut slides);

    let target = OutputTarget::from_arg(args.output.as_deref());
    let formatter = args.format.formatter();
    target.write(&slides, formatter.as_ref())?;

    Ok(())
}

/// Extract all slides of one PowerPoint file.
fn process_file(input_path: &Path, extractor: &DocumentExtractor) -> Result<Vec<SlideModel>> {
    let is_pptx = input_path
        .extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e.eq_ignore_ascii_case("pptx"));
    if !is_pptx {
        return Err(Error::UnsupportedFormat(
            "Unrecognized file type, currently only supports \"*.pptx\"".to_string(),
        )
        .into());
    }

    let file = File::open(input_path)
        .with_context(|| format!("Failed to open {}", input_path.display()))?;
    let mut reader = BufReader::new(file);

    // Read magic bytes to detect format
    let mut magic = [0u8; 4];
    reader
        .read_exact(&mut magic)
        .with_context(|| "Failed to read file header")?;
    if !pptx2md_pptx::looks_like_package(&magic) {
        return Err(Error::UnsupportedFormat(
            "File is not a ZIP-based Office Open XML package".to_string(),
        )
        .into());
    }

    // Re-open so the archive reader starts at offset zero
    let file = File::open(input_path)?;
    let slides = pptx2md_pptx::extract_slides(BufReader::new(file), extractor)?;

    Ok(slides)
}
