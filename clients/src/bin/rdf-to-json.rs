//! `rdf-to-json` — Converts the RDF description of one resource into a lobid
//! JSON-LD document.
//!
//! **Usage:**
//! ```text
//! rdf-to-json --labels labels.json --root <uri> [--input <file>|-] [--format turtle|ntriples]
//!             [--max-depth <n>] [--inline-context] [--compact] [--config <file.toml>]
//! ```
//!
//! The document is written to stdout. Logging goes to stderr and is
//! controlled with `RUST_LOG` (default `info`).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lobid_rdf_to_json::{convert, LabelDictionary, RdfFormat};
use lobid_rdf_to_json_clients::{FileConfig, Overrides, Settings};

/// Convert RDF into lobid JSON-LD.
#[derive(Parser)]
#[command(name = "rdf-to-json", about = "Convert RDF into lobid JSON-LD")]
struct Args {
    /// URI of the resource the document describes.
    #[arg(long)]
    root: String,

    /// RDF input file; `-` or absent reads stdin.
    #[arg(long)]
    input: Option<PathBuf>,

    /// JSON label file.
    #[arg(long)]
    labels: Option<PathBuf>,

    /// Input syntax (turtle, ntriples). Defaults to the input extension, then turtle.
    #[arg(long)]
    format: Option<RdfFormat>,

    /// Emit nodes deeper than this as `@id` references.
    #[arg(long)]
    max_depth: Option<usize>,

    /// Put only the term definitions under `@context`.
    #[arg(long)]
    inline_context: bool,

    /// Write single-line JSON.
    #[arg(long)]
    compact: bool,

    /// TOML file with defaults for the options above.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let file_config = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let input = args.input.filter(|p| p.as_os_str() != "-");
    let settings = Settings::resolve(
        Overrides {
            labels: args.labels,
            format: args.format,
            input: input.clone(),
            max_depth: args.max_depth,
            inline_context: args.inline_context,
            compact: args.compact,
        },
        file_config,
    )?;

    tracing::debug!(
        labels = %settings.labels.display(),
        format = %settings.format,
        "settings resolved"
    );
    let labels = File::open(&settings.labels)
        .with_context(|| format!("Failed to open {}", settings.labels.display()))?;
    let dictionary = LabelDictionary::from_reader(BufReader::new(labels))
        .with_context(|| format!("Failed to load labels from {}", settings.labels.display()))?;

    let mut text = String::new();
    match &input {
        Some(path) => {
            File::open(path)
                .and_then(|mut f| f.read_to_string(&mut text))
                .with_context(|| format!("Failed to read {}", path.display()))?;
        }
        None => {
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read RDF from stdin")?;
        }
    }

    let document = convert(
        &text,
        settings.format,
        &args.root,
        &dictionary,
        &settings.options,
    )
    .with_context(|| format!("Failed to convert {}", args.root))?;
    tracing::info!(root = %args.root, format = %settings.format, "document converted");

    let rendered = if settings.pretty {
        serde_json::to_string_pretty(&document)
    } else {
        serde_json::to_string(&document)
    }
    .context("Failed to serialize JSON")?;
    println!("{rendered}");
    Ok(())
}
