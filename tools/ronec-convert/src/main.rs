//! RONEC to spaCy conversion tool
//!
//! Splits the Romanian Named Entity Corpus into train and dev sets and turns
//! both into spaCy training files with `spacy convert`.
//!
//! More on the converter: <https://spacy.io/api/cli#convert>

use anyhow::{Context, Result};
use clap::Parser;
use ronec_core::{DEFAULT_DEV_RATIO, RONEC_TOTAL_SENTENCES, validate_dev_ratio};
use ronec_spacy::config::{DEFAULT_CONVERTER, DEFAULT_CONVERTER_PROGRAM, default_work_dir};
use ronec_spacy::{ConvertConfig, ConverterConfig, convert_corpus};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "ronec-convert")]
#[command(about = "Convert RONEC into spaCy train/dev files")]
#[command(version)]
struct Cli {
    /// Path to the RONEC CoNLL-U Plus file
    ronec_path: PathBuf,

    /// Directory receiving the spaCy files
    output_path: PathBuf,

    /// Fraction of sentences used for the dev set, between 0 and 1
    #[arg(
        long = "dev_ratio",
        visible_alias = "dev-ratio",
        default_value_t = DEFAULT_DEV_RATIO,
        value_parser = parse_dev_ratio
    )]
    dev_ratio: f64,

    /// Sentence count the split is computed from
    #[arg(long, env = "RONEC_TOTAL_SENTENCES", default_value_t = RONEC_TOTAL_SENTENCES)]
    total_sentences: usize,

    /// Directory for temporary files (default: next to this executable)
    #[arg(long, env = "RONEC_WORK_DIR")]
    work_dir: Option<PathBuf>,

    /// Program hosting the converter
    #[arg(long, env = "RONEC_CONVERTER_PROGRAM", default_value = DEFAULT_CONVERTER_PROGRAM)]
    converter_program: String,

    /// Argument placed before `convert`; repeat for several (default: -m spacy)
    #[arg(long = "converter-arg", value_name = "ARG", allow_hyphen_values = true)]
    converter_args: Vec<String>,

    /// spaCy converter name
    #[arg(long, env = "RONEC_CONVERTER", default_value = DEFAULT_CONVERTER)]
    converter: String,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn parse_dev_ratio(value: &str) -> std::result::Result<f64, String> {
    let ratio: f64 = value
        .parse()
        .map_err(|e| format!("invalid float {value:?}: {e}"))?;
    validate_dev_ratio(ratio).map_err(|e| e.to_string())
}

impl Cli {
    fn to_config(&self) -> ConvertConfig {
        let mut converter = ConverterConfig {
            program: self.converter_program.clone(),
            converter: self.converter.clone(),
            ..ConverterConfig::default()
        };
        if !self.converter_args.is_empty() {
            converter.program_args = self.converter_args.clone();
        }

        ConvertConfig {
            corpus_path: self.ronec_path.clone(),
            output_dir: self.output_path.clone(),
            work_dir: self.work_dir.clone().unwrap_or_else(default_work_dir),
            dev_ratio: self.dev_ratio,
            total_sentences: self.total_sentences,
            converter,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.to_config();

    info!("Running convert conllup to spacy json...");
    let report = convert_corpus(&config)
        .with_context(|| format!("Failed to convert {}", config.corpus_path.display()))?;

    info!(
        train = report.train.sentences,
        dev = report.dev.sentences,
        output = %config.output_dir.display(),
        "Conversion finished"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
