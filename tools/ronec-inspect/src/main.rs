use anyhow::{Context, Result};
use clap::Parser;
use ronec_core::{Sentence, read_corpus};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Print the normalized RONEC sentences as JSON Lines
#[derive(Parser, Debug)]
#[command(name = "ronec-inspect")]
#[command(version)]
struct Cli {
    /// Path to the RONEC CoNLL-U Plus file
    ronec_path: PathBuf,

    /// Stop after this many sentences
    #[arg(short, long)]
    limit: Option<usize>,

    /// Print tag counts instead of sentences
    #[arg(long)]
    tags: bool,
}

#[derive(Debug, Serialize)]
pub struct SentenceOutput<'a> {
    pub header: &'a [String],
    pub tokens: Vec<&'a str>,
    pub ner_tags: Vec<&'a str>,
}

impl<'a> From<&'a Sentence> for SentenceOutput<'a> {
    fn from(sentence: &'a Sentence) -> Self {
        Self {
            header: &sentence.header,
            tokens: sentence.forms(),
            ner_tags: sentence.tags(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let corpus = read_corpus(&cli.ronec_path)
        .with_context(|| format!("Failed to read {}", cli.ronec_path.display()))?;
    info!(sentences = corpus.len(), tokens = corpus.stats.tokens, "corpus loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.tags {
        writeln!(out, "{}", serde_json::to_string(&corpus.tag_counts())?)?;
        return Ok(());
    }

    let limit = cli.limit.unwrap_or(usize::MAX);
    for sentence in corpus.sentences().iter().take(limit) {
        let output = SentenceOutput::from(sentence);
        writeln!(out, "{}", serde_json::to_string(&output)?)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ronec_core::parse_corpus;

    #[test]
    fn sentence_output_json() {
        let text = "# id = 1\n1 Ion _ 1:B-PERSON\n2 doarme _ *\n\n";
        let corpus = parse_corpus(text.as_bytes()).unwrap();
        let json = serde_json::to_string(&SentenceOutput::from(&corpus.sentences[0])).unwrap();
        assert_eq!(
            json,
            r##"{"header":["# id = 1"],"tokens":["Ion","doarme"],"ner_tags":["I-PERSON","O"]}"##
        );
    }

    #[test]
    fn limit_flag() {
        let cli = Cli::try_parse_from(["ronec-inspect", "ronec.conllup", "-l", "3"]).unwrap();
        assert_eq!(cli.limit, Some(3));
        assert!(!cli.tags);
    }
}
