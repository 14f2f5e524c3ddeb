//! The whole conversion: read, split, export train and dev.

use ronec_core::{Result, SplitPlan, read_corpus};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::ConvertConfig;
use crate::export::{ExportReport, Exporter};

/// Summary of a conversion run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvertReport {
    pub plan: SplitPlan,
    /// Sentences actually found in the corpus file.
    pub sentences_read: usize,
    pub train: ExportReport,
    pub dev: ExportReport,
}

/// Converts the corpus described by `config` into spaCy train and dev files.
///
/// The dev ratio is validated before any file is touched.
///
/// # Errors
///
/// Any error of [`read_corpus`](ronec_core::read_corpus) or
/// [`Exporter::export`]; the run stops at the first one.
pub fn convert_corpus(config: &ConvertConfig) -> Result<ConvertReport> {
    let plan = SplitPlan::new(config.total_sentences, config.dev_ratio)?;
    let exporter = Exporter::new(config.converter.clone())?;

    let corpus = read_corpus(&config.corpus_path)?;
    let sentences_read = corpus.len();

    let shortfall = plan.shortfall(sentences_read);
    if shortfall > 0 {
        warn!(
            expected = plan.total,
            found = sentences_read,
            "corpus has fewer sentences than planned; splits will be short"
        );
    }
    let surplus = plan.surplus(sentences_read);
    if surplus > 0 {
        warn!(
            expected = plan.total,
            found = sentences_read,
            "corpus has more sentences than planned; {surplus} will be left out"
        );
    }

    info!(total = plan.total, "Total sentences");
    info!(
        dev_ratio = plan.dev_ratio,
        train = plan.train_count,
        dev = plan.dev_count,
        "Split planned"
    );

    let split = plan.apply(corpus.sentences());

    let train = exporter.export(split.train, &config.output_dir, &config.train_temp_path())?;
    let dev = exporter.export(split.dev, &config.output_dir, &config.dev_temp_path())?;

    Ok(ConvertReport {
        plan,
        sentences_read,
        train,
        dev,
    })
}
