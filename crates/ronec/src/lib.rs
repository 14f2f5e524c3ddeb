//! # RONEC
//!
//! Converts the Romanian Named Entity Corpus into spaCy training data.
//!
//! - [`corpus`]: reading, tag normalization, train/dev split, label repair.
//! - [`export`]: the export through `spacy convert` and the full pipeline.
//!
//! ```no_run
//! use ronec::export::{ConvertConfig, convert_corpus};
//!
//! let config = ConvertConfig::new("ronec.conllup", "spacy-data");
//! let report = convert_corpus(&config)?;
//! println!("{} train / {} dev", report.train.sentences, report.dev.sentences);
//! # Ok::<(), ronec::RonecError>(())
//! ```

pub use ronec_core as corpus;
pub use ronec_spacy as export;

pub use ronec_core::{Corpus, Result, RonecError, Sentence, SplitPlan, Token, read_corpus};
pub use ronec_spacy::{ConvertConfig, ConvertReport, convert_corpus};
