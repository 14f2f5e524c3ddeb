//! # RONEC Core
//!
//! Reads the Romanian Named Entity Corpus (CoNLL-U Plus with span markers),
//! normalizes its entity column to BIO tags, splits it into train/dev parts
//! and repairs the labels that spaCy's converter truncates.
//!
//! ## Quick Start
//!
//! ```rust
//! use ronec_core::{parse_corpus, SplitPlan};
//!
//! let text = "# sent_id = 1\n# text = Ion doarme\n1 Ion _ 1:B-PERSON\n2 doarme _ *\n\n";
//! let corpus = parse_corpus(text.as_bytes()).unwrap();
//! assert_eq!(corpus.sentences[0].tags(), vec!["I-PERSON", "O"]);
//!
//! let split = SplitPlan::new(1, 0.0).unwrap().apply(corpus.sentences());
//! assert_eq!(split.train.len(), 1);
//! ```
pub mod error;
pub mod flat;
pub mod reader;
pub mod repair;
pub mod split;
pub mod tags;
pub mod types;

// Re-export primary API
pub use error::{Result, RonecError};
pub use reader::{parse_corpus, read_corpus};
pub use repair::{LABEL_FIXES, LabelRepairer};
pub use split::{DEFAULT_DEV_RATIO, RONEC_TOTAL_SENTENCES, Split, SplitPlan, validate_dev_ratio};
pub use tags::{OUTSIDE_TAG, SpanTracker};
pub use types::{Corpus, ReadStats, Sentence, Token};
