//! # RONEC spaCy export
//!
//! Turns RONEC train/dev splits into spaCy training files by running
//! `spacy convert --converter conllubio` and repairing the entity labels it
//! truncates.

pub mod config;
pub mod export;
pub mod pipeline;

pub use config::{ConvertConfig, ConverterConfig, DEV_FILE_NAME, TRAIN_FILE_NAME};
pub use export::{ExportReport, Exporter, artifact_path};
pub use pipeline::{ConvertReport, convert_corpus};
