//! Run configuration.

use std::path::{Path, PathBuf};
use std::process::Command;

use ronec_core::{DEFAULT_DEV_RATIO, RONEC_TOTAL_SENTENCES};

/// Program that hosts the converter.
pub const DEFAULT_CONVERTER_PROGRAM: &str = "python";

/// Arguments placed before `convert`.
pub const DEFAULT_CONVERTER_ARGS: &[&str] = &["-m", "spacy"];

/// spaCy converter name for CoNLL-U files with BIO tags.
pub const DEFAULT_CONVERTER: &str = "conllubio";

/// Temporary file names, written to the work dir. They keep a `.json`
/// extension so the converter names its output the same way.
pub const TRAIN_FILE_NAME: &str = "train_ronec.json";
pub const DEV_FILE_NAME: &str = "dev_ronec.json";

/// Where temporary files go when no work dir is configured: next to the
/// running executable, or the current directory.
pub fn default_work_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// How to invoke the external converter.
///
/// The full command line is
/// `<program> <program_args…> convert <input> <output_dir> --converter <converter>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    pub program: String,
    pub program_args: Vec<String>,
    pub converter: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_CONVERTER_PROGRAM.to_string(),
            program_args: DEFAULT_CONVERTER_ARGS.iter().map(|a| a.to_string()).collect(),
            converter: DEFAULT_CONVERTER.to_string(),
        }
    }
}

impl ConverterConfig {
    /// Builds the converter command for one input file.
    pub fn command(&self, input: &Path, output_dir: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.program_args)
            .arg("convert")
            .arg(input)
            .arg(output_dir)
            .arg("--converter")
            .arg(&self.converter);
        cmd
    }
}

/// Everything one conversion run needs.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Source corpus file.
    pub corpus_path: PathBuf,
    /// Directory receiving the converter output.
    pub output_dir: PathBuf,
    /// Directory for the temporary flat files.
    pub work_dir: PathBuf,
    /// Fraction of the planned sentences that go to dev.
    pub dev_ratio: f64,
    /// Planned sentence count; not measured from the corpus.
    pub total_sentences: usize,
    pub converter: ConverterConfig,
}

impl ConvertConfig {
    /// A configuration with the RONEC defaults.
    pub fn new(corpus_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            corpus_path: corpus_path.into(),
            output_dir: output_dir.into(),
            work_dir: default_work_dir(),
            dev_ratio: DEFAULT_DEV_RATIO,
            total_sentences: RONEC_TOTAL_SENTENCES,
            converter: ConverterConfig::default(),
        }
    }

    pub fn train_temp_path(&self) -> PathBuf {
        self.work_dir.join(TRAIN_FILE_NAME)
    }

    pub fn dev_temp_path(&self) -> PathBuf {
        self.work_dir.join(DEV_FILE_NAME)
    }
}
