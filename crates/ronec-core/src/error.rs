use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors that can occur while reading, splitting or exporting the corpus.
#[derive(Debug, Error)]
pub enum RonecError {
    /// The dev ratio is outside `[0, 1]` (or NaN).
    #[error("dev ratio must be a float between 0 and 1, got {0}")]
    InvalidDevRatio(f64),

    /// A filesystem operation failed.
    #[error("I/O error on {path:?}: {source}")]
    Io {
        /// The path being read, written or removed.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A token line could not be interpreted.
    #[error("malformed line {line}: {reason}")]
    MalformedLine {
        /// 1-based line number in the source file.
        line: usize,
        reason: String,
    },

    /// A span continuation marker appeared with no span opened earlier in
    /// the same sentence.
    #[error("line {line}: entity continuation without an opening label in this sentence")]
    OrphanContinuation {
        /// 1-based line number in the source file.
        line: usize,
    },

    /// A repair pattern failed to compile (should not happen with escaped literals).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    /// The external converter could not be started.
    #[error("failed to launch converter {program:?}: {source}")]
    ConverterSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The external converter exited unsuccessfully.
    #[error("converter exited with {status}")]
    ConverterFailed {
        status: ExitStatus,
    },

    /// The converter finished but the expected output file is not there.
    #[error("converter produced no artifact at {path:?}")]
    MissingArtifact {
        path: PathBuf,
    },

    /// The temporary input file would be the converter's output file.
    #[error("temporary file {path:?} is the artifact path; pick a work dir outside the output dir")]
    TempCollidesWithArtifact {
        path: PathBuf,
    },
}

impl RonecError {
    /// Wraps an `io::Error` with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RonecError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for RONEC operations.
pub type Result<T> = std::result::Result<T, RonecError>;
