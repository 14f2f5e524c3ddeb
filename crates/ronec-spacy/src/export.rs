//! # Exporter
//!
//! Writes a set of sentences to a temporary flat file, runs the converter on
//! it and repairs the labels in the converter's output.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ronec_core::flat;
use ronec_core::{LabelRepairer, Result, RonecError, Sentence};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::ConverterConfig;

/// What one export produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    /// The repaired converter output.
    pub artifact: PathBuf,
    pub sentences: usize,
    pub tokens: usize,
    /// Label substitutions made in the artifact.
    pub repairs: usize,
}

/// A file that is removed when dropped.
#[derive(Debug)]
struct TempFile {
    path: PathBuf,
}

impl TempFile {
    fn write(path: &Path, sentences: &[Sentence]) -> Result<Self> {
        let guard = Self {
            path: path.to_path_buf(),
        };
        flat::write_file(&guard.path, sentences)?;
        Ok(guard)
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "removed temporary file"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(
                path = %self.path.display(),
                error = %e,
                "failed to remove temporary file"
            ),
        }
    }
}

/// The path the converter writes for `input`: same file name, inside `output_dir`.
pub fn artifact_path(output_dir: &Path, input: &Path) -> Result<PathBuf> {
    let name = input.file_name().ok_or_else(|| {
        RonecError::io(
            input,
            io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;
    Ok(output_dir.join(name))
}

/// Removes output left by an earlier run so that only the converter's fresh
/// output can pass the artifact check.
fn remove_stale_artifact(artifact: &Path) -> Result<()> {
    match fs::remove_file(artifact) {
        Ok(()) => {
            debug!(path = %artifact.display(), "removed stale artifact");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(RonecError::io(artifact, e)),
    }
}

fn create_dir(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| RonecError::io(dir, e))?;
    dir.canonicalize().map_err(|e| RonecError::io(dir, e))
}

/// Runs the converter over sentence subsets and fixes its output.
#[derive(Debug, Clone)]
pub struct Exporter {
    converter: ConverterConfig,
    repairer: LabelRepairer,
}

impl Exporter {
    /// Creates an exporter repairing labels with the RONEC table.
    pub fn new(converter: ConverterConfig) -> Result<Self> {
        Ok(Self {
            converter,
            repairer: LabelRepairer::new()?,
        })
    }

    /// Creates an exporter with a custom repairer.
    pub fn with_repairer(converter: ConverterConfig, repairer: LabelRepairer) -> Self {
        Self {
            converter,
            repairer,
        }
    }

    pub fn converter(&self) -> &ConverterConfig {
        &self.converter
    }

    /// Exports `sentences` to `output_dir` through a temporary file at `temp_path`.
    ///
    /// The temporary file is removed whatever the outcome.
    ///
    /// # Errors
    ///
    /// - `RonecError::Io` when a directory or file operation fails.
    /// - `RonecError::TempCollidesWithArtifact` when `temp_path` is the
    ///   converter's own output path.
    /// - `RonecError::ConverterSpawn` / `RonecError::ConverterFailed` when the
    ///   converter cannot start or exits unsuccessfully.
    /// - `RonecError::MissingArtifact` when the converter wrote nothing.
    pub fn export(
        &self,
        sentences: &[Sentence],
        output_dir: &Path,
        temp_path: &Path,
    ) -> Result<ExportReport> {
        let canonical_output = create_dir(output_dir)?;
        let artifact = artifact_path(output_dir, temp_path)?;

        let temp_dir = temp_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        if create_dir(temp_dir)? == canonical_output {
            return Err(RonecError::TempCollidesWithArtifact {
                path: temp_path.to_path_buf(),
            });
        }

        remove_stale_artifact(&artifact)?;

        let temp = TempFile::write(temp_path, sentences)?;
        debug!(
            path = %temp.path.display(),
            sentences = sentences.len(),
            "wrote temporary flat file"
        );

        self.run_converter(&temp.path, output_dir)?;

        if !artifact.is_file() {
            return Err(RonecError::MissingArtifact { path: artifact });
        }

        let text = fs::read_to_string(&artifact).map_err(|e| RonecError::io(&artifact, e))?;
        let (repaired, repairs) = self.repairer.repair_counted(&text);
        fs::write(&artifact, repaired).map_err(|e| RonecError::io(&artifact, e))?;

        drop(temp);

        let report = ExportReport {
            artifact,
            sentences: sentences.len(),
            tokens: sentences.iter().map(Sentence::len).sum(),
            repairs,
        };
        info!(
            artifact = %report.artifact.display(),
            sentences = report.sentences,
            tokens = report.tokens,
            repairs = report.repairs,
            "exported"
        );
        Ok(report)
    }

    fn run_converter(&self, input: &Path, output_dir: &Path) -> Result<()> {
        let mut cmd = self.converter.command(input, output_dir);
        debug!(command = ?cmd, "running converter");

        let status = cmd.status().map_err(|source| RonecError::ConverterSpawn {
            program: self.converter.program.clone(),
            source,
        })?;

        if !status.success() {
            return Err(RonecError::ConverterFailed { status });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_keeps_file_name() {
        let path =
            artifact_path(Path::new("out/spacy"), Path::new("/work/dev_ronec.json")).unwrap();
        assert_eq!(path, Path::new("out/spacy/dev_ronec.json"));
    }

    #[test]
    fn artifact_needs_a_file_name() {
        assert!(artifact_path(Path::new("out"), Path::new("/work/..")).is_err());
    }

    #[test]
    fn stale_artifact_is_removed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("train_ronec.json");
        fs::write(&path, "left over").unwrap();

        remove_stale_artifact(&path).unwrap();
        assert!(!path.exists());
        // Nothing to remove is fine too.
        remove_stale_artifact(&path).unwrap();
    }

    #[test]
    fn temp_file_is_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("train_ronec.json");

        let guard = TempFile::write(&path, &[Sentence::with_header("# a")]).unwrap();
        assert!(path.is_file());
        drop(guard);
        assert!(!path.exists());
    }
}
