//! The flat tab-separated format handed to the converter.
//!
//! Each sentence is written as its header lines, one tab-joined line per
//! token and a blank separator line.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::error::{Result, RonecError};
use crate::reader::COMMENT_MARKER;
use crate::types::{Sentence, Token};

/// Writes `sentences` in the flat format.
pub fn write_sentences<W: Write>(mut writer: W, sentences: &[Sentence]) -> io::Result<()> {
    for sentence in sentences {
        for line in &sentence.header {
            writeln!(writer, "{line}")?;
        }
        for token in &sentence.tokens {
            writeln!(writer, "{}", token.to_flat_line())?;
        }
        writeln!(writer)?;
    }
    writer.flush()
}

/// Renders `sentences` in the flat format.
pub fn to_flat_string(sentences: &[Sentence]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_sentences(&mut buf, sentences);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Writes `sentences` to a new file at `path`.
///
/// # Errors
///
/// Returns `RonecError::Io` if the file cannot be created or written.
pub fn write_file<P: AsRef<Path>>(path: P, sentences: &[Sentence]) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(|e| RonecError::io(path, e))?;
    write_sentences(io::BufWriter::new(file), sentences).map_err(|e| RonecError::io(path, e))
}

/// Reads the flat format back.
///
/// Columns are split on tabs and kept as they are: no column is dropped and
/// tags are not rewritten.
pub fn parse_flat<R: BufRead>(reader: R) -> Result<Vec<Sentence>> {
    let mut sentences = Vec::new();
    let mut current = Sentence::default();

    for line in reader.lines() {
        let line = line.map_err(|e| RonecError::io("-", e))?;

        if line.is_empty() {
            if !current.header.is_empty() || !current.tokens.is_empty() {
                sentences.push(std::mem::take(&mut current));
            }
            continue;
        }

        if line.starts_with(COMMENT_MARKER) && current.tokens.is_empty() {
            current.header.push(line);
            continue;
        }

        current
            .tokens
            .push(Token::new(line.split('\t').map(str::to_owned).collect()));
    }

    // Don't forget the last sentence
    if !current.header.is_empty() || !current.tokens.is_empty() {
        sentences.push(current);
    }

    Ok(sentences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::parse_corpus;

    const SOURCE: &str = "\
# sent_id = 4
# text = Banca Națională a României
1\tBanca\tbancă\tNOUN\tNcfsry\t_\t0\troot\t_\t_\t1:B-ORGANIZATION
2\tNațională\tnațional\tADJ\tAfpfsrn\t_\t1\tamod\t_\t_\t1
3\ta\tal\tDET\tTsfs\t_\t4\tdet\t_\t_\t1
4\tRomâniei\tRomânia\tPROPN\tNpfsoy\t_\t1\tnmod\t_\t_\t1

";

    #[test]
    fn flat_layout() {
        let corpus = parse_corpus(SOURCE.as_bytes()).unwrap();
        let flat = to_flat_string(corpus.sentences());
        let lines: Vec<&str> = flat.lines().collect();

        assert_eq!(lines[0], "# sent_id = 4");
        assert_eq!(lines[1], "# text = Banca Națională a României");
        assert_eq!(
            lines[2],
            "1\tBanca\tbancă\tNOUN\tNcfsry\t_\t0\troot\t_\tI-ORGANIZATION"
        );
        assert_eq!(lines[6], "");
        assert!(flat.ends_with("\n\n"));
    }

    #[test]
    fn parse_flat_keeps_order_and_tags() {
        let corpus = parse_corpus(SOURCE.as_bytes()).unwrap();
        let flat = to_flat_string(corpus.sentences());
        let back = parse_flat(flat.as_bytes()).unwrap();

        assert_eq!(back, corpus.sentences);
        assert_eq!(back[0].forms(), vec!["Banca", "Națională", "a", "României"]);
        assert!(back[0].tags().iter().all(|t| *t == "I-ORGANIZATION"));
    }

    #[test]
    fn write_file_creates_flat_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("train_ronec.json");
        let corpus = parse_corpus(SOURCE.as_bytes()).unwrap();

        write_file(&path, corpus.sentences()).unwrap();
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, to_flat_string(corpus.sentences()));
    }
}
