//! # Corpus reader
//!
//! Groups the lines of a RONEC CoNLL-U Plus file into sentences and
//! normalizes every token for spaCy's `conllubio` converter.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Result, RonecError};
use crate::tags::{OUTSIDE_TAG, SpanTracker};
use crate::types::{Corpus, Sentence, Token};

/// Lines starting with this character belong to a sentence header.
pub const COMMENT_MARKER: char = '#';

/// Reads and normalizes the corpus at `path`.
///
/// # Errors
///
/// Returns `RonecError::Io` if the file cannot be read, and the errors of
/// [`parse_corpus`] for malformed content.
pub fn read_corpus<P: AsRef<Path>>(path: P) -> Result<Corpus> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| RonecError::io(path, e))?;
    let corpus = parse_lines(BufReader::new(file), path)?;
    debug!(
        path = %path.display(),
        sentences = corpus.len(),
        tokens = corpus.stats.tokens,
        "read corpus"
    );
    Ok(corpus)
}

/// Parses a corpus from any buffered reader.
///
/// # Errors
///
/// - `RonecError::MalformedLine` for a token line with fewer than two columns.
/// - `RonecError::OrphanContinuation` for a span continuation with no span
///   opened earlier in the same sentence.
pub fn parse_corpus<R: BufRead>(reader: R) -> Result<Corpus> {
    parse_lines(reader, Path::new("-"))
}

fn parse_lines<R: BufRead>(reader: R, origin: &Path) -> Result<Corpus> {
    let mut corpus = Corpus::default();
    let mut current: Option<Sentence> = None;
    let mut spans = SpanTracker::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| RonecError::io(origin, e))?;
        let line_no = idx + 1;
        corpus.stats.lines += 1;

        if line.starts_with(COMMENT_MARKER) {
            // Consecutive comment lines share one header.
            if let Some(open) = current.as_mut().filter(|s| s.tokens.is_empty()) {
                open.header.push(line);
                continue;
            }
            if let Some(unterminated) = current.take() {
                warn!(line = line_no, "sentence not terminated by a blank line");
                corpus.stats.recovered += 1;
                corpus.sentences.push(unterminated);
            }
            spans.reset();
            current = Some(Sentence::with_header(line));
        } else if line.trim().is_empty() {
            if let Some(done) = current.take() {
                push_sentence(&mut corpus, done, line_no);
            }
            spans.reset();
        } else {
            let token = parse_token(&line, line_no, &mut spans)?;
            if token.tag() != OUTSIDE_TAG {
                corpus.stats.entity_tokens += 1;
            }
            corpus.stats.tokens += 1;

            let sentence = current.get_or_insert_with(|| {
                warn!(line = line_no, "token line outside of any sentence header");
                corpus.stats.recovered += 1;
                Sentence::default()
            });
            sentence.tokens.push(token);
        }
    }

    if let Some(last) = current {
        let lines = corpus.stats.lines;
        push_sentence(&mut corpus, last, lines);
    }

    Ok(corpus)
}

/// Keeps `sentence` unless it has no tokens.
fn push_sentence(corpus: &mut Corpus, sentence: Sentence, line_no: usize) {
    if sentence.is_empty() {
        debug!(line = line_no, "dropping header without tokens");
    } else {
        corpus.sentences.push(sentence);
    }
}

/// Splits one token line on whitespace, drops its second-to-last column and
/// normalizes the entity column.
pub fn parse_token(line: &str, line_no: usize, spans: &mut SpanTracker) -> Result<Token> {
    let mut columns: Vec<String> = line.split_whitespace().map(str::to_owned).collect();
    if columns.len() < 2 {
        return Err(RonecError::MalformedLine {
            line: line_no,
            reason: format!("expected at least 2 columns, found {}", columns.len()),
        });
    }

    columns.remove(columns.len() - 2);
    if let Some(entity) = columns.last_mut() {
        *entity = spans.normalize(entity.as_str(), line_no)?;
    }

    Ok(Token::new(columns))
}
