use std::collections::BTreeMap;

use serde::Serialize;

use super::sentence::Sentence;

/// Counters gathered while reading a corpus file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReadStats {
    /// Lines consumed from the source.
    pub lines: usize,
    /// Token lines turned into tokens.
    pub tokens: usize,
    /// Tokens tagged with something other than `O`.
    pub entity_tokens: usize,
    /// Irregularities the reader worked around (unterminated sentences,
    /// tokens before any header).
    pub recovered: usize,
}

/// The ordered list of sentences read from one corpus file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Corpus {
    pub sentences: Vec<Sentence>,
    pub stats: ReadStats,
}

impl Corpus {
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// How many tokens carry each tag, sorted by tag.
    pub fn tag_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for token in self.sentences.iter().flat_map(|s| s.tokens.iter()) {
            *counts.entry(token.tag()).or_insert(0) += 1;
        }
        counts
    }
}

impl IntoIterator for Corpus {
    type Item = Sentence;
    type IntoIter = std::vec::IntoIter<Sentence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences.into_iter()
    }
}
