use serde::{Deserialize, Serialize};

use crate::tags::OUTSIDE_TAG;

/// Position of the FORM column in a CoNLL-U token line.
pub const FORM_COLUMN: usize = 1;

/// One token line after normalization.
///
/// The columns are the source columns minus the second-to-last one; the last
/// column holds the normalized entity tag (`O` or `I-<LABEL>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    columns: Vec<String>,
}

impl Token {
    /// Creates a token from already normalized columns.
    #[must_use]
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// All columns, in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The word form: the CoNLL-U FORM column, or the first column of a
    /// bare `form tag` line.
    pub fn form(&self) -> &str {
        let idx = if self.columns.len() > 2 { FORM_COLUMN } else { 0 };
        self.columns.get(idx).map(String::as_str).unwrap_or_default()
    }

    /// The entity tag (last column).
    pub fn tag(&self) -> &str {
        self.columns.last().map(String::as_str).unwrap_or_default()
    }

    /// Whether the token belongs to an entity span.
    pub fn is_entity(&self) -> bool {
        !self.columns.is_empty() && self.tag() != OUTSIDE_TAG
    }

    /// Tab-joined representation used by the flat export format.
    pub fn to_flat_line(&self) -> String {
        self.columns.join("\t")
    }
}

/// A sentence: its comment header lines followed by its tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Header lines, verbatim, without their line terminator.
    pub header: Vec<String>,

    /// Tokens in file order.
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Opens a sentence with its first header line.
    #[must_use]
    pub fn with_header(line: impl Into<String>) -> Self {
        Self {
            header: vec![line.into()],
            tokens: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Word forms in order.
    pub fn forms(&self) -> Vec<&str> {
        self.tokens.iter().map(Token::form).collect()
    }

    /// Entity tags in order.
    pub fn tags(&self) -> Vec<&str> {
        self.tokens.iter().map(Token::tag).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(cols: &[&str]) -> Token {
        Token::new(cols.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn token_accessors() {
        let t = token(&["1", "Ion", "PROPN", "I-PERSON"]);
        assert_eq!(t.form(), "Ion");
        assert_eq!(t.tag(), "I-PERSON");
        assert!(t.is_entity());
        assert_eq!(t.to_flat_line(), "1\tIon\tPROPN\tI-PERSON");
    }

    #[test]
    fn outside_token_is_not_entity() {
        assert!(!token(&["merge", "O"]).is_entity());
        assert!(!Token::new(Vec::new()).is_entity());
    }

    #[test]
    fn sentence_views() {
        let mut s = Sentence::with_header("# sent_id = 1");
        s.tokens.push(token(&["Ion", "I-PERSON"]));
        s.tokens.push(token(&["doarme", "O"]));

        assert_eq!(s.len(), 2);
        assert_eq!(s.forms(), vec!["Ion", "doarme"]);
        assert_eq!(s.tags(), vec!["I-PERSON", "O"]);
    }
}
