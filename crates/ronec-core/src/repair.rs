//! # Label repair
//!
//! spaCy's `conllubio` converter cuts the first letters off RONEC entity
//! labels (`I-DATETIME` comes out as `...-TETIME`). The damage is undone with
//! an ordered list of substring substitutions over the converter output.
//!
//! Patterns are not anchored: any other text containing a pattern is
//! rewritten as well.

use regex::{NoExpand, Regex};
use tracing::debug;

use crate::error::Result;

/// Truncated label suffixes and their repaired form, applied in this order.
pub const LABEL_FIXES: &[(&str, &str)] = &[
    ("-TETIME", "-DATETIME"),
    ("-MERIC_VALUE", "-NUMERIC_VALUE"),
    ("-RSON", "-PERSON"),
    ("-GANIZATION", "-ORGANIZATION"),
    ("-T_REL_POL", "-NAT_REL_POL"),
    ("-E\"", "-GPE\""),
    ("-C\"", "-LOC\""),
    ("-CILITY", "-FACILITY"),
    ("-ODUCT", "-PRODUCT"),
    ("-ENT", "-EVENT"),
    ("-NGUAGE", "-LANGUAGE"),
    ("-RK_OF_ART", "-WORK_OF_ART"),
    ("-RIOD", "-PERIOD"),
    ("-NEY", "-MONEY"),
    ("-ANTITY", "-QUANTITY"),
    ("-DINAL", "-ORDINAL"),
];

/// Applies an ordered table of literal substitutions.
#[derive(Debug, Clone)]
pub struct LabelRepairer {
    fixes: Vec<(Regex, String)>,
}

impl LabelRepairer {
    /// Builds a repairer for [`LABEL_FIXES`].
    ///
    /// # Errors
    ///
    /// Returns `RonecError::RegexError` if a pattern fails to compile
    /// (should never happen: every pattern is escaped).
    pub fn new() -> Result<Self> {
        Self::with_fixes(LABEL_FIXES)
    }

    /// Builds a repairer for a custom ordered table.
    pub fn with_fixes(fixes: &[(&str, &str)]) -> Result<Self> {
        let fixes = fixes
            .iter()
            .map(|(pattern, replacement)| -> Result<(Regex, String)> {
                Ok((Regex::new(&regex::escape(pattern))?, replacement.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { fixes })
    }

    /// Number of substitutions in the table.
    pub fn len(&self) -> usize {
        self.fixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixes.is_empty()
    }

    /// Returns `text` with every substitution applied in order.
    pub fn repair(&self, text: &str) -> String {
        self.repair_counted(text).0
    }

    /// Like [`repair`](Self::repair), also returning how many replacements
    /// were made in total.
    pub fn repair_counted(&self, text: &str) -> (String, usize) {
        let mut repaired = text.to_string();
        let mut count = 0;

        for (pattern, replacement) in &self.fixes {
            let hits = pattern.find_iter(&repaired).count();
            if hits == 0 {
                continue;
            }
            debug!(pattern = pattern.as_str(), hits, "repairing label");
            repaired = pattern
                .replace_all(&repaired, NoExpand(replacement))
                .into_owned();
            count += hits;
        }

        (repaired, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repairer() -> LabelRepairer {
        LabelRepairer::new().unwrap()
    }

    #[test]
    fn datetime_is_repaired() {
        let out = repairer().repair(r#"{"ner": "U-TETIME"}, {"ner": "L-TETIME"}"#);
        assert_eq!(out, r#"{"ner": "U-DATETIME"}, {"ner": "L-DATETIME"}"#);
        assert!(!out.contains("-TETIME"));
    }

    #[test]
    fn quoted_short_labels_are_repaired() {
        let out = repairer().repair(r#""B-E" "I-C""#);
        assert_eq!(out, r#""B-GPE" "I-LOC""#);
    }

    #[test]
    fn counts_replacements() {
        let (out, count) = repairer().repair_counted("B-RSON I-RSON L-NEY O");
        assert_eq!(out, "B-PERSON I-PERSON L-MONEY O");
        assert_eq!(count, 3);
    }

    #[test]
    fn clean_text_is_untouched() {
        let text = r#"{"orth": "Bucuresti", "ner": "O"}"#;
        let (out, count) = repairer().repair_counted(text);
        assert_eq!(out, text);
        assert_eq!(count, 0);
    }

    #[test]
    fn substitutions_are_unanchored() {
        // Any text containing a pattern is rewritten, not only labels.
        assert_eq!(repairer().repair("PRE-ENTRY"), "PRE-EVENTRY");
    }

    #[test]
    fn order_is_respected() {
        let r = LabelRepairer::with_fixes(&[("ab", "b"), ("b", "c")]).unwrap();
        assert_eq!(r.repair("ab"), "c");
        let r = LabelRepairer::with_fixes(&[("b", "c"), ("ab", "b")]).unwrap();
        assert_eq!(r.repair("ab"), "ac");
    }

    #[test]
    fn patterns_are_literal() {
        let r = LabelRepairer::with_fixes(&[("a.c", "x"), ("$", "dollar")]).unwrap();
        assert_eq!(r.repair("abc a.c $1"), "abc x dollar1");
    }

    #[test]
    fn table_size() {
        assert_eq!(repairer().len(), LABEL_FIXES.len());
        assert_eq!(LABEL_FIXES.len(), 16);
    }
}
