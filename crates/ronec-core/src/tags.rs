//! # Entity tags
//!
//! RONEC marks entities in its last column with span markers:
//!
//! - `*` for a token outside any entity,
//! - `<id>:<B>-<LABEL>` on the first token of a span,
//! - `<id>` on each following token of the same span.
//!
//! spaCy's `conllubio` converter wants plain BIO tags instead, so every span
//! token becomes `I-<LABEL>` and everything else becomes `O`.

use std::fmt;

use crate::error::{Result, RonecError};

/// Tag for tokens outside any entity.
pub const OUTSIDE_TAG: &str = "O";

/// Source marker for tokens outside any entity.
pub const OUTSIDE_MARKER: &str = "*";

/// Separates the span id from its label on the first token of a span.
pub const SPAN_SEPARATOR: char = ':';

/// Prefix of every in-span tag.
pub const INSIDE_PREFIX: &str = "I";

/// A raw entity-column value, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityMarker<'a> {
    /// `*`
    Outside,
    /// `<id>:<label>`; holds the text after the last separator.
    Open(&'a str),
    /// Anything else: continues the active span.
    Continue,
}

impl<'a> EntityMarker<'a> {
    pub fn parse(raw: &'a str) -> Self {
        if raw == OUTSIDE_MARKER {
            EntityMarker::Outside
        } else if let Some((_, label)) = raw.rsplit_once(SPAN_SEPARATOR) {
            EntityMarker::Open(label)
        } else {
            EntityMarker::Continue
        }
    }
}

impl fmt::Display for EntityMarker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityMarker::Outside => write!(f, "{OUTSIDE_MARKER}"),
            EntityMarker::Open(label) => write!(f, "open({label})"),
            EntityMarker::Continue => write!(f, "continue"),
        }
    }
}

/// Builds the in-span tag for a qualified label such as `B-PERSON`.
///
/// Exactly one leading character is replaced by [`INSIDE_PREFIX`], so
/// `B-PERSON` becomes `I-PERSON`. Labels with a qualifier of another width
/// are passed through the same way.
pub fn inside_tag(label: &str) -> String {
    let mut chars = label.chars();
    chars.next();
    format!("{INSIDE_PREFIX}{}", chars.as_str())
}

/// The entity type of a normalized tag (`I-PERSON` gives `PERSON`).
pub fn entity_type(tag: &str) -> Option<&str> {
    if tag == OUTSIDE_TAG {
        return None;
    }
    tag.strip_prefix(INSIDE_PREFIX)
        .map(|rest| rest.strip_prefix('-').unwrap_or(rest))
        .filter(|rest| !rest.is_empty())
}

/// Per-sentence span state.
///
/// Remembers the label of the span opened last so that bare continuation
/// markers can be resolved. The reader resets it at every sentence boundary.
#[derive(Debug, Clone, Default)]
pub struct SpanTracker {
    active: Option<String>,
}

impl SpanTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the active span.
    pub fn reset(&mut self) {
        self.active = None;
    }

    /// Label of the span currently open, if any.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Rewrites one raw entity-column value into a normalized tag.
    ///
    /// # Errors
    ///
    /// Returns `RonecError::OrphanContinuation` when `raw` continues a span
    /// but no span was opened since the last [`reset`](Self::reset).
    pub fn normalize(&mut self, raw: &str, line: usize) -> Result<String> {
        match EntityMarker::parse(raw) {
            EntityMarker::Outside => Ok(OUTSIDE_TAG.to_string()),
            EntityMarker::Open(label) => {
                let tag = inside_tag(label);
                self.active = Some(label.to_string());
                Ok(tag)
            }
            EntityMarker::Continue => self
                .active
                .as_deref()
                .map(inside_tag)
                .ok_or(RonecError::OrphanContinuation { line }),
        }
    }
}
