//! Completion-string parsing: chunk tree to display-ready candidate
//!
//! The walk is depth-first, left to right, with one accumulator owned for the
//! duration of a single candidate. Optional-group markers are emitted only on
//! transitions between depth zero and one, so a top-level optional group
//! renders as a single balanced pair no matter how deep its internal nesting
//! goes.

use serde::Serialize;

use super::candidate::{Availability, RawCandidate};
use super::chunk::CompletionChunk;
use super::classify::ResultKind;

/// Opens an optional-group run in a rendered signature.
pub const OPTIONAL_OPEN: &str = "{";
/// Closes an optional-group run in a rendered signature.
pub const OPTIONAL_CLOSE: &str = "}";
/// Appended after placeholder text to distinguish fill-in slots from literal
/// signature text.
pub const PLACEHOLDER_MARK: &str = "{PH}";
/// Separates the signature body from the trailing return type.
pub const RETURN_SEPARATOR: &str = " -> ";
/// Prefix for candidates the engine reports as not accessible from the call
/// site.
pub const NOT_ACCESSIBLE_PREFIX: &str = "(NOTACCESS) ";

/// A candidate rendered for display and insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCandidate {
    /// Rendered result type; empty when the candidate has none.
    pub return_type: String,
    /// The literal token inserted when the candidate is accepted.
    pub typed_text: String,
    /// Fully rendered display string.
    pub signature: String,
    pub availability: Availability,
    pub kind: ResultKind,
}

/// Parses one raw candidate into its display form.
///
/// `kind` is the classifier's verdict for this candidate; the parser does not
/// reclassify. Parsing never fails: absent engine text was replaced by empty
/// strings at the backend boundary, and an empty chunk sequence yields an
/// empty signature.
pub fn parse_candidate(candidate: &RawCandidate, kind: ResultKind) -> ParsedCandidate {
    let mut acc = Accumulator::default();
    acc.walk(&candidate.chunks, 0);

    let Accumulator {
        return_type,
        typed_text,
        mut signature,
    } = acc;

    if !return_type.is_empty() {
        signature.push_str(RETURN_SEPARATOR);
        signature.push_str(&return_type);
    }
    if candidate.availability == Availability::NotAccessible {
        signature.insert_str(0, NOT_ACCESSIBLE_PREFIX);
    }

    ParsedCandidate {
        return_type,
        typed_text,
        signature,
        availability: candidate.availability,
        kind,
    }
}

#[derive(Default)]
struct Accumulator {
    return_type: String,
    typed_text: String,
    signature: String,
}

impl Accumulator {
    fn walk(&mut self, chunks: &[CompletionChunk], depth: u32) {
        for chunk in chunks {
            match chunk {
                CompletionChunk::Optional(inner) => {
                    if depth == 0 {
                        self.signature.push_str(OPTIONAL_OPEN);
                    }
                    self.walk(inner, depth + 1);
                    if depth == 0 {
                        self.signature.push_str(OPTIONAL_CLOSE);
                    }
                }
                CompletionChunk::TypedText(text) => {
                    self.typed_text.push_str(text);
                    self.signature.push_str(text);
                }
                CompletionChunk::ResultType(text) => self.return_type.push_str(text),
                CompletionChunk::Placeholder(text) => {
                    self.signature.push_str(text);
                    self.signature.push_str(PLACEHOLDER_MARK);
                }
                CompletionChunk::Text(text)
                | CompletionChunk::Informative(text)
                | CompletionChunk::CurrentParameter(text) => self.signature.push_str(text),
                CompletionChunk::Fixed(fixed) => self.signature.push_str(fixed.render()),
            }
        }
    }
}
