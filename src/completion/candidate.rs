//! Raw candidates as handed back by the parse engine

use serde::{Deserialize, Serialize};

use super::chunk::CompletionChunk;

/// Semantic category of the entity a candidate refers to.
///
/// Mirrors the engine's cursor-kind model for the categories completion cares
/// about. `Unknown` carries the raw engine value for categories a newer
/// engine version may emit; classification resolves those by policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorCategory {
    Struct,
    Union,
    Class,
    Typedef,
    ClassTemplate,
    Constructor,
    Method,
    Destructor,
    Function,
    FunctionTemplate,
    Variable,
    EnumConstant,
    Field,
    Namespace,
    MacroDefinition,
    Enum,
    /// The engine's marker for keyword suggestions.
    Keyword,
    /// A bare function-parameter declaration.
    ParamDecl,
    Unknown(u32),
}

/// The engine's judgment of whether a candidate is usable at the call site.
///
/// Drives a visible annotation in the rendered signature; candidates are not
/// dropped on the basis of this value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    #[default]
    Available,
    Deprecated,
    NotAvailable,
    NotAccessible,
}

/// One completion suggestion from the engine, prior to classification and
/// rendering. Transient: produced per request and discarded after parsing.
#[derive(Debug, Clone)]
pub struct RawCandidate {
    pub category: CursorCategory,
    pub availability: Availability,
    /// Engine relevance priority; lower sorts earlier.
    pub priority: u32,
    /// Engine annotation strings. Surfaced to the log channel only, never to
    /// result rows.
    pub annotations: Vec<String>,
    pub chunks: Vec<CompletionChunk>,
}

impl RawCandidate {
    /// The candidate's insertable token: the text of its first typed-text
    /// chunk, searching nested optional runs as well. Empty when the engine
    /// produced none.
    pub fn typed_text(&self) -> &str {
        first_typed_text(&self.chunks).unwrap_or("")
    }
}

fn first_typed_text(chunks: &[CompletionChunk]) -> Option<&str> {
    for chunk in chunks {
        match chunk {
            CompletionChunk::TypedText(text) => return Some(text.as_str()),
            CompletionChunk::Optional(inner) => {
                if let Some(text) = first_typed_text(inner) {
                    return Some(text);
                }
            }
            _ => {}
        }
    }
    None
}

/// Sorts candidates the way the engine's own sorter does: priority first,
/// then typed text case-insensitively, raw typed text as the tie-breaker.
pub fn sort_candidates(candidates: &mut [RawCandidate]) {
    candidates.sort_by(|a, b| {
        let (a_text, b_text) = (a.typed_text(), b.typed_text());
        a.priority
            .cmp(&b.priority)
            .then_with(|| {
                a_text
                    .to_ascii_lowercase()
                    .cmp(&b_text.to_ascii_lowercase())
            })
            .then_with(|| a_text.cmp(b_text))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(priority: u32, typed: &str) -> RawCandidate {
        RawCandidate {
            category: CursorCategory::Function,
            availability: Availability::Available,
            priority,
            annotations: Vec::new(),
            chunks: vec![CompletionChunk::TypedText(typed.to_string())],
        }
    }

    #[test]
    fn typed_text_found_inside_optional_run() {
        let raw = RawCandidate {
            category: CursorCategory::Function,
            availability: Availability::Available,
            priority: 0,
            annotations: Vec::new(),
            chunks: vec![
                CompletionChunk::Text("operator".to_string()),
                CompletionChunk::Optional(vec![CompletionChunk::TypedText("[]".to_string())]),
            ],
        };
        assert_eq!(raw.typed_text(), "[]");
    }

    #[test]
    fn typed_text_empty_without_typed_chunk() {
        let raw = RawCandidate {
            category: CursorCategory::Keyword,
            availability: Availability::Available,
            priority: 0,
            annotations: Vec::new(),
            chunks: vec![CompletionChunk::Text("const".to_string())],
        };
        assert_eq!(raw.typed_text(), "");
    }

    #[test]
    fn sort_orders_by_priority_before_text() {
        let mut candidates = vec![candidate(50, "alpha"), candidate(10, "zeta")];
        sort_candidates(&mut candidates);
        assert_eq!(candidates[0].typed_text(), "zeta");
        assert_eq!(candidates[1].typed_text(), "alpha");
    }

    #[test]
    fn sort_is_case_insensitive_within_a_priority() {
        let mut candidates = vec![
            candidate(10, "Zebra"),
            candidate(10, "apple"),
            candidate(10, "Banana"),
        ];
        sort_candidates(&mut candidates);
        let names: Vec<&str> = candidates.iter().map(|c| c.typed_text()).collect();
        assert_eq!(names, ["apple", "Banana", "Zebra"]);
    }
}
