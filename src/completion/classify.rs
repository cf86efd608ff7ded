//! Candidate classification: semantic cursor category to result kind
//!
//! The mapping is a deliberate allow/deny policy. `None` marks candidates
//! excluded from output entirely (macro definitions, bare keyword markers,
//! function-parameter declarations); everything else flows through to the
//! result list with a kind the UI can switch on.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::candidate::CursorCategory;

/// Result kind of a completion row.
///
/// `None` never reaches the caller: the engine drops those candidates before
/// parsing their completion strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Class,
    Method,
    Function,
    Variable,
    Member,
    Namespace,
    Other,
    None,
}

/// Policy for cursor categories without a known mapping.
///
/// Newer engine versions introduce categories this crate has not mapped yet.
/// Whether those should surface as `Other` rows or be excluded outright is a
/// caller decision, kept explicit here instead of hard-coded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownCategoryPolicy {
    /// Surface unmapped categories as [`ResultKind::Other`].
    #[default]
    Keep,
    /// Exclude unmapped categories from the result list.
    Exclude,
}

/// Maps a candidate's semantic category to the closed result-kind set.
///
/// Total over the known category set; unmapped categories are logged and
/// resolved per `policy`.
pub fn classify(category: CursorCategory, policy: UnknownCategoryPolicy) -> ResultKind {
    match category {
        CursorCategory::Struct
        | CursorCategory::Union
        | CursorCategory::Class
        | CursorCategory::Typedef
        | CursorCategory::ClassTemplate
        | CursorCategory::Constructor => ResultKind::Class,
        CursorCategory::Method | CursorCategory::Destructor => ResultKind::Method,
        CursorCategory::Function | CursorCategory::FunctionTemplate => ResultKind::Function,
        CursorCategory::Variable | CursorCategory::EnumConstant => ResultKind::Variable,
        CursorCategory::Field => ResultKind::Member,
        CursorCategory::Namespace => ResultKind::Namespace,
        CursorCategory::Enum => ResultKind::Other,
        CursorCategory::MacroDefinition | CursorCategory::Keyword | CursorCategory::ParamDecl => {
            ResultKind::None
        }
        CursorCategory::Unknown(raw) => {
            debug!(raw, "unmapped cursor category");
            match policy {
                UnknownCategoryPolicy::Keep => ResultKind::Other,
                UnknownCategoryPolicy::Exclude => ResultKind::None,
            }
        }
    }
}
