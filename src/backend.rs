//! Boundary with the native parse/completion engine
//!
//! The engine (libclang in the reference deployment) is a capability, not a
//! dependency: everything this crate needs from it fits the [`ParseEngine`]
//! trait. Production adapters wrap the native library; tests script canned
//! results. Adapter construction is where engine-index creation happens, so
//! init failures surface from adapter constructors, once, before any request
//! is served.

use thiserror::Error;

use crate::completion::candidate::RawCandidate;

/// Translation-unit parse options.
///
/// Defaults match the engine's "editing" mode: build a precompiled preamble
/// and cache completion results, the right trade-off when the same buffer is
/// parsed repeatedly between keystrokes.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    pub precompiled_preamble: bool,
    pub cache_completion_results: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            precompiled_preamble: true,
            cache_completion_results: true,
        }
    }
}

/// Code-completion options passed to the engine.
///
/// Defaults mirror the engine's default completion options: macro candidates
/// are included in the raw stream (classification drops them from the output
/// rows).
#[derive(Debug, Clone, Copy)]
pub struct CompleteOptions {
    pub include_macros: bool,
}

impl Default for CompleteOptions {
    fn default() -> Self {
        Self {
            include_macros: true,
        }
    }
}

/// Raw outcome of one completion query: the candidate list plus advisory
/// data that is surfaced to the log channel and never returned to callers.
#[derive(Debug, Clone, Default)]
pub struct RawCompletions {
    pub candidates: Vec<RawCandidate>,
    /// Engine-formatted parse diagnostics produced alongside the candidates.
    pub diagnostics: Vec<String>,
    /// Completion-context bitset reported by the engine, when it reports one.
    pub contexts: Option<u64>,
}

/// Failures at the engine boundary, scoped to a single request.
///
/// These never cross the request boundary: `CompletionEngine::complete` logs
/// the cause and hands the caller an empty row list.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("parse produced no translation unit for {filename}")]
    Parse { filename: String },
    #[error("completion produced no result container for {filename}:{line}:{col}")]
    CompletionUnavailable {
        filename: String,
        line: u32,
        col: u32,
    },
}

/// Capability contract for the native parse/completion engine.
///
/// Handles returned by [`ParseEngine::parse`] are owned by the caller and
/// must be handed back to [`ParseEngine::dispose`] exactly once; within this
/// crate the translation-unit cache is the only component that holds them.
///
/// Missing text anywhere in the engine's candidate stream is an engine quirk,
/// not an error: adapters substitute an empty string before building
/// [`RawCandidate`] values, so nothing downstream sees absent text.
pub trait ParseEngine {
    /// Owned handle to one parsed translation unit.
    type Unit;

    /// Parses `content` as the in-memory state of `filename` under the given
    /// compiler arguments. Returns `None` when the engine cannot produce a
    /// translation unit at all.
    fn parse(
        &self,
        filename: &str,
        content: &str,
        args: &[String],
        options: ParseOptions,
    ) -> Option<Self::Unit>;

    /// Reparses an existing unit against new in-memory content.
    ///
    /// A `false` return is non-fatal: completion proceeds best-effort against
    /// the unit's previous parse state.
    fn reparse(&self, unit: &mut Self::Unit, filename: &str, content: &str) -> bool;

    /// Runs code completion at a 1-based (`line`, `col`) position.
    ///
    /// Returns `None` when the engine yields no result container, which is
    /// distinct from a container holding zero candidates.
    fn complete_at(
        &self,
        unit: &mut Self::Unit,
        filename: &str,
        line: u32,
        col: u32,
        content: &str,
        options: CompleteOptions,
    ) -> Option<RawCompletions>;

    /// Releases a translation unit. Called exactly once per handle.
    fn dispose(&self, unit: Self::Unit);
}
