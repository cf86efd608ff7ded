//! Request orchestration: source buffers in, UI-ready completion rows out
//!
//! One [`CompletionEngine`] instance owns the backend capability and the
//! translation-unit cache, and serves synchronous requests one at a time.
//! Every failure mode is absorbed at this boundary: the caller always gets an
//! ordered row list (possibly empty) and the cause goes to the tracing
//! channel, so a failed request and a position with no suggestions look the
//! same to the UI.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::backend::{CompleteOptions, EngineError, ParseEngine, RawCompletions};
use crate::cache::{CacheStats, TranslationUnitCache};
use crate::completion::candidate::sort_candidates;
use crate::completion::classify::{ResultKind, UnknownCategoryPolicy, classify};
use crate::completion::parser::parse_candidate;

/// One UI-ready completion row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResultRow {
    pub kind: ResultKind,
    /// The token inserted into the buffer on acceptance.
    pub typed_text: String,
    /// The display label: the candidate's rendered signature.
    pub label: String,
}

/// Caller-side request flags.
///
/// Accepted and currently inert. The field is a reserved configuration point
/// (the obvious future use is a per-request macro-inclusion toggle) kept so
/// the caller surface stays stable when it gains behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestFlags {
    pub include_macros: bool,
}

/// The completion engine.
///
/// Scheduling is single-threaded request/response. The interior lock exists
/// so `set_options` invalidation is atomic with respect to later requests; it
/// serializes concurrent `complete` calls wholesale, and a genuinely
/// concurrent variant would need per-filename serialization before sharing
/// the cache more finely.
pub struct CompletionEngine<E: ParseEngine> {
    backend: Arc<E>,
    units: RwLock<TranslationUnitCache<E>>,
    unknown_categories: UnknownCategoryPolicy,
}

impl<E: ParseEngine> CompletionEngine<E> {
    pub fn new(backend: E) -> Self {
        let backend = Arc::new(backend);
        let units = RwLock::new(TranslationUnitCache::new(backend.clone()));
        Self {
            backend,
            units,
            unknown_categories: UnknownCategoryPolicy::default(),
        }
    }

    /// Sets the policy for cursor categories without a known mapping.
    pub fn with_unknown_category_policy(mut self, policy: UnknownCategoryPolicy) -> Self {
        self.unknown_categories = policy;
        self
    }

    /// Replaces the compiler argument list (include paths, language-standard
    /// flags, defines).
    ///
    /// Drops every cached translation unit: they were parsed under the old
    /// arguments. No later request can observe a stale unit.
    pub fn set_options(&self, args: Vec<String>) {
        self.units.write().configure(args);
    }

    /// Serves one completion request for the in-memory `content` of
    /// `filename` at a 1-based (`line`, `col`) position.
    ///
    /// The buffer under edit is authoritative: the translation unit is
    /// reparsed against `content` before completion runs, whether it was just
    /// created or reused from the cache. Rows come back in the engine's
    /// priority/alphabetic order.
    pub fn complete(
        &self,
        filename: &str,
        content: &str,
        line: u32,
        col: u32,
        flags: RequestFlags,
    ) -> Vec<CompletionResultRow> {
        // Reserved; see `RequestFlags`.
        let _ = flags;

        match self.try_complete(filename, content, line, col) {
            Ok(rows) => rows,
            Err(err) => {
                error!(%filename, line, col, %err, "completion request failed");
                Vec::new()
            }
        }
    }

    /// Reserved asynchronous entry point. Always returns job id 0; the
    /// synchronous path is the only implemented behavior.
    pub fn complete_async(&self, _filename: &str, _content: &str, _line: u32, _col: u32) -> u32 {
        0
    }

    fn try_complete(
        &self,
        filename: &str,
        content: &str,
        line: u32,
        col: u32,
    ) -> Result<Vec<CompletionResultRow>, EngineError> {
        let mut units = self.units.write();
        let unit = units.get_or_create(filename, content)?;

        // The buffer may have drifted since the unit was created or last
        // refreshed; completion must see the current content.
        if !self.backend.reparse(unit, filename, content) {
            warn!(%filename, "reparse failed, completing against previous parse state");
        }

        let raw = self
            .backend
            .complete_at(unit, filename, line, col, content, CompleteOptions::default())
            .ok_or_else(|| EngineError::CompletionUnavailable {
                filename: filename.to_owned(),
                line,
                col,
            })?;
        drop(units);

        self.log_advisories(filename, &raw);

        let RawCompletions { mut candidates, .. } = raw;
        if candidates.is_empty() {
            debug!(%filename, line, col, "no completion candidates at position");
            return Ok(Vec::new());
        }

        sort_candidates(&mut candidates);

        let mut rows = Vec::with_capacity(candidates.len());
        for candidate in &candidates {
            // Annotations are advisory and logged for every candidate, even
            // ones classification drops.
            for annotation in &candidate.annotations {
                debug!(typed_text = candidate.typed_text(), %annotation, "candidate annotation");
            }

            let kind = classify(candidate.category, self.unknown_categories);
            if kind == ResultKind::None {
                continue;
            }

            let parsed = parse_candidate(candidate, kind);
            rows.push(CompletionResultRow {
                kind,
                typed_text: parsed.typed_text,
                label: parsed.signature,
            });
        }
        Ok(rows)
    }

    fn log_advisories(&self, filename: &str, raw: &RawCompletions) {
        for (idx, diagnostic) in raw.diagnostics.iter().enumerate() {
            debug!(%filename, idx, %diagnostic, "completion diagnostic");
        }
        if let Some(contexts) = raw.contexts {
            debug!(%filename, contexts, "completion contexts");
        }
    }

    /// Number of live cached translation units.
    pub fn cached_units(&self) -> usize {
        self.units.read().len()
    }

    /// Whether a translation unit is cached for `filename`.
    pub fn has_unit(&self, filename: &str) -> bool {
        self.units.read().contains(filename)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.units.read().stats()
    }

    /// Disposes and removes the cached unit for one file, if any.
    pub fn evict(&self, filename: &str) -> bool {
        self.units.write().evict(filename)
    }

    /// Explicit lifecycle hook: disposes every cached unit now instead of at
    /// drop time.
    pub fn clear_cache(&self) {
        self.units.write().clear();
    }
}
