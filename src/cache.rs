//! Translation-unit caching keyed by filename
//!
//! Parsing a translation unit is the expensive step of a completion request,
//! so handles are kept alive across requests and refreshed in place. The
//! cache exclusively owns every handle it stores: no other component retains
//! one across requests, and each handle is disposed exactly once, either by
//! an explicit clear/evict or when the cache itself is dropped.
//!
//! The table is unbounded on purpose. The only invalidation is the full clear
//! on reconfiguration (entries parsed under stale compiler arguments are
//! useless), which is a known scalability limitation rather than a bug: an
//! editing session touches a bounded set of files.

use std::collections::hash_map::Entry;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::backend::{EngineError, ParseEngine, ParseOptions};

/// Lifecycle counters for monitoring and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that parsed a new unit.
    pub misses: u64,
    /// Units disposed by clear, evict, or reconfiguration.
    pub disposals: u64,
}

/// Filename-keyed store of owned translation units.
///
/// At most one live unit exists per filename. A cached unit is returned
/// unchanged by [`get_or_create`](Self::get_or_create); refreshing it against
/// the current buffer is the caller's pre-completion reparse step, not an
/// implicit behavior here.
pub struct TranslationUnitCache<E: ParseEngine> {
    engine: Arc<E>,
    args: Vec<String>,
    units: FxHashMap<String, E::Unit>,
    stats: CacheStats,
}

impl<E: ParseEngine> TranslationUnitCache<E> {
    pub fn new(engine: Arc<E>) -> Self {
        Self {
            engine,
            args: Vec::new(),
            units: FxHashMap::default(),
            stats: CacheStats::default(),
        }
    }

    /// Replaces the compiler argument list (include paths, language-standard
    /// flags, defines).
    ///
    /// Every cached unit was parsed under the old arguments and is disposed
    /// unconditionally; the next request per file parses from scratch.
    pub fn configure(&mut self, args: Vec<String>) {
        debug!(?args, "compiler arguments replaced, dropping cached translation units");
        self.args = args;
        self.clear();
    }

    /// The current compiler argument list.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Returns the unit cached for `filename`, parsing `content` if absent.
    ///
    /// On parse failure nothing is stored, so a later request retries from
    /// scratch.
    pub fn get_or_create(
        &mut self,
        filename: &str,
        content: &str,
    ) -> Result<&mut E::Unit, EngineError> {
        match self.units.entry(filename.to_owned()) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                Ok(entry.into_mut())
            }
            Entry::Vacant(slot) => {
                match self
                    .engine
                    .parse(filename, content, &self.args, ParseOptions::default())
                {
                    Some(unit) => {
                        self.stats.misses += 1;
                        debug!(%filename, "parsed new translation unit");
                        Ok(slot.insert(unit))
                    }
                    None => Err(EngineError::Parse {
                        filename: filename.to_owned(),
                    }),
                }
            }
        }
    }

    /// Disposes and removes the unit for one file. Returns whether an entry
    /// existed.
    pub fn evict(&mut self, filename: &str) -> bool {
        match self.units.remove(filename) {
            Some(unit) => {
                self.engine.dispose(unit);
                self.stats.disposals += 1;
                debug!(%filename, "evicted translation unit");
                true
            }
            None => false,
        }
    }

    /// Disposes every cached unit. Idempotent and safe with zero entries.
    pub fn clear(&mut self) {
        for (filename, unit) in self.units.drain() {
            debug!(%filename, "disposing translation unit");
            self.engine.dispose(unit);
            self.stats.disposals += 1;
        }
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.units.contains_key(filename)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl<E: ParseEngine> Drop for TranslationUnitCache<E> {
    /// Shutdown path: whatever was not already cleared is disposed here.
    fn drop(&mut self) {
        self.clear();
    }
}
