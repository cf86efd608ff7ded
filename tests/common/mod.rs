//! Shared scripted engine for integration tests
//!
//! `ScriptedEngine` implements the parse-engine capability over canned
//! candidate lists and counts every lifecycle call, so tests can assert
//! parse/reparse/dispose behavior without a native engine. Each test binary
//! compiles this module separately, so not every helper is used everywhere.
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use parking_lot::Mutex;

use cc_completion::backend::{CompleteOptions, ParseEngine, ParseOptions, RawCompletions};
use cc_completion::completion::candidate::{Availability, CursorCategory, RawCandidate};
use cc_completion::completion::chunk::{CompletionChunk, FixedChunk};

/// Observable engine state, shared between the test and the engine after the
/// engine has been moved into a `CompletionEngine`.
#[derive(Default)]
pub struct EngineState {
    /// Candidates handed back for every completion query.
    pub candidates: Mutex<Vec<RawCandidate>>,
    pub diagnostics: Mutex<Vec<String>>,
    pub contexts: Mutex<Option<u64>>,
    pub refuse_parse: AtomicBool,
    pub refuse_completion: AtomicBool,
    pub parses: AtomicU32,
    pub reparses: AtomicU32,
    pub completions: AtomicU32,
    pub disposals: AtomicU32,
    /// Argument list seen by each parse call, in order.
    pub parse_args: Mutex<Vec<Vec<String>>>,
}

impl EngineState {
    pub fn parses(&self) -> u32 {
        self.parses.load(Ordering::SeqCst)
    }

    pub fn reparses(&self) -> u32 {
        self.reparses.load(Ordering::SeqCst)
    }

    pub fn disposals(&self) -> u32 {
        self.disposals.load(Ordering::SeqCst)
    }

    pub fn last_parse_args(&self) -> Vec<String> {
        self.parse_args.lock().last().cloned().unwrap_or_default()
    }
}

/// Parse engine scripted with canned results.
pub struct ScriptedEngine {
    pub state: Arc<EngineState>,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self {
            state: Arc::new(EngineState::default()),
        }
    }

    pub fn with_candidates(candidates: Vec<RawCandidate>) -> Self {
        let engine = Self::new();
        *engine.state.candidates.lock() = candidates;
        engine
    }

    pub fn state(&self) -> Arc<EngineState> {
        self.state.clone()
    }
}

/// Translation-unit stand-in: remembers what it was parsed from so tests can
/// verify completion always runs against the freshest buffer.
pub struct ScriptedUnit {
    pub filename: String,
    pub content: String,
    pub args: Vec<String>,
}

impl ParseEngine for ScriptedEngine {
    type Unit = ScriptedUnit;

    fn parse(
        &self,
        filename: &str,
        content: &str,
        args: &[String],
        _options: ParseOptions,
    ) -> Option<ScriptedUnit> {
        if self.state.refuse_parse.load(Ordering::SeqCst) {
            return None;
        }
        self.state.parses.fetch_add(1, Ordering::SeqCst);
        self.state.parse_args.lock().push(args.to_vec());
        Some(ScriptedUnit {
            filename: filename.to_owned(),
            content: content.to_owned(),
            args: args.to_vec(),
        })
    }

    fn reparse(&self, unit: &mut ScriptedUnit, _filename: &str, content: &str) -> bool {
        self.state.reparses.fetch_add(1, Ordering::SeqCst);
        unit.content = content.to_owned();
        true
    }

    fn complete_at(
        &self,
        unit: &mut ScriptedUnit,
        _filename: &str,
        _line: u32,
        _col: u32,
        content: &str,
        _options: CompleteOptions,
    ) -> Option<RawCompletions> {
        self.state.completions.fetch_add(1, Ordering::SeqCst);
        if self.state.refuse_completion.load(Ordering::SeqCst) {
            return None;
        }
        assert_eq!(
            unit.content, content,
            "completion must run against the reparsed buffer"
        );
        Some(RawCompletions {
            candidates: self.state.candidates.lock().clone(),
            diagnostics: self.state.diagnostics.lock().clone(),
            contexts: *self.state.contexts.lock(),
        })
    }

    fn dispose(&self, _unit: ScriptedUnit) {
        self.state.disposals.fetch_add(1, Ordering::SeqCst);
    }
}

/// `ret name(param)` method candidate, one placeholder parameter.
pub fn method_candidate(name: &str, ret: &str, param: &str, priority: u32) -> RawCandidate {
    let mut chunks = vec![
        CompletionChunk::ResultType(ret.to_string()),
        CompletionChunk::TypedText(name.to_string()),
        CompletionChunk::Fixed(FixedChunk::LeftParen),
    ];
    if !param.is_empty() {
        chunks.push(CompletionChunk::Placeholder(param.to_string()));
    }
    chunks.push(CompletionChunk::Fixed(FixedChunk::RightParen));
    RawCandidate {
        category: CursorCategory::Method,
        availability: Availability::Available,
        priority,
        annotations: Vec::new(),
        chunks,
    }
}

pub fn field_candidate(name: &str, ty: &str, priority: u32) -> RawCandidate {
    RawCandidate {
        category: CursorCategory::Field,
        availability: Availability::Available,
        priority,
        annotations: Vec::new(),
        chunks: vec![
            CompletionChunk::ResultType(ty.to_string()),
            CompletionChunk::TypedText(name.to_string()),
        ],
    }
}

pub fn macro_candidate(name: &str) -> RawCandidate {
    RawCandidate {
        category: CursorCategory::MacroDefinition,
        availability: Availability::Available,
        priority: 70,
        annotations: Vec::new(),
        chunks: vec![CompletionChunk::TypedText(name.to_string())],
    }
}

pub fn keyword_candidate(text: &str) -> RawCandidate {
    RawCandidate {
        category: CursorCategory::Keyword,
        availability: Availability::Available,
        priority: 65,
        annotations: Vec::new(),
        chunks: vec![CompletionChunk::TypedText(text.to_string())],
    }
}

/// The canned member list of a `std::vector<int>`, unsorted on purpose.
pub fn vector_member_candidates() -> Vec<RawCandidate> {
    vec![
        method_candidate("size", "size_type", "", 40),
        method_candidate("push_back", "void", "const value_type &value", 35),
        method_candidate("pop_back", "void", "", 40),
        macro_candidate("assert"),
        keyword_candidate("public"),
    ]
}
