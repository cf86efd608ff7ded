//! Completion-string handling: chunk model, classification, and rendering
//!
//! A parse engine describes each completion candidate as a chunked token
//! sequence ("completion string"). This module turns that raw form into a
//! display-ready candidate:
//! - `chunk` models the (possibly nested) chunk sequence
//! - `candidate` models one raw suggestion and the engine's default ordering
//! - `classify` maps semantic cursor categories to the UI's result kinds
//! - `parser` walks the chunk tree into typed text, return type, and signature

pub mod candidate;
pub mod chunk;
pub mod classify;
pub mod parser;

pub use candidate::{Availability, CursorCategory, RawCandidate, sort_candidates};
pub use chunk::{CompletionChunk, FixedChunk};
pub use classify::{ResultKind, UnknownCategoryPolicy, classify};
pub use parser::{ParsedCandidate, parse_candidate};
