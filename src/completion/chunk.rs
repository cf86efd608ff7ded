//! Completion-string chunks as delivered by the parse engine
//!
//! A candidate's display and insertion text arrives as an ordered sequence of
//! typed fragments. Optional runs of fragments (default-valued parameters and
//! the like) nest recursively, so the sequence is a tree, not a flat list.

/// One fragment of a candidate's completion string.
///
/// Text-bearing variants carry the engine's text for that fragment. Engines
/// occasionally hand back no text at all for a fragment; adapters substitute
/// an empty string at the boundary, so text here is never missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionChunk {
    /// The literal token inserted into the buffer when the candidate is
    /// accepted.
    TypedText(String),
    /// Literal text that belongs in the signature but is not the insertable
    /// token.
    Text(String),
    /// A "fill this in" slot, e.g. a function parameter.
    Placeholder(String),
    /// Informational text (qualifiers, the defining class) never inserted.
    Informative(String),
    /// The parameter under the cursor in an active call.
    CurrentParameter(String),
    /// The candidate's result type. Rendered as a signature suffix rather
    /// than inline at its chunk position.
    ResultType(String),
    /// A nested run of fragments that is syntactically optional.
    Optional(Vec<CompletionChunk>),
    /// Fixed punctuation or spacing.
    Fixed(FixedChunk),
}

/// Fixed punctuation and spacing chunks.
///
/// Together with the variants of [`CompletionChunk`] these form the closed
/// chunk-kind set of the engine's token model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedChunk {
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    LeftAngle,
    RightAngle,
    Comma,
    Colon,
    Semicolon,
    Equal,
    HorizontalSpace,
    VerticalSpace,
}

impl FixedChunk {
    /// Display fragment for this chunk. Constant lookup, no failure modes.
    pub fn render(self) -> &'static str {
        match self {
            FixedChunk::LeftParen => "(",
            FixedChunk::RightParen => ")",
            FixedChunk::LeftBracket => "[",
            FixedChunk::RightBracket => "]",
            FixedChunk::LeftBrace => "{",
            FixedChunk::RightBrace => "}",
            FixedChunk::LeftAngle => "<",
            FixedChunk::RightAngle => ">",
            FixedChunk::Comma => ", ",
            FixedChunk::Colon => ":",
            FixedChunk::Semicolon => ";",
            FixedChunk::Equal => "=",
            FixedChunk::HorizontalSpace => " ",
            FixedChunk::VerticalSpace => "\n",
        }
    }
}
