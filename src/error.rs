//! Error types produced while compiling a pattern.
//!
//! Matching itself never fails (see [`crate::matcher`]); only compilation can, and only for the
//! handful of syntactic mistakes enumerated here.

use thiserror::Error;

/// A location within a pattern string.
///
/// Patterns are single-line values, so a span is simply a code-point offset plus a length,
/// rather than the line/column pair used for multi-line sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Offset of the first code point of the span, in code points from the start of the pattern.
    pub position: usize,
    /// Number of code points covered by the span.
    pub len: usize,
}

impl Span {
    /// Creates a span covering `len` code points starting at `position`.
    pub fn new(position: usize, len: usize) -> Self {
        Self { position, len }
    }

    /// Creates a single-code-point span at `position`.
    pub fn point(position: usize) -> Self {
        Self::new(position, 1)
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "position {}", self.position)
    }
}

/// An error produced while compiling a pattern.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A backslash at the end of the pattern has nothing left to escape.
    #[error("{span}: trailing backslash has nothing to escape")]
    UnterminatedEscape {
        /// Location of the offending backslash.
        span: Span,
    },

    /// A character class that involved an escape never found its closing `]`.
    #[error("{span}: unterminated character class")]
    UnterminatedClass {
        /// Location of the opening `[`.
        span: Span,
    },

    /// A character class had no members before its closing `]`.
    #[error("{span}: character class is empty")]
    EmptyClass {
        /// Location of the opening `[`.
        span: Span,
    },

    /// A range such as `[z-a]` had its endpoints reversed.
    #[error("{span}: inverted range '{lo}-{hi}' (start is greater than end)")]
    InvertedRange {
        /// Lower bound as written (greater than `hi`).
        lo: char,
        /// Upper bound as written (less than `lo`).
        hi: char,
        /// Location of the range.
        span: Span,
    },
}

impl ParseError {
    /// Returns the span at which this error was detected.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnterminatedEscape { span }
            | ParseError::UnterminatedClass { span }
            | ParseError::EmptyClass { span }
            | ParseError::InvertedRange { span, .. } => *span,
        }
    }
}
