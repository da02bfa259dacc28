//! The public entry points: [`compile`], [`matches`], and [`matches_with`].

use crate::compiler::{self, CompiledPattern, ModeFlags};
use crate::error::ParseError;
use crate::matcher::{self, MatchOptions};

/// Compiles `pattern` under `flags` into a [`CompiledPattern`] ready for repeated matching.
///
/// Corresponds to the specification's `compile(pattern, flags) -> CompiledPattern | ParseError`.
pub fn compile(pattern: &str, flags: ModeFlags) -> Result<CompiledPattern, ParseError> {
    compiler::compile(pattern, flags)
}

/// Matches `subject` against `compiled` with default per-match options.
///
/// Corresponds to the specification's `match(compiled, subject) -> bool`. Named `matches`
/// because `match` is a reserved word in Rust.
pub fn matches(compiled: &CompiledPattern, subject: &str) -> bool {
    matcher::run_match(compiled, subject, MatchOptions::default())
}

/// Matches `subject` against `compiled`, honoring `opts` (currently just whether the subject is
/// a directory).
///
/// Corresponds to the specification's `match_with(compiled, subject, { is_directory }) -> bool`.
pub fn matches_with(compiled: &CompiledPattern, subject: &str, opts: MatchOptions) -> bool {
    matcher::run_match(compiled, subject, opts)
}
