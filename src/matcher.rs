//! The backtracking matching engine.
//!
//! Shaped after git's `dowild`/`handle_star` state machine (see
//! `examples/other_examples/*wildmatch.rs.rs`): a recursive walk over the token stream with a
//! dedicated "remembered position, retry on failure" handler for the two star tokens. Unlike
//! that C-derived implementation we return a plain `bool` rather than threading
//! `WM_ABORT_TO_STARSTAR` sentinels through every frame — the simpler remembered-position retry
//! described directly in the specification's matching algorithm is sufficient for correctness,
//! at the cost of the early-abort pruning optimisation (see `DESIGN.md`).

use crate::compiler::{CompiledPattern, ModeFlags};
use crate::token::Token;

/// Per-match options, distinct from the compile-time [`ModeFlags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchOptions {
    /// Whether the subject represents a directory. Relevant only to patterns ending in `/`.
    pub is_directory: bool,
}

pub(crate) fn run_match(compiled: &CompiledPattern, subject: &str, opts: MatchOptions) -> bool {
    let flags = compiled.flags;

    if flags.contains(ModeFlags::GIT_ATTRIBUTES) && (compiled.directory || subject.ends_with('/'))
    {
        return false;
    }

    let case_fold = flags.intersects(ModeFlags::CASE_FOLD | ModeFlags::SYSTEM_CASE);
    let chars: Vec<char> = subject.chars().collect();
    let base: Vec<char> = if compiled.basename_only {
        basename_of(&chars)
    } else {
        chars
    };

    if attempt(compiled, &base, opts, case_fold) {
        return true;
    }

    if flags.contains(ModeFlags::CONTENTS) {
        for end in segment_boundaries(&base) {
            if walk(&compiled.tokens, &base[..end], case_fold, compiled.solitary_any_segments) {
                return true;
            }
        }
    }

    false
}

/// A single attempt at matching `subject` against `compiled`, applying the directory-suffix
/// rule table but not `Contents` (which retries against prefixes with that rule bypassed
/// entirely, per §4.3: "ignoring the trailing `/` constraint").
fn attempt(compiled: &CompiledPattern, subject: &[char], opts: MatchOptions, case_fold: bool) -> bool {
    let ends_with_slash = subject.last() == Some(&'/');

    let trimmed: &[char] = if ends_with_slash {
        &subject[..subject.len() - 1]
    } else if compiled.directory && !opts.is_directory {
        return false;
    } else {
        subject
    };

    walk(&compiled.tokens, trimmed, case_fold, compiled.solitary_any_segments)
}

fn basename_of(chars: &[char]) -> Vec<char> {
    match chars.iter().rposition(|&c| c == '/') {
        Some(pos) => chars[pos + 1..].to_vec(),
        None => chars.to_vec(),
    }
}

fn segment_boundaries(subject: &[char]) -> impl Iterator<Item = usize> + '_ {
    subject
        .iter()
        .enumerate()
        .filter_map(|(i, &c)| (c == '/').then_some(i))
}

fn chars_equal(a: char, b: char, case_fold: bool) -> bool {
    a == b || (case_fold && a.to_lowercase().eq(b.to_lowercase()))
}

/// Walks `tokens` against `subject`, requiring the whole subject to be consumed.
fn walk(tokens: &[Token], subject: &[char], case_fold: bool, solitary: bool) -> bool {
    let mut ti = 0;
    let mut si = 0;

    while ti < tokens.len() {
        match &tokens[ti] {
            Token::AnyRun => return handle_star(tokens, ti, subject, si, case_fold, false, solitary),
            Token::AnySegments => {
                return handle_star(tokens, ti, subject, si, case_fold, true, solitary);
            }
            Token::Literal(r) => {
                if subject.get(si).is_some_and(|&c| chars_equal(*r, c, case_fold)) {
                    ti += 1;
                    si += 1;
                } else {
                    return false;
                }
            }
            Token::AnyOne => {
                if subject.get(si).is_some_and(|&c| c != '/') {
                    ti += 1;
                    si += 1;
                } else {
                    return false;
                }
            }
            Token::Separator => {
                if subject.get(si) == Some(&'/') {
                    ti += 1;
                    si += 1;
                } else {
                    return false;
                }
            }
            Token::Class(class) => {
                if subject.get(si).is_some_and(|&c| class.matches(c, case_fold)) {
                    ti += 1;
                    si += 1;
                } else {
                    return false;
                }
            }
        }
    }

    si == subject.len()
}

/// Handles a star token (`AnyRun` when `match_slash` is `false`, `AnySegments` when `true`) by
/// trying the remainder of the pattern at increasing subject positions.
///
/// `AnyRun` may not cross a `/`; `AnySegments` may skip any number of complete segments and, if
/// nothing follows it in the pattern, may also absorb the rest of the subject outright — unless
/// this is the sole remaining token of a non-trivial pattern (a trailing `x/**` with no
/// counterpart on the subject side), in which case at least one more code point is required (see
/// the `**` "requires a descendant" scenario in `DESIGN.md`).
fn handle_star(
    tokens: &[Token],
    star_ti: usize,
    subject: &[char],
    si: usize,
    case_fold: bool,
    match_slash: bool,
    solitary: bool,
) -> bool {
    let rest = &tokens[star_ti + 1..];

    if rest.is_empty() {
        return if match_slash {
            solitary || !subject[si..].is_empty()
        } else {
            !subject[si..].contains(&'/')
        };
    }

    if match_slash {
        let mut k = si;
        loop {
            if walk(rest, &subject[k..], case_fold, solitary) {
                return true;
            }
            match subject[k..].iter().position(|&c| c == '/') {
                Some(offset) => k += offset + 1,
                None => return false,
            }
        }
    } else {
        let mut k = si;
        loop {
            if walk(rest, &subject[k..], case_fold, solitary) {
                return true;
            }
            if k >= subject.len() || subject[k] == '/' {
                return false;
            }
            k += 1;
        }
    }
}
