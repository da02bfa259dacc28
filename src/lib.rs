//! `wildglob` matches file paths against a single wildcard pattern, in the vein of the patterns
//! used by `.gitignore` and `.gitattributes` files.
//!
//! # Examples
//!
//! ```rust
//! use wildglob::{ModeFlags, compile, matches};
//!
//! let pattern = compile("**/*.rs", ModeFlags::empty()).unwrap();
//!
//! assert!(matches(&pattern, "src/lib.rs"));
//! assert!(!matches(&pattern, "src/lib.txt"));
//! ```
//!
//! # Scope
//!
//! This crate only compiles and matches patterns against subject strings; it does not walk a
//! filesystem or read directory entries. Pair it with a directory walker (e.g. [`walkdir`]) if
//! you need to enumerate paths.
//!
//! [`walkdir`]: https://docs.rs/walkdir
//!
//! # Syntax
//!
//! See [`compile`] and [`ModeFlags`] for the supported syntax and mode flags.

#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(unused_crate_dependencies)]

mod compiler;
mod error;
mod lexer;
mod matcher;
mod pattern;
mod token;

pub use self::{
    compiler::{CompiledPattern, ModeFlags},
    error::{ParseError, Span},
    matcher::MatchOptions,
    pattern::{compile, matches, matches_with},
    token::{Class, ClassAtom, PosixClass, Token},
};
