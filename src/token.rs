//! The token model produced by the lexer and consumed by the matching engine.

/// A single member of a character [`Class`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassAtom {
    /// A single code point.
    Char(char),
    /// An inclusive range of code points, ordered `lo <= hi`.
    Range(char, char),
    /// A named POSIX class.
    Posix(PosixClass),
}

impl ClassAtom {
    fn matches(&self, c: char, case_fold: bool) -> bool {
        match self {
            ClassAtom::Char(atom) => chars_equal(*atom, c, case_fold),
            ClassAtom::Range(lo, hi) => in_range(*lo, *hi, c, case_fold),
            ClassAtom::Posix(class) => class.matches(c),
        }
    }
}

fn chars_equal(a: char, b: char, case_fold: bool) -> bool {
    if a == b {
        return true;
    }
    case_fold && a.to_lowercase().eq(b.to_lowercase())
}

fn in_range(lo: char, hi: char, c: char, case_fold: bool) -> bool {
    if (lo..=hi).contains(&c) {
        return true;
    }
    if !case_fold {
        return false;
    }
    // Simple case folding: try the lowercase form of `c` against the range too, covering the
    // common case of an ASCII/Unicode letter range written in one case matching the other.
    c.to_lowercase().any(|folded| (lo..=hi).contains(&folded))
}

/// One of the twelve POSIX named classes recognised inside `[:name:]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosixClass {
    Alnum,
    Alpha,
    Blank,
    Cntrl,
    Digit,
    Graph,
    Lower,
    Print,
    Punct,
    Space,
    Upper,
    Xdigit,
}

impl PosixClass {
    /// Resolves a class name (without the surrounding `[:` `:]`) to its class, if known.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "alnum" => Self::Alnum,
            "alpha" => Self::Alpha,
            "blank" => Self::Blank,
            "cntrl" => Self::Cntrl,
            "digit" => Self::Digit,
            "graph" => Self::Graph,
            "lower" => Self::Lower,
            "print" => Self::Print,
            "punct" => Self::Punct,
            "space" => Self::Space,
            "upper" => Self::Upper,
            "xdigit" => Self::Xdigit,
            _ => return None,
        })
    }

    fn matches(self, c: char) -> bool {
        match self {
            Self::Alnum => c.is_ascii_alphanumeric(),
            Self::Alpha => c.is_ascii_alphabetic(),
            Self::Blank => c == ' ' || c == '\t',
            Self::Cntrl => c.is_ascii_control(),
            Self::Digit => c.is_ascii_digit(),
            Self::Graph => c.is_ascii_graphic(),
            Self::Lower => c.is_ascii_lowercase(),
            Self::Print => c.is_ascii_graphic() || c == ' ',
            Self::Punct => c.is_ascii_punctuation(),
            Self::Space => c.is_ascii_whitespace(),
            Self::Upper => c.is_ascii_uppercase(),
            Self::Xdigit => c.is_ascii_hexdigit(),
        }
    }
}

/// A character class: `[...]` or its negated form `[!...]` / `[^...]`.
///
/// Never matches `/`, regardless of its members or negation (invariant: classes never cross a
/// path separator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    /// Whether the class was opened with `!` or `^`.
    pub negated: bool,
    /// The atoms making up the class. Never empty — an empty class is a parse failure.
    pub members: Vec<ClassAtom>,
}

impl Class {
    pub(crate) fn matches(&self, c: char, case_fold: bool) -> bool {
        if c == '/' {
            return false;
        }
        let hit = self.members.iter().any(|atom| atom.matches(c, case_fold));
        hit != self.negated
    }
}

/// A single token in a compiled pattern's token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A single literal code point.
    Literal(char),
    /// `?` — matches exactly one code point that is not `/`.
    AnyOne,
    /// `*` — matches zero or more code points, none of which is `/`.
    AnyRun,
    /// `**` on a segment boundary — matches zero or more complete path segments.
    AnySegments,
    /// `/` — matches exactly one path separator.
    Separator,
    /// `[...]` — matches one code point (not `/`) against a set of atoms.
    Class(Class),
}
