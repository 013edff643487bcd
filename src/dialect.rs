//! Rewrites pattern tokens into the syntax the `regex` crate accepts with the
//! intended meaning.
//!
//! The grammar fragments use Perl classes with ASCII semantics. In the
//! `regex` crate those classes are Unicode-aware, so `\d` would also match
//! Arabic-Indic digits inside an IPv4 literal. Each class is replaced by an
//! explicit ASCII class; inside a bracket expression the replacement becomes
//! a nested class, which the `regex` crate supports.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Token replacements, tried in order at each position.
///
/// The escaped backslash maps to itself so the scanner steps over it and a
/// literal `\\d` is never mistaken for a digit class.
const DIALECT_TABLE: &[(&str, &str)] = &[
    (r"\\", r"\\"),
    (r"[^\W_]", "[0-9A-Za-z]"),
    (r"\w", "[0-9A-Za-z_]"),
    (r"\d", "[0-9]"),
];

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternation = DIALECT_TABLE
        .iter()
        .map(|(from, _)| regex::escape(from))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("TOKEN_PATTERN: dialect table produced an invalid regex")
});

fn replacement(token: &str) -> &str {
    DIALECT_TABLE
        .iter()
        .find(|(from, _)| *from == token)
        .map_or(token, |&(_, to)| to)
}

/// Translate a composed pattern in one left-to-right pass.
pub fn translate(pattern: &str) -> String {
    TOKEN_PATTERN
        .replace_all(pattern, |caps: &Captures| replacement(&caps[0]).to_owned())
        .into_owned()
}
