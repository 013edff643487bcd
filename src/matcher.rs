use std::fmt;

use regex::{Match, Matches, Regex};

use crate::builder::build;
use crate::error::Result;
use crate::options::Options;

/// Compiled email matcher.
///
/// Wraps the [`Regex`] produced by [`build`]. Immutable once built and cheap
/// to share between threads.
#[derive(Debug, Clone)]
pub struct EmailRegex {
    regex: Regex,
}

impl EmailRegex {
    /// Build a matcher with the default options.
    pub fn new() -> Result<Self> {
        build(&Options::default())
    }

    pub(crate) fn from_regex(regex: Regex) -> Self {
        Self { regex }
    }

    /// Check if the text contains an address (or, in exact mode, is one)
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Find the leftmost address in the text
    pub fn find<'t>(&self, text: &'t str) -> Option<Match<'t>> {
        self.regex.find(text)
    }

    /// Iterate over all non-overlapping addresses, left to right
    pub fn find_iter<'r, 't>(&'r self, text: &'t str) -> Matches<'r, 't> {
        self.regex.find_iter(text)
    }

    /// Collect all non-overlapping addresses, left to right
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex.find_iter(text).map(|m| m.as_str()).collect()
    }

    /// The final pattern string
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// The underlying compiled regex
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    /// Consume the matcher, returning the underlying compiled regex
    pub fn into_regex(self) -> Regex {
        self.regex
    }
}

impl fmt::Display for EmailRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<EmailRegex> for Regex {
    fn from(matcher: EmailRegex) -> Self {
        matcher.regex
    }
}
