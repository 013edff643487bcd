//! Top-level domain lists.
//!
//! The builder asks a [`TldSource`] for the known TLDs whenever the options do
//! not carry their own list. The default source, [`IanaTlds`], is a snapshot
//! of the IANA root zone embedded at compile time.

use std::cmp::Reverse;

use once_cell::sync::Lazy;

static IANA_TLDS: Lazy<Vec<String>> =
    Lazy::new(|| parse_tld_list(include_str!("../data/tlds-alpha-by-domain.txt")));

/// Trait for supplying the known top-level domains
pub trait TldSource: Send + Sync {
    /// The known TLDs, lowercase, in source order.
    ///
    /// The returned list is shared; callers must not assume any ordering and
    /// sort their own copy.
    fn top_level_domains(&self) -> &[String];
}

/// Embedded IANA root zone snapshot
#[derive(Debug, Clone, Copy, Default)]
pub struct IanaTlds;

impl TldSource for IanaTlds {
    fn top_level_domains(&self) -> &[String] {
        &IANA_TLDS
    }
}

/// In-memory TLD list, for callers that maintain their own
#[derive(Debug, Clone, Default)]
pub struct MemoryTlds {
    tlds: Vec<String>,
}

impl MemoryTlds {
    /// Create a source from any list of TLDs
    pub fn new<I, S>(tlds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tlds: tlds.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a source from text in the IANA `tlds-alpha-by-domain.txt` format
    pub fn from_text(text: &str) -> Self {
        Self {
            tlds: parse_tld_list(text),
        }
    }
}

impl TldSource for MemoryTlds {
    fn top_level_domains(&self) -> &[String] {
        &self.tlds
    }
}

/// Parse a TLD list with one entry per line.
///
/// Blank lines and `#` comments are skipped, entries are lowercased.
pub fn parse_tld_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

/// Return a copy of `tlds` ordered by descending length in chars.
///
/// Entries of equal length keep their relative order, so an alternation built
/// from the result tries `company` before `com`.
pub fn sort_by_length_desc(tlds: &[String]) -> Vec<String> {
    let mut sorted = tlds.to_vec();
    sorted.sort_by_key(|tld| Reverse(tld.chars().count()));
    sorted
}
