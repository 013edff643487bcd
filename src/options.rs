//! Builder options.
//!
//! [`Options`] is a plain value: start from [`Options::default`], override
//! fields with the `with_*` setters (later calls win), and hand it to
//! [`build`](crate::build). Options can also be read from a JSON document,
//! using either the field names below or the long-form names
//! (`allowGmailExtendedLocal`, `topLevelDomains`, ...).

use serde::Deserialize;

use crate::error::{EmailRegexError, Result};

/// Options controlling which grammar the email pattern accepts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Anchor the pattern so the whole input must be one address
    pub exact: bool,
    /// Accept any TLD of two or more letters instead of the known list
    pub strict: bool,
    /// Gmail-style local part: word characters, `.` and `+`
    #[serde(alias = "allowGmailExtendedLocal")]
    pub gmail: bool,
    /// Local part may contain RFC 6531 (UTF-8) characters
    #[serde(alias = "allowUtf8Local")]
    pub utf8: bool,
    /// Accept `user@localhost`
    #[serde(alias = "allowLocalhost")]
    pub localhost: bool,
    /// Accept IPv4 literal hosts such as `user@192.168.0.1`
    #[serde(alias = "allowIPv4", alias = "allowIpv4")]
    pub ipv4: bool,
    /// Accept IPv6 literal hosts such as `user@2001:db8::1`
    #[serde(alias = "allowIPv6", alias = "allowIpv6")]
    pub ipv6: bool,
    /// Known top-level domains; `None` takes the list from the TLD source
    #[serde(alias = "topLevelDomains")]
    pub tlds: Option<Vec<String>>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            exact: false,
            strict: false,
            gmail: true,
            utf8: true,
            localhost: true,
            ipv4: true,
            ipv6: false,
            tlds: None,
        }
    }
}

impl Options {
    /// Create options with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object. Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| EmailRegexError::InvalidConfig(e.to_string()))
    }

    /// Set exact (anchored) matching.
    pub fn with_exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    /// Set strict TLD matching.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set Gmail-style local parts.
    pub fn with_gmail(mut self, gmail: bool) -> Self {
        self.gmail = gmail;
        self
    }

    /// Set UTF-8 local parts. Ignored while Gmail-style local parts are on.
    pub fn with_utf8(mut self, utf8: bool) -> Self {
        self.utf8 = utf8;
        self
    }

    /// Set whether `localhost` is accepted as a host.
    pub fn with_localhost(mut self, localhost: bool) -> Self {
        self.localhost = localhost;
        self
    }

    /// Set whether IPv4 literal hosts are accepted.
    pub fn with_ipv4(mut self, ipv4: bool) -> Self {
        self.ipv4 = ipv4;
        self
    }

    /// Set whether IPv6 literal hosts are accepted.
    pub fn with_ipv6(mut self, ipv6: bool) -> Self {
        self.ipv6 = ipv6;
        self
    }

    /// Replace the known TLD list. Order does not matter; longer entries are
    /// always tried first.
    pub fn with_tlds<I, S>(mut self, tlds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tlds = Some(tlds.into_iter().map(Into::into).collect());
        self
    }

    /// Go back to the TLD list supplied by the TLD source.
    pub fn with_default_tlds(mut self) -> Self {
        self.tlds = None;
        self
    }
}
