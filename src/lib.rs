//! Email Regex Safe - find email addresses in noisy text
//!
//! This library builds a single regular expression for email-like substrings
//! and compiles it with the `regex` crate. It supports:
//! - Gmail-style, UTF-8 (RFC 6531) or plain ASCII local parts
//! - Domain hosts ending in a known TLD, or any alphabetic TLD in strict mode
//! - `localhost`, IPv4 and IPv6 literal hosts
//! - Exact (anchored) matching for validating a whole input
//!
//! # Example
//!
//! ```rust
//! use email_regex_safe::{build, Options};
//!
//! let text = "contact: _boop@beep.com, foo+test@gmail.com; bad@999.999.999.999";
//!
//! let re = build(&Options::default()).unwrap();
//! assert_eq!(re.find_all(text), vec!["boop@beep.com", "foo+test@gmail.com"]);
//!
//! let exact = build(&Options::new().with_exact(true)).unwrap();
//! assert!(exact.is_match("foo@foo.com"));
//! assert!(!exact.is_match("mail foo@foo.com"));
//! ```
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `exact` | `false` | Whole input must be one address |
//! | `strict` | `false` | Any TLD of two or more letters |
//! | `gmail` | `true` | Local part is word characters, `.` and `+` |
//! | `utf8` | `true` | Local part may contain UTF-8 characters |
//! | `localhost` | `true` | Accept `user@localhost` |
//! | `ipv4` | `true` | Accept `user@1.2.3.4` |
//! | `ipv6` | `false` | Accept `user@2001:db8::1` |
//! | `tlds` | IANA list | Known TLDs, tried longest first |
//!
//! The local part always starts with a letter or digit. Matching is always
//! case-insensitive.

pub mod builder;
pub mod dialect;
pub mod error;
pub mod fragment;
pub mod matcher;
pub mod options;
pub mod tld;

// Re-export commonly used items
pub use builder::{build, build_with_source, pattern, pattern_with_source};
pub use error::{EmailRegexError, Result};
pub use matcher::EmailRegex;
pub use options::Options;
pub use tld::{IanaTlds, MemoryTlds, TldSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_workflow() {
        let config = r#"{"allowIPv6": true, "topLevelDomains": ["com", "co.uk"]}"#;

        // Load options
        let opts = Options::from_json(config).unwrap();
        assert!(opts.ipv6);

        // Build matcher
        let re = build(&opts).unwrap();

        // Domain hosts
        assert_eq!(re.find("user@example.co.uk").unwrap().as_str(), "user@example.co.uk");
        assert_eq!(re.find("user@example.com").unwrap().as_str(), "user@example.com");
        assert!(re.find("user@example.org").is_none());

        // Literal hosts
        assert_eq!(re.find("user@192.168.0.1").unwrap().as_str(), "user@192.168.0.1");
        assert_eq!(re.find("user@2001:db8::1").unwrap().as_str(), "user@2001:db8::1");
        assert_eq!(re.find("root@localhost").unwrap().as_str(), "root@localhost");

        // Same options, same pattern
        assert_eq!(build(&opts).unwrap().as_str(), re.as_str());
    }
}
