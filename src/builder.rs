//! Pattern composition and compilation.
//!
//! The composed pattern has the shape
//!
//! ```text
//! (?i)(?:<user>@(?:localhost|<ipv4>|<ipv6>|<host><domain><tld>))
//! ```
//!
//! where the first three host branches are present only when enabled, and
//! exact mode wraps the whole unit in `^...$`.

use regex::Regex;
use tracing::{debug, trace};

use crate::dialect::translate;
use crate::error::Result;
use crate::fragment::{domain, host, ipv4, ipv6, tld, user_part};
use crate::matcher::EmailRegex;
use crate::options::Options;
use crate::tld::{IanaTlds, TldSource};

/// Build an email matcher, taking default TLDs from the embedded IANA list.
pub fn build(opts: &Options) -> Result<EmailRegex> {
    build_with_source(opts, &IanaTlds)
}

/// Build an email matcher, taking default TLDs from `source`.
///
/// The source is only consulted when `opts.tlds` is `None`.
pub fn build_with_source(opts: &Options, source: &dyn TldSource) -> Result<EmailRegex> {
    let pattern = pattern_with_source(opts, source);
    trace!(pattern = %pattern, "compiling email pattern");
    let regex = Regex::new(&pattern)?;
    Ok(EmailRegex::from_regex(regex))
}

/// Assemble the pattern string without compiling it.
pub fn pattern(opts: &Options) -> String {
    pattern_with_source(opts, &IanaTlds)
}

/// Assemble the pattern string without compiling it, taking default TLDs from
/// `source`.
pub fn pattern_with_source(opts: &Options, source: &dyn TldSource) -> String {
    let tlds = opts
        .tlds
        .as_deref()
        .unwrap_or_else(|| source.top_level_domains());

    let mut hosts = Vec::with_capacity(4);
    if opts.localhost {
        hosts.push("localhost".to_string());
    }
    if opts.ipv4 {
        hosts.push(ipv4().to_string());
    }
    if opts.ipv6 {
        hosts.push(ipv6().to_string());
    }
    hosts.push(format!("{}{}{}", host(), domain(), tld(opts.strict, tlds)));

    let unit = format!("(?:{}@(?:{}))", user_part(opts), hosts.join("|"));
    let composed = if opts.exact {
        format!("(?i)(?:^{unit}$)")
    } else {
        format!("(?i){unit}")
    };
    let pattern = translate(&composed);

    debug!(
        exact = opts.exact,
        strict = opts.strict,
        gmail = opts.gmail,
        utf8 = opts.utf8,
        localhost = opts.localhost,
        ipv4 = opts.ipv4,
        ipv6 = opts.ipv6,
        tld_count = tlds.len(),
        pattern_len = pattern.len(),
        "assembled email pattern"
    );

    pattern
}
