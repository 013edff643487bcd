//! Grammar fragments the email pattern is assembled from.
//!
//! Fragments are written with Perl classes (`\w`, `\d`) in their ASCII sense;
//! [`crate::dialect::translate`] rewrites them for the `regex` crate once the
//! full pattern is composed. Code points outside ASCII are spelled `\x{...}`.

use once_cell::sync::Lazy;

use crate::options::Options;
use crate::tld::sort_by_length_desc;

/// One IPv4 octet, 0-255, without leading zeros
const IPV4_OCTET: &str = r"(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]\d|\d)";

/// One IPv6 hextet
const IPV6_HEXTET: &str = r"[a-fA-F\d]{1,4}";

/// Character allowed in host and domain labels
const LABEL_CHAR: &str = r"[a-z\x{00A1}-\x{FFFF}0-9]";

/// Character allowed in a TLD under strict matching
const TLD_CHAR: &str = r"[a-z\x{00A1}-\x{FFFF}]";

/// Class that never matches; stands in for an empty TLD alternation
const NOTHING: &str = r"[^\x00-\x{10FFFF}]";

const USER_GMAIL: &str = r"[^\W_](?:[\w\.\+]+)";

const USER_UTF8: &str = r"[^\W_](?:[a-z\d!#\$%&'\*\+\-\/=\?\^_`{\|}~\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]+)";

const USER_ASCII: &str = r"[^\W_](?:[a-z\d!#\$%&'\*\+\-\/=\?\^_`{\|}~]+)";

static IPV4: Lazy<String> = Lazy::new(|| format!(r"{IPV4_OCTET}(?:\.{IPV4_OCTET}){{3}}"));

static IPV6: Lazy<String> = Lazy::new(|| {
    let seg = IPV6_HEXTET;
    let v4 = IPV4.as_str();
    let forms = [
        // 1:2:3:4:5:6:7::  1:2:3:4:5:6:7:8
        format!("(?:{seg}:){{7}}(?:{seg}|:)"),
        // 1:2:3:4:5:6::  1:2:3:4:5:6::8  1:2:3:4:5:6::1.2.3.4
        format!("(?:{seg}:){{6}}(?:{v4}|:{seg}|:)"),
        // 1:2:3:4:5::  1:2:3:4:5::7:8  1:2:3:4:5::1.2.3.4
        format!("(?:{seg}:){{5}}(?::{v4}|(?::{seg}){{1,2}}|:)"),
        // 1:2:3:4::  1:2:3:4::6:7:8  1:2:3:4::6:1.2.3.4
        format!("(?:{seg}:){{4}}(?:(?::{seg}){{0,1}}:{v4}|(?::{seg}){{1,3}}|:)"),
        // 1:2:3::  1:2:3::5:6:7:8  1:2:3::5:6:1.2.3.4
        format!("(?:{seg}:){{3}}(?:(?::{seg}){{0,2}}:{v4}|(?::{seg}){{1,4}}|:)"),
        // 1:2::  1:2::4:5:6:7:8  1:2::4:5:6:1.2.3.4
        format!("(?:{seg}:){{2}}(?:(?::{seg}){{0,3}}:{v4}|(?::{seg}){{1,5}}|:)"),
        // 1::  1::3:4:5:6:7:8  1::3:4:5:6:1.2.3.4
        format!("(?:{seg}:){{1}}(?:(?::{seg}){{0,4}}:{v4}|(?::{seg}){{1,6}}|:)"),
        // ::2:3:4:5:6:7:8  ::8  ::1.2.3.4  ::
        format!("(?::(?:(?::{seg}){{0,5}}:{v4}|(?::{seg}){{1,7}}|:))"),
    ];
    // optional zone id: %eth0, %1
    format!("(?:{})(?:%[0-9a-zA-Z]{{1,}})?", forms.join("|"))
});

static HOST: Lazy<String> = Lazy::new(|| format!("(?:(?:{LABEL_CHAR}[-_]*)*{LABEL_CHAR}+)"));

static DOMAIN: Lazy<String> =
    Lazy::new(|| format!(r"(?:\.(?:{LABEL_CHAR}-*)*{LABEL_CHAR}+)*"));

/// Local part of the address, chosen by priority: Gmail, then UTF-8, then
/// plain ASCII.
///
/// The first character is always alphanumeric, so `_boop` and `.foo` are
/// never taken as the start of an address.
pub fn user_part(opts: &Options) -> &'static str {
    if opts.gmail {
        USER_GMAIL
    } else if opts.utf8 {
        USER_UTF8
    } else {
        USER_ASCII
    }
}

/// First label of a domain host. Labels may contain runs of `-` and `_`.
pub fn host() -> &'static str {
    &HOST
}

/// Zero or more `.label` parts between the host and the TLD.
pub fn domain() -> &'static str {
    &DOMAIN
}

/// Final `.tld` of a domain host.
///
/// Strict mode accepts any run of two or more letters. Otherwise the known
/// TLDs are tried longest first, each escaped as a literal.
pub fn tld(strict: bool, tlds: &[String]) -> String {
    if strict {
        return format!(r"(?:\.(?:{TLD_CHAR}{{2,}}))");
    }

    let alternation = if tlds.is_empty() {
        NOTHING.to_string()
    } else {
        sort_by_length_desc(tlds)
            .iter()
            .map(|tld| regex::escape(tld))
            .collect::<Vec<_>>()
            .join("|")
    };
    format!(r"(?:\.(?:{alternation}))")
}

/// Dotted-quad IPv4 literal
pub fn ipv4() -> &'static str {
    &IPV4
}

/// IPv6 literal in full, compressed or IPv4-mapped form, with optional zone id
pub fn ipv6() -> &'static str {
    &IPV6
}
