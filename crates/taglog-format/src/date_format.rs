//! Timestamp patterns.
//!
//! Patterns use `YYYY-MM-DD HH:mm:ss.SSS` style tokens. A pattern containing
//! `%` is passed to chrono untouched.

use std::fmt::Write;

use chrono::{DateTime, SecondsFormat, Utc};

// Longest tokens first so `YYYY` wins over `YY` and `SSS` over `ss`.
const TOKENS: [(&str, &str); 10] = [
    ("YYYY", "%Y"),
    ("SSS", "%3f"),
    ("YY", "%y"),
    ("MM", "%m"),
    ("DD", "%d"),
    ("HH", "%H"),
    ("hh", "%I"),
    ("mm", "%M"),
    ("ss", "%S"),
    ("A", "%p"),
];

/// Translate a token pattern into a chrono strftime pattern.
pub fn to_strftime(pattern: &str) -> String {
    if pattern.contains('%') {
        return pattern.to_string();
    }

    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;
    'outer: while !rest.is_empty() {
        for (token, strftime) in TOKENS {
            if let Some(stripped) = rest.strip_prefix(token) {
                out.push_str(strftime);
                rest = stripped;
                continue 'outer;
            }
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }
    out
}

/// Render `timestamp` with `pattern`, falling back to RFC 3339 when chrono
/// rejects the pattern.
pub fn format_timestamp(timestamp: &DateTime<Utc>, pattern: &str) -> String {
    let strftime = to_strftime(pattern);
    let mut rendered = String::new();
    if write!(rendered, "{}", timestamp.format(&strftime)).is_err() {
        return timestamp.to_rfc3339_opts(SecondsFormat::Millis, true);
    }
    rendered
}
