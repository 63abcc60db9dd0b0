// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Loose Set-Cookie header parsing for reporting
//!
//! Unlike [`Cookie::parse`](super::Cookie::parse), which reads one cookie
//! line for the jar, this splits a folded header (several cookies joined
//! with `", "`) into raw attribute maps. Nothing is validated or
//! normalised: keys keep their original case and values are kept verbatim.

use indexmap::IndexMap;

/// Attributes of one cookie, in header order (`name=value` first)
pub type CookieAttributes = IndexMap<String, String>;

/// Weekday prefixes of `Expires` dates. Their comma would otherwise split
/// a cookie in two.
const WEEKDAY_TOKENS: [&str; 7] = ["Mon, ", "Tue, ", "Wed, ", "Thu, ", "Fri, ", "Sat, ", "Sun, "];

/// Parse a (possibly folded) Set-Cookie header into one map per cookie
pub fn parse_cookie_header(header: &str) -> Vec<CookieAttributes> {
    let mut text = header.to_string();
    for token in WEEKDAY_TOKENS {
        text = text.replace(token, "");
    }

    text.split(", ")
        .map(|segment| {
            segment
                .split(';')
                .map(str::trim)
                .filter_map(|piece| piece.split_once('='))
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect()
        })
        .collect()
}
