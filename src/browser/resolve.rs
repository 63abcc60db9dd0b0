// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Form action resolution

use url::{Position, Url};

/// Resolve a form's action against the page it was found on.
///
/// - an action with a scheme is returned unchanged;
/// - a root-relative action (path starting with `/`) is joined to the
///   page's `scheme://host[:port]`; its query and fragment are dropped;
/// - anything else, the empty action included, yields the page's origin
///   followed by the page path written twice. The action path is not used
///   in this case.
pub fn resolve_form_url(page_url: &Url, action_url: &str) -> String {
    if has_scheme(action_url) {
        return action_url.to_string();
    }

    let origin = &page_url[..Position::AfterPort];
    let action_path = path_of(action_url);

    if action_path.starts_with('/') {
        format!("{}{}", origin, action_path)
    } else {
        format!("{}{}{}", origin, page_url.path(), page_url.path())
    }
}

/// `scheme:` prefix check: a non-empty run of letters, digits, `+`, `-` or
/// `.` before the first colon. `host:8080` is a host and port, not a scheme;
/// `http:` always counts.
fn has_scheme(url: &str) -> bool {
    let Some((scheme, rest)) = url.split_once(':') else {
        return false;
    };
    if scheme == "http" {
        return true;
    }

    let is_port = !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit());
    !scheme.is_empty()
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        && !is_port
}

/// Path component of a scheme-less reference
fn path_of(reference: &str) -> &str {
    let end = reference.find(&['?', '#'][..]).unwrap_or(reference.len());
    let reference = &reference[..end];

    match reference.strip_prefix("//") {
        // Network-path reference: skip the authority
        Some(rest) => rest.find('/').map_or("", |i| &rest[i..]),
        None => reference,
    }
}
