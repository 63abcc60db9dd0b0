// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP layer for Strider
//!
//! A blocking HTTP session with its own cookie jar and session headers,
//! plus the request/response types the browser works with.

mod client;
mod cookie;
mod request;
mod response;
mod set_cookie;
mod transport;

pub use client::{AuthTokens, HttpClient, HttpClientConfig};
pub use cookie::{Cookie, CookieJar};
pub use request::Request;
pub use response::Response;
pub use set_cookie::{parse_cookie_header, CookieAttributes};
pub use transport::Transport;

pub use reqwest::{Method, StatusCode};

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
