// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Strider - stateful HTTP browsing
//!
//! A blocking HTTP session that behaves like a minimal browser: it keeps
//! the last response and its parsed HTML, records history snapshots, and
//! can fill in and submit the forms it finds.
//!
//! No JavaScript, no CSS, no rendering.
//!
//! ## Example
//!
//! ```rust,no_run
//! use strider::{Browser, FormData};
//!
//! fn main() -> strider::Result<()> {
//!     let mut browser = Browser::launch()?;
//!     browser.open("https://example.com/login")?;
//!
//!     if let Some(forms) = browser.forms() {
//!         println!("{} forms: {:?}", forms.len(), forms);
//!     }
//!
//!     let mut data = FormData::new();
//!     data.insert("username".to_string(), "alice".to_string());
//!     data.insert("password".to_string(), "hunter2".to_string());
//!     let response = browser.submit_form(0, &data)?;
//!
//!     println!("{} -> {}", response.url_str(), response.status_code());
//!     Ok(())
//! }
//! ```

pub mod browser;
pub mod dom;
pub mod error;
pub mod http;

// Browser
pub use browser::{merge, resolve_form_url, Browser, BrowserConfig, DebugReport, Snapshot};

// DOM
pub use dom::{Document, Element, Form, FormData};

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{
    parse_cookie_header, Cookie, CookieAttributes, CookieJar, HttpClient, HttpClientConfig,
    Request, Response, Transport,
};

/// Strider version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
