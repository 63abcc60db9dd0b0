// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for Strider
//!
//! Browser state errors (`InvalidState`, `IndexOutOfRange`,
//! `UnsupportedMethod`) are raised by the browser itself. Everything else
//! comes straight from the HTTP client or the HTML parser and is passed
//! through unchanged.

use thiserror::Error;

/// Result type alias for Strider operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Strider
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// HTML parsing failed
    #[error("HTML parsing error: {0}")]
    HtmlParse(String),

    /// Operation needs a loaded page (or a form on it)
    #[error("Invalid browser state: {0}")]
    InvalidState(String),

    /// Form index outside the forms found on the page
    #[error("Form index {index} out of range, {count} forms available")]
    IndexOutOfRange { index: usize, count: usize },

    /// Form declares a method other than GET or POST
    #[error("Form method {0} found, expected GET or POST")]
    UnsupportedMethod(String),

    /// Redirect chain longer than the configured limit
    #[error("Too many redirects (limit {0})")]
    TooManyRedirects(usize),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid state error
    pub fn invalid_state<S: Into<String>>(msg: S) -> Self {
        Error::InvalidState(msg.into())
    }

    /// Create an index error for a form lookup
    pub fn index_out_of_range(index: usize, count: usize) -> Self {
        Error::IndexOutOfRange { index, count }
    }

    /// Create an unsupported method error
    pub fn unsupported_method<S: Into<String>>(method: S) -> Self {
        Error::UnsupportedMethod(method.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this error comes from the browser state checks
    pub fn is_state_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidState(_) | Error::IndexOutOfRange { .. } | Error::UnsupportedMethod(_)
        )
    }

    /// Check if this is a network error
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Http(_))
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}
