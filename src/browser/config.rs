// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Browser configuration

use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};

use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, DEFAULT_USER_AGENT};

/// Default number of body characters shown in debug reports
pub const DEFAULT_DEBUG_NUM_CHARS: usize = 120;

/// Browser configuration
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// User agent string
    pub user_agent: String,
    /// Default timeout for requests
    pub timeout: Duration,
    /// Maximum redirects followed when redirects are allowed
    pub max_redirects: usize,
    /// Accept invalid TLS certificates
    pub ignore_https_errors: bool,
    /// Proxy URL
    pub proxy: Option<String>,
    /// Session headers sent with every request
    pub default_headers: Vec<(String, String)>,
    /// Follow redirects on every call, whatever the request asks for
    pub allow_redirects: bool,
    /// Emit a debug report after every call
    pub debug_enable: bool,
    /// Body characters included in the debug report
    pub debug_num_chars: usize,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            max_redirects: 10,
            ignore_https_errors: false,
            proxy: None,
            default_headers: vec![],
            allow_redirects: true,
            debug_enable: false,
            debug_num_chars: DEFAULT_DEBUG_NUM_CHARS,
        }
    }
}

impl BrowserConfig {
    /// Create a new browser config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the redirect limit
    pub fn max_redirects(mut self, max: usize) -> Self {
        self.max_redirects = max;
        self
    }

    /// Ignore HTTPS errors
    pub fn ignore_https_errors(mut self, ignore: bool) -> Self {
        self.ignore_https_errors = ignore;
        self
    }

    /// Set proxy
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Add default header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Follow or return redirects
    pub fn allow_redirects(mut self, allow: bool) -> Self {
        self.allow_redirects = allow;
        self
    }

    /// Enable/disable debug reports
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug_enable = enabled;
        self
    }

    /// Set how much of the body a debug report shows
    pub fn debug_num_chars(mut self, num_chars: usize) -> Self {
        self.debug_num_chars = num_chars;
        self
    }

    /// Transport settings for the HTTP client
    pub fn http_config(&self) -> Result<HttpClientConfig> {
        let mut http = HttpClientConfig {
            user_agent: self.user_agent.clone(),
            timeout: self.timeout,
            max_redirects: self.max_redirects,
            accept_invalid_certs: self.ignore_https_errors,
            proxy: self.proxy.clone(),
            ..Default::default()
        };

        for (name, value) in &self.default_headers {
            let name = HeaderName::try_from(name.as_str())
                .map_err(|e| Error::Config(format!("Invalid header name '{}': {}", name, e)))?;
            let value = HeaderValue::try_from(value.as_str())
                .map_err(|e| Error::Config(format!("Invalid value for header {}: {}", name, e)))?;
            http.default_headers.insert(name, value);
        }

        Ok(http)
    }
}
