// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client implementation

use std::sync::Arc;
use std::time::{Duration, Instant};

use bytes::Bytes;
use parking_lot::RwLock;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::redirect::Policy;
use reqwest::{Method, StatusCode};
use url::Url;

use super::cookie::CookieJar;
use super::request::Request;
use super::response::Response;
use super::transport::Transport;
use super::DEFAULT_USER_AGENT;
use crate::error::{Error, Result};

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// User agent string
    pub user_agent: String,
    /// Default timeout
    pub timeout: Duration,
    /// Maximum redirects to follow
    pub max_redirects: usize,
    /// Accept invalid certificates (dangerous!)
    pub accept_invalid_certs: bool,
    /// Headers sent with every request
    pub default_headers: HeaderMap,
    /// Enable cookie handling
    pub handle_cookies: bool,
    /// Proxy URL
    pub proxy: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            "accept",
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            ),
        );
        default_headers.insert(
            "accept-language",
            HeaderValue::from_static("en-US,en;q=0.5"),
        );

        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            max_redirects: 10,
            accept_invalid_certs: false,
            default_headers,
            handle_cookies: true,
            proxy: None,
        }
    }
}

/// Blocking HTTP session: persistent headers, cookies and auth across
/// requests.
///
/// Redirects are followed here rather than inside reqwest, so every hop
/// feeds the cookie jar and the next hop replays it.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    cookie_jar: CookieJar,
    /// Session headers, sent with every request unless the request overrides them
    headers: Arc<RwLock<HeaderMap>>,
    auth_tokens: Arc<RwLock<AuthTokens>>,
}

/// Authentication tokens storage
#[derive(Debug, Default)]
pub struct AuthTokens {
    /// Bearer token
    pub bearer: Option<String>,
    /// Basic auth (username, password)
    pub basic: Option<(String, String)>,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Self::build_client(&config)?;

        let mut headers = config.default_headers.clone();
        let user_agent = HeaderValue::try_from(config.user_agent.as_str())
            .map_err(|e| Error::Config(format!("Invalid user agent: {}", e)))?;
        headers.insert(reqwest::header::USER_AGENT, user_agent);

        Ok(Self {
            client,
            config,
            cookie_jar: CookieJar::new(),
            headers: Arc::new(RwLock::new(headers)),
            auth_tokens: Arc::new(RwLock::new(AuthTokens::default())),
        })
    }

    fn build_client(config: &HttpClientConfig) -> Result<Client> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .redirect(Policy::none())
            .danger_accept_invalid_certs(config.accept_invalid_certs);

        if let Some(ref proxy_url) = config.proxy {
            builder = builder.proxy(
                reqwest::Proxy::all(proxy_url)
                    .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?,
            );
        }

        Ok(builder.build()?)
    }

    /// Get the cookie jar
    pub fn cookie_jar(&self) -> &CookieJar {
        &self.cookie_jar
    }

    /// Set a session header
    pub fn set_header(&self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<()> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::Config(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::Config(format!("Invalid header value: {}", e)))?;
        self.headers.write().insert(name, value);
        Ok(())
    }

    /// Remove a session header
    pub fn remove_header(&self, name: &str) {
        self.headers.write().remove(name);
    }

    /// Current session headers
    pub fn headers(&self) -> HeaderMap {
        self.headers.read().clone()
    }

    /// Set bearer token
    pub fn set_bearer_token(&self, token: impl Into<String>) {
        self.auth_tokens.write().bearer = Some(token.into());
    }

    /// Set basic auth
    pub fn set_basic_auth(&self, username: impl Into<String>, password: impl Into<String>) {
        self.auth_tokens.write().basic = Some((username.into(), password.into()));
    }

    /// Clear all auth tokens
    pub fn clear_auth(&self) {
        let mut tokens = self.auth_tokens.write();
        tokens.bearer = None;
        tokens.basic = None;
    }

    fn authorization(&self) -> Option<String> {
        let tokens = self.auth_tokens.read();
        if let Some(ref bearer) = tokens.bearer {
            Some(format!("Bearer {}", bearer))
        } else {
            tokens.basic.as_ref().map(|(user, pass)| {
                let encoded = base64::Engine::encode(
                    &base64::engine::general_purpose::STANDARD,
                    format!("{}:{}", user, pass),
                );
                format!("Basic {}", encoded)
            })
        }
    }

    /// Execute a request, following redirects when the request asks for it
    pub fn execute(&self, request: Request) -> Result<Response> {
        let start = Instant::now();
        let Request {
            mut method,
            mut url,
            mut headers,
            mut body,
            timeout,
            follow_redirects,
        } = request;
        let requested_url = url.clone();
        let mut hops = 0;

        loop {
            let response = self.send_once(&method, &url, &headers, body.as_ref(), timeout)?;
            let status = response.status();

            if self.config.handle_cookies {
                for cookie in response.headers().get_all(reqwest::header::SET_COOKIE) {
                    if let Ok(cookie_str) = cookie.to_str() {
                        self.cookie_jar.add_from_header(cookie_str, &url);
                    }
                }
            }

            let location = if follow_redirects && status.is_redirection() {
                response
                    .headers()
                    .get(reqwest::header::LOCATION)
                    .and_then(|v| v.to_str().ok())
                    .map(String::from)
            } else {
                None
            };

            let Some(location) = location else {
                let redirected = url != requested_url;
                return self.finish(response, url, redirected, start);
            };

            if hops >= self.config.max_redirects {
                return Err(Error::TooManyRedirects(self.config.max_redirects));
            }
            hops += 1;

            let next = url.join(&location)?;
            tracing::debug!(status = %status, from = %url, to = %next, "Following redirect");

            if redirect_drops_body(status, &method) {
                method = Method::GET;
                body = None;
                headers.remove(reqwest::header::CONTENT_TYPE);
                headers.remove(reqwest::header::CONTENT_LENGTH);
            }
            url = next;
        }
    }

    /// Send a single request with session headers, auth and cookies applied
    fn send_once(
        &self,
        method: &Method,
        url: &Url,
        request_headers: &HeaderMap,
        body: Option<&Bytes>,
        timeout: Option<Duration>,
    ) -> Result<reqwest::blocking::Response> {
        let mut headers = self.headers.read().clone();
        if let Some(auth) = self.authorization() {
            if let Ok(value) = HeaderValue::try_from(auth) {
                headers.insert(reqwest::header::AUTHORIZATION, value);
            }
        }
        if self.config.handle_cookies {
            if let Some(cookie_header) = self.cookie_jar.get_cookie_header(url) {
                if let Ok(value) = HeaderValue::try_from(cookie_header) {
                    headers.insert(reqwest::header::COOKIE, value);
                }
            }
        }
        for (name, value) in request_headers.iter() {
            headers.insert(name.clone(), value.clone());
        }

        tracing::debug!(method = %method, url = %url, "Sending request");

        let mut builder = self
            .client
            .request(method.clone(), url.clone())
            .headers(headers);

        if let Some(body) = body {
            builder = builder.body(body.to_vec());
        }

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(builder.send()?)
    }

    fn finish(
        &self,
        response: reqwest::blocking::Response,
        final_url: Url,
        redirected: bool,
        start: Instant,
    ) -> Result<Response> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes()?;
        let response_time = start.elapsed().as_millis() as u64;

        tracing::debug!(
            url = %final_url,
            status = %status,
            time_ms = response_time,
            bytes = body.len(),
            "Response received"
        );

        Ok(Response::new(
            status,
            headers,
            body,
            final_url,
            redirected,
            response_time,
        ))
    }

    /// Get client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }
}

/// 302 and 303 switch any non-HEAD request to a bodiless GET, 301 only a POST
fn redirect_drops_body(status: StatusCode, method: &Method) -> bool {
    match status {
        StatusCode::SEE_OTHER | StatusCode::FOUND => *method != Method::HEAD,
        StatusCode::MOVED_PERMANENTLY => *method == Method::POST,
        _ => false,
    }
}

impl Transport for HttpClient {
    fn send(&self, request: Request) -> Result<Response> {
        self.execute(request)
    }

    fn cookie_count(&self) -> usize {
        self.cookie_jar.len()
    }
}
