// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Browser implementation

use bytes::Bytes;

use super::config::BrowserConfig;
use super::debug::DebugReport;
use super::merge::merge;
use super::resolve::resolve_form_url;
use crate::dom::{parse_html_bytes, Document, Form, FormData};
use crate::error::{Error, Result};
use crate::http::{
    parse_cookie_header, CookieAttributes, CookieJar, HttpClient, Request, Response, Transport,
};

/// What the browser is currently looking at
#[derive(Debug, Clone, Default)]
struct PageState {
    response: Option<Response>,
    html: Option<Document>,
    new_cookie: Vec<CookieAttributes>,
}

/// Browser state captured before a request.
///
/// Owns copies of everything it holds, including the history recorded
/// up to that point. The HTTP session is not part of a snapshot.
#[derive(Debug, Clone)]
pub struct Snapshot {
    state: PageState,
    allow_redirects: bool,
    debug_enable: bool,
    debug_num_chars: usize,
    history: Vec<Snapshot>,
}

impl Snapshot {
    /// Response held at capture time
    pub fn response(&self) -> Option<&Response> {
        self.state.response.as_ref()
    }

    /// Document held at capture time
    pub fn html(&self) -> Option<&Document> {
        self.state.html.as_ref()
    }

    /// Cookies parsed from the response held at capture time
    pub fn new_cookie(&self) -> &[CookieAttributes] {
        &self.state.new_cookie
    }

    /// History as it was at capture time
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    pub fn allow_redirects(&self) -> bool {
        self.allow_redirects
    }

    pub fn debug_enable(&self) -> bool {
        self.debug_enable
    }

    pub fn debug_num_chars(&self) -> usize {
        self.debug_num_chars
    }
}

/// Stateful browser over a blocking HTTP session.
///
/// Every request records a [`Snapshot`] of the previous state in the
/// history, then replaces the current response and its parsed document.
pub struct Browser<T: Transport = HttpClient> {
    transport: T,
    config: BrowserConfig,
    state: PageState,
    history: Vec<Snapshot>,
}

impl Browser<HttpClient> {
    /// Create a browser with its own HTTP session
    pub fn new(config: BrowserConfig) -> Result<Self> {
        let client = HttpClient::with_config(config.http_config()?)?;
        Ok(Self::with_transport(client, config))
    }

    /// Create browser with default config
    pub fn launch() -> Result<Self> {
        Self::new(BrowserConfig::default())
    }

    /// The HTTP session
    pub fn session(&self) -> &HttpClient {
        &self.transport
    }

    /// Cookies held by the session
    pub fn cookies(&self) -> &CookieJar {
        self.transport.cookie_jar()
    }

    /// Set a header sent with every following request
    pub fn set_header(&self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<()> {
        self.transport.set_header(name, value)
    }
}

impl<T: Transport> Browser<T> {
    /// Create a browser over any transport
    pub fn with_transport(transport: T, config: BrowserConfig) -> Self {
        Self {
            transport,
            config,
            state: PageState::default(),
            history: Vec::new(),
        }
    }

    /// Get the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Get browser config
    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    /// Whether requests follow redirects
    pub fn allow_redirects(&self) -> bool {
        self.config.allow_redirects
    }

    pub fn set_allow_redirects(&mut self, allow: bool) {
        self.config.allow_redirects = allow;
    }

    pub fn set_debug(&mut self, enabled: bool) {
        self.config.debug_enable = enabled;
    }

    pub fn set_debug_num_chars(&mut self, num_chars: usize) {
        self.config.debug_num_chars = num_chars;
    }

    /// Most recent response
    pub fn response(&self) -> Option<&Response> {
        self.state.response.as_ref()
    }

    /// Parsed document of the most recent response
    pub fn html(&self) -> Option<&Document> {
        self.state.html.as_ref()
    }

    /// Cookies parsed from the most recent response's Set-Cookie header
    pub fn new_cookie(&self) -> &[CookieAttributes] {
        &self.state.new_cookie
    }

    /// Recorded snapshots, oldest first
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state.clone(),
            allow_redirects: self.config.allow_redirects,
            debug_enable: self.config.debug_enable,
            debug_num_chars: self.config.debug_num_chars,
            history: self.history.clone(),
        }
    }

    /// Record the current state in the history
    pub fn save_state(&mut self) {
        let snapshot = self.snapshot();
        tracing::trace!(entries = self.history.len() + 1, "Saved browser state");
        self.history.push(snapshot);
    }

    /// Forget all recorded snapshots. The current page stays loaded.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn update_state(&mut self, response: Response) -> Result<()> {
        let html = parse_html_bytes(&response.body, Some(response.url.clone()))?;
        let new_cookie = response
            .set_cookie_header()
            .map(|header| parse_cookie_header(&header))
            .unwrap_or_default();

        if self.config.debug_enable {
            DebugReport::capture(
                &response,
                &html,
                &new_cookie,
                self.config.debug_num_chars,
                self.transport.cookie_count(),
            )
            .emit();
        }

        self.state = PageState {
            response: Some(response),
            html: Some(html),
            new_cookie,
        };
        Ok(())
    }

    /// Send a request and load its response.
    ///
    /// Redirect handling always follows the browser setting, whatever the
    /// request says. Transport errors are returned as-is; the snapshot taken
    /// before sending stays in the history.
    pub fn request(&mut self, request: Request) -> Result<Response> {
        self.dispatch(Ok(request))
    }

    /// Snapshot first, so a request that could not even be built still
    /// leaves a history entry.
    fn dispatch(&mut self, request: Result<Request>) -> Result<Response> {
        self.save_state();

        let request = request?.follow_redirects(self.config.allow_redirects);
        let response = self.transport.send(request).map_err(|err| {
            tracing::debug!(network = err.is_network(), error = %err, "Request failed");
            err
        })?;

        self.update_state(response.clone())?;
        Ok(response)
    }

    /// GET a URL
    pub fn get(&mut self, url: &str) -> Result<Response> {
        self.dispatch(Request::get(url))
    }

    /// Same as [`get`](Self::get)
    pub fn open(&mut self, url: &str) -> Result<Response> {
        self.get(url)
    }

    /// GET a URL with query parameters
    pub fn get_query(&mut self, url: &str, params: &FormData) -> Result<Response> {
        self.dispatch(Request::get(url).map(|r| r.query(params)))
    }

    /// POST a raw body
    pub fn post(&mut self, url: &str, body: impl Into<Bytes>) -> Result<Response> {
        self.dispatch(Request::post(url).map(|r| r.body(body)))
    }

    /// POST an urlencoded form
    pub fn post_form(&mut self, url: &str, data: &FormData) -> Result<Response> {
        self.dispatch(Request::post(url).map(|r| r.form(data)))
    }

    /// PUT a raw body
    pub fn put(&mut self, url: &str, body: impl Into<Bytes>) -> Result<Response> {
        self.dispatch(Request::put(url).map(|r| r.body(body)))
    }

    /// PATCH a raw body
    pub fn patch(&mut self, url: &str, body: impl Into<Bytes>) -> Result<Response> {
        self.dispatch(Request::patch(url).map(|r| r.body(body)))
    }

    /// DELETE a URL
    pub fn delete(&mut self, url: &str) -> Result<Response> {
        self.dispatch(Request::delete(url))
    }

    /// Default field values of every form on the page
    pub fn forms(&self) -> Option<Vec<FormData>> {
        self.state.html.as_ref().map(Document::form_fields)
    }

    /// Forms on the page with their action and method
    pub fn page_forms(&self) -> Option<Vec<Form>> {
        self.state.html.as_ref().map(Document::forms)
    }

    /// Raw `href` values of the page's links
    pub fn links(&self) -> Option<Vec<String>> {
        self.state.html.as_ref().map(Document::links)
    }

    /// Inline code of the page's scripts
    pub fn scripts(&self) -> Option<Vec<String>> {
        self.state.html.as_ref().map(Document::scripts)
    }

    /// Submit form `form_index` of the current page.
    ///
    /// `post_data` overrides the form's default values. The form's method
    /// picks between a GET with query parameters and an urlencoded POST.
    pub fn submit_form(&mut self, form_index: usize, post_data: &FormData) -> Result<Response> {
        let (html, response) = match (&self.state.html, &self.state.response) {
            (Some(html), Some(response)) => (html, response),
            _ => {
                return Err(Error::invalid_state(
                    "No page loaded in browser, open a URL first",
                ))
            }
        };

        let forms = html.forms();
        if forms.is_empty() {
            return Err(Error::invalid_state("No forms present in current page"));
        }
        let form = forms
            .get(form_index)
            .ok_or_else(|| Error::index_out_of_range(form_index, forms.len()))?;

        let data = merge(&form.fields, post_data);
        let url = resolve_form_url(&response.url, form.action_or_empty());

        tracing::debug!(
            form = form_index,
            method = %form.method,
            url = %url,
            fields = data.len(),
            "Submitting form"
        );

        match form.method.as_str() {
            "GET" => self.get_query(&url, &data),
            "POST" => self.post_form(&url, &data),
            other => Err(Error::unsupported_method(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use indexmap::indexmap;
    use reqwest::header::{HeaderMap, HeaderValue};
    use reqwest::{Method, StatusCode};
    use url::Url;

    use super::*;

    /// Replays queued responses and records what was sent
    #[derive(Default)]
    struct ScriptedTransport {
        responses: RefCell<VecDeque<Result<Response>>>,
        sent: RefCell<Vec<Request>>,
    }

    impl ScriptedTransport {
        fn page(self, url: &str, body: &'static str) -> Self {
            self.page_with_cookie(url, body, None)
        }

        fn page_with_cookie(self, url: &str, body: &'static str, cookie: Option<&'static str>) -> Self {
            let mut headers = HeaderMap::new();
            headers.insert("content-type", HeaderValue::from_static("text/html"));
            if let Some(cookie) = cookie {
                headers.insert("set-cookie", HeaderValue::from_static(cookie));
            }
            let response = Response::new(
                StatusCode::OK,
                headers,
                Bytes::from_static(body.as_bytes()),
                Url::parse(url).unwrap(),
                false,
                1,
            );
            self.responses.borrow_mut().push_back(Ok(response));
            self
        }

        fn failure(self, message: &str) -> Self {
            self.responses.borrow_mut().push_back(Err(Error::other(message)));
            self
        }

        fn last_sent(&self) -> Request {
            self.sent.borrow().last().cloned().unwrap()
        }
    }

    impl Transport for ScriptedTransport {
        fn send(&self, request: Request) -> Result<Response> {
            self.sent.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(Error::other("no scripted response")))
        }

        fn cookie_count(&self) -> usize {
            7
        }
    }

    const LOGIN_PAGE: &str = r#"
        <html><body>
            <form id="search" action="/search" method="get">
                <input name="q" value="rust">
                <input name="lang" value="en">
            </form>
            <form id="login" action="https://auth.example.com/session" method="post">
                <input type="hidden" name="csrf" value="t0k3n">
                <input name="user" value="">
            </form>
            <form action="/profile" method="put"><input name="bio" value="hi"></form>
            <a href="/about">About</a><a href="">Self</a><a href="/about">Again</a>
            <script src="/app.js"></script><script>init();</script>
        </body></html>
    "#;

    fn browser(transport: &ScriptedTransport) -> Browser<&ScriptedTransport> {
        Browser::with_transport(transport, BrowserConfig::default())
    }

    #[test]
    fn test_accessors_before_first_request() {
        let transport = ScriptedTransport::default();
        let browser = browser(&transport);

        assert!(browser.response().is_none());
        assert!(browser.html().is_none());
        assert!(browser.forms().is_none());
        assert!(browser.links().is_none());
        assert!(browser.scripts().is_none());
        assert!(browser.new_cookie().is_empty());
        assert!(browser.history().is_empty());
    }

    #[test]
    fn test_get_loads_page() {
        let transport = ScriptedTransport::default().page("https://example.com/login", LOGIN_PAGE);
        let mut browser = browser(&transport);

        let response = browser.open("https://example.com/login").unwrap();

        assert_eq!(response.status_code(), 200);
        assert_eq!(browser.response().unwrap().url_str(), "https://example.com/login");
        assert_eq!(browser.forms().unwrap().len(), 3);
        assert_eq!(browser.forms().unwrap()[0]["q"], "rust");
        assert_eq!(browser.links().unwrap(), vec!["/about", "", "/about"]);
        assert_eq!(browser.scripts().unwrap(), vec!["", "init();"]);
        assert_eq!(transport.last_sent().method, Method::GET);
    }

    #[test]
    fn test_allow_redirects_overrides_request() {
        let transport = ScriptedTransport::default()
            .page("https://example.com/", "")
            .page("https://example.com/", "");
        let mut browser = browser(&transport);

        browser.set_allow_redirects(false);
        browser
            .request(Request::get("https://example.com/").unwrap().follow_redirects(true))
            .unwrap();
        assert!(!transport.last_sent().follow_redirects);

        browser.set_allow_redirects(true);
        browser
            .request(Request::get("https://example.com/").unwrap().follow_redirects(false))
            .unwrap();
        assert!(transport.last_sent().follow_redirects);
    }

    #[test]
    fn test_verbs_use_their_methods() {
        let transport = ScriptedTransport::default()
            .page("https://example.com/r", "")
            .page("https://example.com/r", "")
            .page("https://example.com/r", "")
            .page("https://example.com/r", "");
        let mut browser = browser(&transport);

        browser.post("https://example.com/r", "a=1").unwrap();
        assert_eq!(transport.last_sent().method, Method::POST);
        assert_eq!(transport.last_sent().body.as_deref(), Some(&b"a=1"[..]));

        browser.put("https://example.com/r", "{}").unwrap();
        assert_eq!(transport.last_sent().method, Method::PUT);

        browser.patch("https://example.com/r", "{}").unwrap();
        assert_eq!(transport.last_sent().method, Method::PATCH);

        browser.delete("https://example.com/r").unwrap();
        assert_eq!(transport.last_sent().method, Method::DELETE);
        assert_eq!(browser.history().len(), 4);
    }

    #[test]
    fn test_history_snapshots_precede_each_call() {
        let transport = ScriptedTransport::default()
            .page("https://example.com/one", "<a href='/1'>1</a>")
            .page("https://example.com/two", "<a href='/2'>2</a>")
            .page("https://example.com/three", "<a href='/3'>3</a>");
        let mut browser = browser(&transport);

        browser.get("https://example.com/one").unwrap();
        browser.get("https://example.com/two").unwrap();
        browser.get("https://example.com/three").unwrap();

        let history = browser.history();
        assert_eq!(history.len(), 3);
        assert!(history[0].response().is_none());
        assert!(history[0].html().is_none());
        assert_eq!(history[1].response().unwrap().url_str(), "https://example.com/one");
        assert_eq!(history[2].html().unwrap().links(), vec!["/2"]);

        // Snapshots nest the history recorded before them
        assert_eq!(history[2].history().len(), 2);
        assert_eq!(
            history[2].history()[1].response().unwrap().url_str(),
            "https://example.com/one"
        );
    }

    #[test]
    fn test_history_unaffected_by_later_changes() {
        let transport = ScriptedTransport::default()
            .page("https://example.com/one", "<a href='/1'>1</a>")
            .page("https://example.com/two", "<a href='/2'>2</a>");
        let mut browser = browser(&transport);

        browser.get("https://example.com/one").unwrap();
        browser.get("https://example.com/two").unwrap();
        let before = browser.history()[1].html().cloned();

        browser.set_debug_num_chars(5);
        browser.set_allow_redirects(false);
        browser.save_state();

        let snapshot = &browser.history()[1];
        assert_eq!(snapshot.html().cloned(), before);
        assert_eq!(snapshot.response().unwrap().url_str(), "https://example.com/one");
        assert!(snapshot.allow_redirects());
        assert_eq!(snapshot.debug_num_chars(), 120);
        assert!(!browser.history()[2].allow_redirects());
    }

    #[test]
    fn test_clear_history_keeps_page() {
        let transport = ScriptedTransport::default().page("https://example.com/", LOGIN_PAGE);
        let mut browser = browser(&transport);

        browser.get("https://example.com/").unwrap();
        browser.save_state();
        assert_eq!(browser.history().len(), 2);

        browser.clear_history();
        assert!(browser.history().is_empty());
        assert!(browser.response().is_some());
        assert_eq!(browser.forms().unwrap().len(), 3);
    }

    #[test]
    fn test_transport_error_propagates() {
        let transport = ScriptedTransport::default()
            .page("https://example.com/", LOGIN_PAGE)
            .failure("connection reset");
        let mut browser = browser(&transport);

        browser.get("https://example.com/").unwrap();
        let err = browser.get("https://example.com/next").unwrap_err();

        assert_eq!(err.to_string(), "connection reset");
        assert_eq!(browser.history().len(), 2);
        assert_eq!(browser.response().unwrap().url_str(), "https://example.com/");
    }

    #[test]
    fn test_invalid_url_still_snapshots() {
        let transport = ScriptedTransport::default().page("https://example.com/", LOGIN_PAGE);
        let mut browser = browser(&transport);

        assert!(matches!(browser.get("example.com/no-scheme"), Err(Error::Url(_))));
        assert_eq!(browser.history().len(), 1);
        assert!(browser.history()[0].response().is_none());
        assert!(transport.sent.borrow().is_empty());

        browser.get("https://example.com/").unwrap();
        assert!(matches!(browser.post("::", "a=1"), Err(Error::Url(_))));
        assert_eq!(browser.history().len(), 3);
        assert!(browser.response().is_some());
    }

    #[test]
    fn test_new_cookie_tracks_latest_response() {
        let transport = ScriptedTransport::default()
            .page_with_cookie(
                "https://example.com/",
                "",
                Some("sid=abc123; Path=/; Expires=Wed, 09 Jun 2027 10:18:14 GMT"),
            )
            .page("https://example.com/next", "");
        let mut browser = browser(&transport);

        browser.get("https://example.com/").unwrap();
        assert_eq!(browser.new_cookie().len(), 1);
        assert_eq!(browser.new_cookie()[0]["sid"], "abc123");
        assert_eq!(browser.new_cookie()[0]["Expires"], "09 Jun 2027 10:18:14 GMT");

        browser.get("https://example.com/next").unwrap();
        assert!(browser.new_cookie().is_empty());
        assert_eq!(browser.history()[1].new_cookie().len(), 1);
    }

    #[test]
    fn test_debug_report_does_not_change_state() {
        let transport = ScriptedTransport::default().page("https://example.com/", LOGIN_PAGE);
        let mut browser =
            Browser::with_transport(&transport, BrowserConfig::new().debug(true).debug_num_chars(10));

        browser.get("https://example.com/").unwrap();
        assert_eq!(browser.forms().unwrap().len(), 3);
        assert_eq!(browser.transport().cookie_count(), 7);
    }

    #[test]
    fn test_submit_get_form_merges_into_query() {
        let transport = ScriptedTransport::default()
            .page("https://example.com/home", LOGIN_PAGE)
            .page("https://example.com/search", "");
        let mut browser = browser(&transport);

        browser.get("https://example.com/home").unwrap();
        browser
            .submit_form(0, &indexmap! {"q".to_string() => "tokio".to_string()})
            .unwrap();

        let sent = transport.last_sent();
        assert_eq!(sent.method, Method::GET);
        assert_eq!(sent.url_str(), "https://example.com/search?q=tokio&lang=en");
        assert!(sent.body.is_none());
        assert_eq!(browser.history().len(), 2);
    }

    #[test]
    fn test_submit_post_form_merges_into_body() {
        let transport = ScriptedTransport::default()
            .page("https://example.com/home", LOGIN_PAGE)
            .page("https://auth.example.com/session", "");
        let mut browser = browser(&transport);

        browser.get("https://example.com/home").unwrap();
        let data = indexmap! {
            "user".to_string() => "alice".to_string(),
            "remember".to_string() => "1".to_string(),
        };
        browser.submit_form(1, &data).unwrap();

        let sent = transport.last_sent();
        assert_eq!(sent.method, Method::POST);
        assert_eq!(sent.url_str(), "https://auth.example.com/session");
        assert_eq!(
            sent.body.as_deref(),
            Some(&b"csrf=t0k3n&user=alice&remember=1"[..])
        );
    }

    #[test]
    fn test_submit_without_page() {
        let transport = ScriptedTransport::default();
        let mut browser = browser(&transport);

        let err = browser.submit_form(0, &FormData::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidState(_)));
        assert!(browser.history().is_empty());
    }

    #[test]
    fn test_submit_without_forms() {
        let transport = ScriptedTransport::default().page("https://example.com/", "<p>none</p>");
        let mut browser = browser(&transport);
        browser.get("https://example.com/").unwrap();

        let err = browser.submit_form(0, &FormData::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidState(_)));
    }

    #[test]
    fn test_submit_index_out_of_range() {
        let transport = ScriptedTransport::default().page("https://example.com/", LOGIN_PAGE);
        let mut browser = browser(&transport);
        browser.get("https://example.com/").unwrap();

        let err = browser.submit_form(3, &FormData::new()).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 3, count: 3 }));
        assert!(err.to_string().contains("3 forms available"));
        assert_eq!(browser.history().len(), 1);
    }

    #[test]
    fn test_submit_unsupported_method() {
        let transport = ScriptedTransport::default().page("https://example.com/", LOGIN_PAGE);
        let mut browser = browser(&transport);
        browser.get("https://example.com/").unwrap();

        let err = browser.submit_form(2, &FormData::new()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedMethod(ref m) if m == "PUT"));
        assert_eq!(transport.sent.borrow().len(), 1);
    }
}
