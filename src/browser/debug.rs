// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Per-response debug report

use std::fmt;

use serde::Serialize;

use crate::dom::Document;
use crate::http::{CookieAttributes, Response};

/// Summary of one response, emitted when debugging is enabled
#[derive(Debug, Clone, Serialize)]
pub struct DebugReport {
    pub url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub header_count: usize,
    pub header_names: Vec<String>,
    /// Cookies parsed from the Set-Cookie header
    pub cookies: Vec<CookieAttributes>,
    pub form_count: usize,
    pub link_count: usize,
    pub script_count: usize,
    /// First characters of the body
    pub body_preview: String,
    pub cookie_jar_size: usize,
}

impl DebugReport {
    /// Build a report for a response and its parsed document
    pub fn capture(
        response: &Response,
        document: &Document,
        cookies: &[CookieAttributes],
        num_chars: usize,
        cookie_jar_size: usize,
    ) -> Self {
        Self {
            url: response.url.to_string(),
            status: response.status_code(),
            content_type: response.content_type().map(String::from),
            header_count: response.headers.len(),
            header_names: response
                .headers
                .keys()
                .map(|name| name.as_str().to_string())
                .collect(),
            cookies: cookies.to_vec(),
            form_count: document.get_elements_by_tag_name("form").len(),
            link_count: document.links().len(),
            script_count: document.get_elements_by_tag_name("script").len(),
            body_preview: response.text_lossy().chars().take(num_chars).collect(),
            cookie_jar_size,
        }
    }

    /// Log the report through `tracing`
    pub fn emit(&self) {
        tracing::info!(
            target: "strider::debug",
            url = %self.url,
            status = self.status,
            content_type = self.content_type.as_deref().unwrap_or("-"),
            headers = self.header_count,
            cookies = self.cookies.len(),
            forms = self.form_count,
            links = self.link_count,
            scripts = self.script_count,
            cookie_jar = self.cookie_jar_size,
            "\n{}",
            self
        );
    }

    /// Export the report as JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for DebugReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "URL: {}", self.url)?;
        writeln!(f, "Status: {}", self.status)?;
        writeln!(
            f,
            "Content-Type: {}",
            self.content_type.as_deref().unwrap_or("-")
        )?;
        writeln!(
            f,
            "Headers ({}): {}",
            self.header_count,
            self.header_names.join(", ")
        )?;

        if !self.cookies.is_empty() {
            writeln!(f, "New cookies:")?;
            for cookie in &self.cookies {
                let pairs: Vec<String> = cookie
                    .iter()
                    .map(|(key, value)| format!("{}={}", key, value))
                    .collect();
                writeln!(f, "  {}", pairs.join("; "))?;
            }
        }

        writeln!(
            f,
            "Forms: {}  Links: {}  Scripts: {}",
            self.form_count, self.link_count, self.script_count
        )?;
        writeln!(f, "Body: {}", self.body_preview)?;
        write!(f, "Cookie jar: {} cookies", self.cookie_jar_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html_bytes;
    use crate::http::parse_cookie_header;
    use bytes::Bytes;
    use reqwest::header::{HeaderMap, HeaderValue};
    use reqwest::StatusCode;
    use url::Url;

    fn sample() -> DebugReport {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("text/html"));
        headers.insert("set-cookie", HeaderValue::from_static("sid=1; Path=/"));
        let body = Bytes::from_static(
            b"<html><body><form></form><a href='/x'>x</a><script>1</script></body></html>",
        );
        let url = Url::parse("https://example.com/").unwrap();
        let doc = parse_html_bytes(&body, Some(url.clone())).unwrap();
        let response = Response::new(StatusCode::OK, headers, body, url, false, 5);
        let cookies = parse_cookie_header("sid=1; Path=/");

        DebugReport::capture(&response, &doc, &cookies, 12, 1)
    }

    #[test]
    fn test_capture() {
        let report = sample();

        assert_eq!(report.status, 200);
        assert_eq!(report.content_type.as_deref(), Some("text/html"));
        assert_eq!(report.header_count, 2);
        assert_eq!(report.header_names, vec!["content-type", "set-cookie"]);
        assert_eq!(report.form_count, 1);
        assert_eq!(report.link_count, 1);
        assert_eq!(report.script_count, 1);
        assert_eq!(report.body_preview, "<html><body>");
        assert_eq!(report.cookie_jar_size, 1);
    }

    #[test]
    fn test_display_and_json() {
        let report = sample();

        let text = report.to_string();
        assert!(text.contains("Status: 200"));
        assert!(text.contains("  sid=1; Path=/"));
        assert!(text.ends_with("Cookie jar: 1 cookies"));

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["cookies"][0]["sid"], "1");
        assert_eq!(json["form_count"], 1);
    }
}
