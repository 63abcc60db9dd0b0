// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTML parser using html5ever

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use url::Url;

use super::document::Document;
use super::node::{NodeData, NodeId};
use crate::error::{Error, Result};

/// Parse HTML string into a Document
pub fn parse_html(html: &str) -> Result<Document> {
    parse_html_bytes(html.as_bytes(), None)
}

/// Parse HTML string with a document URL
pub fn parse_html_with_url(html: &str, url: Option<Url>) -> Result<Document> {
    parse_html_bytes(html.as_bytes(), url)
}

/// Parse a raw response body. Invalid UTF-8 is replaced, never rejected.
pub fn parse_html_bytes(mut body: &[u8], url: Option<Url>) -> Result<Document> {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: false,
            ..Default::default()
        },
        ..Default::default()
    };

    let dom = parse_document(RcDom::default(), opts)
        .from_utf8()
        .read_from(&mut body)
        .map_err(|e| Error::HtmlParse(e.to_string()))?;

    let mut doc = match url {
        Some(u) => Document::with_url(u),
        None => Document::new(),
    };

    DomConverter::new(&mut doc).convert(&dom.document);

    let title = doc
        .get_elements_by_tag_name("title")
        .first()
        .map(|t| t.text_content());
    if let Some(title) = title {
        doc.set_title(title);
    }

    Ok(doc)
}

/// Copies the html5ever tree into the document arena
struct DomConverter<'a> {
    doc: &'a mut Document,
}

impl<'a> DomConverter<'a> {
    fn new(doc: &'a mut Document) -> Self {
        Self { doc }
    }

    fn convert(mut self, handle: &Handle) {
        for child in handle.children.borrow().iter() {
            self.convert_node(child, NodeId::ROOT);
        }
    }

    fn convert_node(&mut self, handle: &Handle, parent_id: NodeId) {
        let data = match handle.data {
            RcNodeData::Document | RcNodeData::ProcessingInstruction { .. } => return,
            RcNodeData::Doctype { .. } => NodeData::doctype(),
            RcNodeData::Text { ref contents } => NodeData::text(contents.borrow().to_string()),
            RcNodeData::Comment { ref contents } => NodeData::comment(contents.to_string()),
            RcNodeData::Element {
                ref name,
                ref attrs,
                ..
            } => {
                let mut data = NodeData::element(name.local.to_string());
                for attr in attrs.borrow().iter() {
                    // First occurrence of a duplicated attribute wins
                    data.attributes
                        .entry(attr.name.local.to_string().to_lowercase())
                        .or_insert_with(|| attr.value.to_string());
                }
                data
            }
        };

        let node_id = self.doc.append(parent_id, data);

        for child in handle.children.borrow().iter() {
            self.convert_node(child, node_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_attributes() {
        let doc = parse_html("<div id=\"test\" class=\"foo bar\">content</div>").unwrap();
        let div = doc.get_element_by_id("test").unwrap();
        assert_eq!(div.get_attribute("class"), Some("foo bar"));
        assert_eq!(div.text_content(), "content");
    }

    #[test]
    fn test_parse_complex_html() {
        let html = r#"
            <!DOCTYPE html>
            <html>
            <head>
                <title>Test Page</title>
            </head>
            <body>
                <div id="container">
                    <h1>Hello World</h1>
                    <a href="https://example.com">Link</a>
                </div>
            </body>
            </html>
        "#;
        let url = Url::parse("https://example.com/index.html").unwrap();
        let doc = parse_html_with_url(html, Some(url.clone())).unwrap();

        assert_eq!(doc.title(), "Test Page");
        assert_eq!(doc.url, Some(url));
        assert_eq!(doc.get_elements_by_tag_name("h1")[0].text_content(), "Hello World");
        assert_eq!(doc.links(), vec!["https://example.com"]);
    }

    #[test]
    fn test_parse_invalid_utf8_is_lossy() {
        let doc = parse_html_bytes(b"<p>caf\xe9</p>", None).unwrap();
        assert_eq!(doc.get_elements_by_tag_name("p")[0].text_content(), "caf\u{fffd}");
    }

    #[test]
    fn test_parse_empty_body() {
        let doc = parse_html_bytes(b"", None).unwrap();
        assert!(doc.forms().is_empty());
        assert!(doc.links().is_empty());
        assert!(doc.scripts().is_empty());
    }
}
