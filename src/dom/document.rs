// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Document representation
//!
//! A parsed document owns all of its nodes in a flat arena, so cloning a
//! document yields a fully independent copy.

use url::Url;

use super::element::Element;
use super::form::{Form, FormData};
use super::node::{NodeData, NodeId, NodeType};

/// HTML Document representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Document URL
    pub url: Option<Url>,
    /// Document title
    title: String,
    /// Node arena, root at index 0
    nodes: Vec<NodeData>,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self {
            url: None,
            title: String::new(),
            nodes: vec![NodeData::document()],
        }
    }

    /// Create a document with URL
    pub fn with_url(url: Url) -> Self {
        Self {
            url: Some(url),
            ..Self::new()
        }
    }

    /// Get document title
    pub fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A document always holds its root node
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Get node data by ID
    pub fn node(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id.0)
    }

    /// Append a node under `parent` and return its ID
    pub(crate) fn append(&mut self, parent: NodeId, mut data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        data.parent = Some(parent);
        self.nodes.push(data);
        if let Some(parent) = self.nodes.get_mut(parent.0) {
            parent.children.push(id);
        }
        id
    }

    /// Element view for a node, if it is an element
    pub fn element(&self, id: NodeId) -> Option<Element<'_>> {
        Element::new(self, id)
    }

    /// All descendants of `id` in document (pre-)order, `id` excluded
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack: Vec<NodeId> = match self.node(id) {
            Some(node) => node.children.iter().rev().copied().collect(),
            None => return result,
        };

        while let Some(current) = stack.pop() {
            result.push(current);
            if let Some(node) = self.node(current) {
                stack.extend(node.children.iter().rev().copied());
            }
        }

        result
    }

    /// All elements with any of the given tags, in document order
    pub fn elements_by_tags(&self, tags: &[&str]) -> Vec<Element<'_>> {
        self.descendants(NodeId::ROOT)
            .into_iter()
            .filter_map(|id| self.element(id))
            .filter(|e| tags.contains(&e.local_name()))
            .collect()
    }

    /// Get elements by tag name
    pub fn get_elements_by_tag_name(&self, tag: &str) -> Vec<Element<'_>> {
        let tag = tag.to_lowercase();
        self.elements_by_tags(&[tag.as_str()])
    }

    /// Get element by ID attribute
    pub fn get_element_by_id(&self, id: &str) -> Option<Element<'_>> {
        self.descendants(NodeId::ROOT)
            .into_iter()
            .filter_map(|node| self.element(node))
            .find(|e| e.get_attribute("id") == Some(id))
    }

    /// Raw `href` of every `<a>` carrying one, in document order
    pub fn links(&self) -> Vec<String> {
        self.get_elements_by_tag_name("a")
            .into_iter()
            .filter_map(|a| a.get_attribute("href").map(String::from))
            .collect()
    }

    /// Text of every `<script>`, in document order. External scripts
    /// without inline code give an empty string.
    pub fn scripts(&self) -> Vec<String> {
        self.get_elements_by_tag_name("script")
            .into_iter()
            .map(|s| s.text_content())
            .collect()
    }

    /// All forms, in document order
    pub fn forms(&self) -> Vec<Form> {
        self.get_elements_by_tag_name("form")
            .into_iter()
            .map(|f| Form::from_element(&f))
            .collect()
    }

    /// Field defaults of every form, in document order
    pub fn form_fields(&self) -> Vec<FormData> {
        self.forms().into_iter().map(|f| f.fields).collect()
    }

    /// Get all text content
    pub fn text_content(&self) -> String {
        self.collect_text(NodeId::ROOT)
    }

    pub(crate) fn collect_text(&self, id: NodeId) -> String {
        self.descendants(id)
            .into_iter()
            .filter_map(|node| self.node(node))
            .filter(|node| node.node_type == NodeType::Text)
            .filter_map(|node| node.text_content.as_deref())
            .collect()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
