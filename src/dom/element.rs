// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Element-specific DOM operations

use super::document::Document;
use super::node::{NodeData, NodeId, NodeType};

/// Borrowed view of an element node
#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
    doc: &'a Document,
    data: &'a NodeData,
    /// Node ID in the owning document
    pub id: NodeId,
}

impl<'a> Element<'a> {
    /// Create an element view; `None` if the node is not an element
    pub fn new(doc: &'a Document, id: NodeId) -> Option<Self> {
        let data = doc.node(id)?;
        if data.node_type == NodeType::Element {
            Some(Self { doc, data, id })
        } else {
            None
        }
    }

    /// Get the tag name (uppercase, like browsers)
    pub fn tag_name(&self) -> String {
        self.local_name().to_uppercase()
    }

    /// Get local name (lowercase)
    pub fn local_name(&self) -> &'a str {
        self.data.tag_name.as_deref().unwrap_or_default()
    }

    /// Get an attribute
    pub fn get_attribute(&self, name: &str) -> Option<&'a str> {
        self.data
            .attributes
            .get(&name.to_lowercase())
            .map(String::as_str)
    }

    /// Check if has attribute
    pub fn has_attribute(&self, name: &str) -> bool {
        self.data.attributes.contains_key(&name.to_lowercase())
    }

    /// Get text content
    pub fn text_content(&self) -> String {
        self.doc.collect_text(self.id)
    }

    /// Get parent element
    pub fn parent_element(&self) -> Option<Element<'a>> {
        self.data.parent.and_then(|id| Element::new(self.doc, id))
    }

    /// Child elements (element nodes only)
    pub fn children(&self) -> Vec<Element<'a>> {
        self.data
            .children
            .iter()
            .filter_map(|&id| Element::new(self.doc, id))
            .collect()
    }

    /// Descendant elements with any of the given tags, in document order
    pub fn descendants_by_tags(&self, tags: &[&str]) -> Vec<Element<'a>> {
        self.doc
            .descendants(self.id)
            .into_iter()
            .filter_map(|id| Element::new(self.doc, id))
            .filter(|e| tags.contains(&e.local_name()))
            .collect()
    }

    /// Check if checkbox/radio/option is checked or selected
    pub fn checked(&self) -> bool {
        self.has_attribute("checked") || self.has_attribute("selected")
    }

    /// Check if element is disabled
    pub fn disabled(&self) -> bool {
        self.has_attribute("disabled")
    }
}
