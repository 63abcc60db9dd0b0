// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! DOM Node types

use std::collections::HashMap;

/// Index of a node in its document's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The document root is always the first node
    pub const ROOT: NodeId = NodeId(0);

    /// Get the raw index
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Node type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Document node
    Document,
    /// Element node (like <div>, <p>, etc.)
    Element,
    /// Text node
    Text,
    /// Comment node
    Comment,
    /// Document type node (<!DOCTYPE>)
    DocumentType,
}

/// Node data stored in the arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// Node type
    pub node_type: NodeType,
    /// Tag name, lowercase (elements only)
    pub tag_name: Option<String>,
    /// Text content (text/comment nodes only)
    pub text_content: Option<String>,
    /// Attributes, lowercase names (elements only)
    pub attributes: HashMap<String, String>,
    /// Parent node
    pub parent: Option<NodeId>,
    /// Children in document order
    pub children: Vec<NodeId>,
}

impl NodeData {
    fn empty(node_type: NodeType) -> Self {
        Self {
            node_type,
            tag_name: None,
            text_content: None,
            attributes: HashMap::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Create a new element node data
    pub fn element(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: Some(tag_name.into().to_lowercase()),
            ..Self::empty(NodeType::Element)
        }
    }

    /// Create a new text node data
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text_content: Some(content.into()),
            ..Self::empty(NodeType::Text)
        }
    }

    /// Create a new comment node data
    pub fn comment(content: impl Into<String>) -> Self {
        Self {
            text_content: Some(content.into()),
            ..Self::empty(NodeType::Comment)
        }
    }

    /// Create a doctype node data
    pub fn doctype() -> Self {
        Self::empty(NodeType::DocumentType)
    }

    /// Create a new document node data
    pub fn document() -> Self {
        Self::empty(NodeType::Document)
    }

    /// Check if this is an element with the given (lowercase) tag
    pub fn is_tag(&self, tag: &str) -> bool {
        self.node_type == NodeType::Element && self.tag_name.as_deref() == Some(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_data() {
        let element = NodeData::element("DIV");
        assert_eq!(element.tag_name, Some("div".to_string()));
        assert_eq!(element.node_type, NodeType::Element);
        assert!(element.is_tag("div"));

        let text = NodeData::text("Hello");
        assert_eq!(text.text_content, Some("Hello".to_string()));
        assert_eq!(text.node_type, NodeType::Text);
        assert!(!text.is_tag("div"));
    }
}
