// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! DOM for parsed responses
//!
//! html5ever does the parsing; the result is copied into an owned node
//! arena that exposes forms, links and scripts.

mod document;
mod element;
mod form;
mod node;
mod parser;

pub use document::Document;
pub use element::Element;
pub use form::{Form, FormData};
pub use node::{NodeData, NodeId, NodeType};
pub use parser::{parse_html, parse_html_bytes, parse_html_with_url};
