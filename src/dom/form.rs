// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Form extraction

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::element::Element;

/// Ordered field name -> value mapping
pub type FormData = IndexMap<String, String>;

/// A form found in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    /// Form ID
    pub id: Option<String>,
    /// Form name
    pub name: Option<String>,
    /// Raw action attribute, unresolved
    pub action: Option<String>,
    /// HTTP method, uppercased (`GET` when absent or blank)
    pub method: String,
    /// Default field values, in document order
    pub fields: FormData,
}

impl Form {
    /// Read a `<form>` element and its controls.
    ///
    /// Every named `input`, `select` and `textarea` contributes its current
    /// value. Checkboxes and radios only count when checked (value `on` if
    /// they have none); a select takes its first selected option, or its
    /// first option when nothing is selected. When a name repeats, the first
    /// contributing control wins.
    pub fn from_element(element: &Element<'_>) -> Self {
        let mut fields = FormData::new();

        for control in element.descendants_by_tags(&["input", "select", "textarea"]) {
            let Some(name) = control.get_attribute("name") else {
                continue;
            };

            if let Some(value) = control_value(&control) {
                fields.entry(name.to_string()).or_insert(value);
            }
        }

        let method = element
            .get_attribute("method")
            .map(|m| m.trim().to_uppercase())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "GET".to_string());

        Self {
            id: element.get_attribute("id").map(String::from),
            name: element.get_attribute("name").map(String::from),
            action: element.get_attribute("action").map(String::from),
            method,
            fields,
        }
    }

    /// Action attribute, or an empty string when absent
    pub fn action_or_empty(&self) -> &str {
        self.action.as_deref().unwrap_or("")
    }
}

fn control_value(control: &Element<'_>) -> Option<String> {
    match control.local_name() {
        "textarea" => Some(control.text_content()),
        "select" => {
            let options = control.descendants_by_tags(&["option"]);
            let chosen = options
                .iter()
                .find(|o| o.checked())
                .or_else(|| {
                    if control.has_attribute("multiple") {
                        None
                    } else {
                        options.first()
                    }
                })?;
            Some(
                chosen
                    .get_attribute("value")
                    .map(String::from)
                    .unwrap_or_else(|| chosen.text_content().trim().to_string()),
            )
        }
        _ => {
            let input_type = control
                .get_attribute("type")
                .unwrap_or("text")
                .to_lowercase();
            let value = control.get_attribute("value");
            match input_type.as_str() {
                "checkbox" | "radio" => control
                    .has_attribute("checked")
                    .then(|| value.unwrap_or("on").to_string()),
                _ => Some(value.unwrap_or_default().to_string()),
            }
        }
    }
}
