//! Template data model
//!
//! A template is an immutable text body containing `{{KEY}}` markers plus an
//! ordered set of placeholder descriptors, one per declared key. Markers are
//! extracted once at construction so render and validation never re-parse.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::descriptor::PlaceholderDescriptor;

/// Display grouping for templates
///
/// Used only for presentation; never consulted by matching logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    Admin,
    Developer,
    Architect,
    Analyst,
    Custom,
}

impl std::fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Developer => write!(f, "developer"),
            Self::Architect => write!(f, "architect"),
            Self::Analyst => write!(f, "analyst"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

/// An immutable session primer template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// Stable identifier, primary lookup key into the catalog
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Display grouping tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<TemplateCategory>,

    /// Body text containing zero or more `{{KEY}}` markers
    pub body: String,

    /// Declared placeholders, in collection order
    pub placeholders: Vec<PlaceholderDescriptor>,

    /// Distinct marker keys found in `body`, first-seen order.
    /// Built once at construction; not part of the serialized form.
    #[serde(skip)]
    markers: Vec<String>,

    /// Key to position in `placeholders`, for constant-time descriptor
    /// lookup during render. Built once at construction.
    #[serde(skip)]
    key_index: HashMap<String, usize>,
}

impl Template {
    /// Create a template, extracting the marker set from the body
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: Option<TemplateCategory>,
        body: impl Into<String>,
        placeholders: Vec<PlaceholderDescriptor>,
    ) -> Self {
        let body = body.into();
        let markers = scan_markers(&body);
        let key_index = placeholders
            .iter()
            .enumerate()
            .map(|(i, d)| (d.key.clone(), i))
            .collect();
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category,
            body,
            placeholders,
            markers,
            key_index,
        }
    }

    /// Distinct marker keys appearing in the body, first-seen order
    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Look up a declared descriptor by key (constant time)
    pub fn descriptor(&self, key: &str) -> Option<&PlaceholderDescriptor> {
        self.key_index.get(key).map(|&i| &self.placeholders[i])
    }

    /// Marker keys with no matching descriptor (rendered verbatim)
    pub fn undeclared_markers(&self) -> Vec<&str> {
        self.markers
            .iter()
            .filter(|m| self.descriptor(m).is_none())
            .map(String::as_str)
            .collect()
    }
}

/// Whether `key` is valid inside `{{...}}`: non-empty, no whitespace, no braces
pub(crate) fn is_marker_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(|c: char| c.is_whitespace() || c == '{' || c == '}')
}

/// Extract distinct marker keys from a template body, first-seen order
///
/// Single pass; malformed brace sequences are treated as literal text.
pub(crate) fn scan_markers(body: &str) -> Vec<String> {
    let mut markers: Vec<String> = Vec::new();
    let bytes = body.as_bytes();
    let mut i = 0;
    while i + 1 < bytes.len() {
        if &bytes[i..i + 2] == b"{{" {
            if let Some(end) = body[i + 2..].find("}}") {
                let key = &body[i + 2..i + 2 + end];
                if is_marker_key(key) {
                    if !markers.iter().any(|m| m == key) {
                        markers.push(key.to_string());
                    }
                    i += 2 + end + 2;
                    continue;
                }
            }
        }
        i += 1;
    }
    markers
}
