//! Placeholder descriptors
//!
//! A descriptor declares one named slot in a template body: its display
//! metadata, how a value for it should be collected, and its default.

use serde::{Deserialize, Serialize};

/// How a placeholder value is collected by the configuration workflow
///
/// Closed set: the workflow switches on this tag and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderKind {
    /// Single-line free text
    #[default]
    Text,
    /// Multi-line free text
    Multiline,
    /// Single choice from a fixed option list
    Select,
}

impl std::fmt::Display for PlaceholderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Multiline => write!(f, "multiline"),
            Self::Select => write!(f, "select"),
        }
    }
}

/// A named slot in a template body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderDescriptor {
    /// Stable identifier, used verbatim inside `{{KEY}}` markers
    pub key: String,

    /// Short display label (also the render fallback, as `[Label]`)
    pub label: String,

    /// Longer display description
    pub description: String,

    /// How the configuration workflow collects a value
    pub kind: PlaceholderKind,

    /// Allowed choices; required and non-empty when `kind` is `Select`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    /// Render fallback and initial workflow seed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl PlaceholderDescriptor {
    /// Create a single-line text placeholder
    pub fn text(key: impl Into<String>, label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            description: description.into(),
            kind: PlaceholderKind::Text,
            options: Vec::new(),
            default_value: None,
        }
    }

    /// Create a multi-line text placeholder
    pub fn multiline(key: impl Into<String>, label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: PlaceholderKind::Multiline,
            ..Self::text(key, label, description)
        }
    }

    /// Create a single-choice placeholder with the given options
    pub fn select(
        key: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self {
            kind: PlaceholderKind::Select,
            options,
            ..Self::text(key, label, description)
        }
    }

    /// Set the default value
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// The bracketed fallback rendered when no value and no default exist
    pub fn fallback(&self) -> String {
        format!("[{}]", self.label)
    }
}
