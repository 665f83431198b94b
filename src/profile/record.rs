//! UserProfile record
//!
//! The persisted, per-workspace resolved value mapping for a template.
//! At most one profile exists per workspace id; upserts replace in place.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reserved workspace id used when no workspace context exists
pub const DEFAULT_WORKSPACE_ID: &str = "default";

/// Per-workspace resolved placeholder values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Identifier of the owning workspace (canonicalized root path,
    /// or the literal `"default"` when no workspace is open)
    pub workspace_id: String,

    /// Which template the values belong to; absent in the
    /// single-universal-template variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,

    /// Placeholder key to resolved value. Need not cover every declared
    /// key; missing keys fall back to defaults at render time.
    pub placeholder_values: HashMap<String, String>,

    /// Set on every write (RFC 3339 in the durable form)
    pub last_updated: DateTime<Utc>,
}

impl UserProfile {
    /// Create a profile for a workspace with the given values
    pub fn new(workspace_id: impl Into<String>, placeholder_values: HashMap<String, String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            template_id: None,
            placeholder_values,
            last_updated: Utc::now(),
        }
    }

    /// Bind the profile to a template
    pub fn with_template(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = Some(template_id.into());
        self
    }

    /// Refresh the last-updated timestamp
    pub fn touch(&mut self) {
        self.last_updated = Utc::now();
    }
}
