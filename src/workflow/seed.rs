//! Placeholder seeding
//!
//! Builds the initial value mapping handed to a configuration workflow:
//! existing profile values win, then detector signals for the keys they can
//! fill, then descriptor defaults.

use std::collections::HashMap;

use crate::catalog::Template;
use crate::detect::WorkspaceSignals;
use crate::profile::UserProfile;

/// Keys the detector can pre-fill
const LANGUAGES_KEY: &str = "LANGUAGES";
const FRAMEWORKS_KEY: &str = "FRAMEWORKS";
const PROJECT_NAME_KEY: &str = "PROJECT_NAME";

/// Build seed values for configuring `template`.
///
/// Priority per key: the existing profile's value, then a detection signal
/// (languages/frameworks/project name), then the descriptor default, then
/// empty. Always returns one entry per declared descriptor.
pub fn seed_values(
    template: &Template,
    existing: Option<&UserProfile>,
    signals: &WorkspaceSignals,
    project_name: Option<&str>,
) -> HashMap<String, String> {
    let mut seeds = HashMap::new();

    for descriptor in &template.placeholders {
        let from_profile = existing
            .and_then(|p| p.placeholder_values.get(&descriptor.key))
            .filter(|v| !v.is_empty())
            .cloned();

        let from_signals = match descriptor.key.as_str() {
            LANGUAGES_KEY => Some(signals.languages_summary()).filter(|s| !s.is_empty()),
            FRAMEWORKS_KEY => Some(signals.frameworks_summary()).filter(|s| !s.is_empty()),
            PROJECT_NAME_KEY => project_name.map(str::to_string).filter(|s| !s.is_empty()),
            _ => None,
        };

        let value = from_profile
            .or(from_signals)
            .or_else(|| descriptor.default_value.clone())
            .unwrap_or_default();

        seeds.insert(descriptor.key.clone(), value);
    }

    seeds
}
