//! Context detector
//!
//! Classifies an externally-enumerated file list by extension/name into
//! language and framework signals plus a suggested template id. Best-effort
//! only: signals seed workflow defaults and are never required for
//! correctness. No filesystem access happens here; callers hand in a
//! pre-truncated list.

use serde::Serialize;
use tracing::debug;

/// Fixed extension-to-language mapping; first match wins the suggestion
const LANGUAGE_RULES: &[(&[&str], &str, &str)] = &[
    (&[".ps1", ".psm1"], "PowerShell", "powershell-admin"),
    (&[".py"], "Python", "python-developer"),
    (&[".cs", ".csproj"], "C#", "csharp-developer"),
    (&[".js", ".ts", ".jsx", ".tsx"], "JavaScript/TypeScript", "javascript-developer"),
];

/// File names that signal a framework rather than a language
const FRAMEWORK_RULES: &[(&str, &str)] = &[("package.json", "Node.js")];

/// Detection signals derived from a workspace file list
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkspaceSignals {
    /// Matched language labels, first-seen order, no duplicates
    pub detected_languages: Vec<String>,

    /// Matched framework labels, first-seen order, no duplicates
    pub detected_frameworks: Vec<String>,

    /// Template id suggested by the first language match
    pub suggested_template: Option<String>,
}

impl WorkspaceSignals {
    /// Comma-joined language labels, for seeding text placeholders
    pub fn languages_summary(&self) -> String {
        self.detected_languages.join(", ")
    }

    /// Comma-joined framework labels, for seeding text placeholders
    pub fn frameworks_summary(&self) -> String {
        self.detected_frameworks.join(", ")
    }
}

/// Classify a file list into workspace signals.
///
/// Matching is case-insensitive on the path suffix. The order of `files`
/// affects only which template is suggested (first language match), never
/// the completeness of the language set.
pub fn detect(files: &[String]) -> WorkspaceSignals {
    let mut signals = WorkspaceSignals::default();

    for file in files {
        let lower = file.to_lowercase();

        for (extensions, language, template) in LANGUAGE_RULES {
            if extensions.iter().any(|ext| lower.ends_with(ext)) {
                if !signals.detected_languages.iter().any(|l| l == language) {
                    signals.detected_languages.push((*language).to_string());
                }
                if signals.suggested_template.is_none() {
                    signals.suggested_template = Some((*template).to_string());
                }
            }
        }

        for (name, framework) in FRAMEWORK_RULES {
            let is_named = lower == *name || lower.ends_with(&format!("/{name}")) || lower.ends_with(&format!("\\{name}"));
            if is_named && !signals.detected_frameworks.iter().any(|f| f == framework) {
                signals.detected_frameworks.push((*framework).to_string());
            }
        }
    }

    debug!(
        languages = ?signals.detected_languages,
        frameworks = ?signals.detected_frameworks,
        suggestion = ?signals.suggested_template,
        "workspace detection complete"
    );
    signals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_detect_dedups_languages() {
        // Scenario: duplicate extensions collapse to one label each
        let signals = detect(&files(&["a.py", "b.py", "c.ts"]));
        assert_eq!(signals.detected_languages, vec!["Python", "JavaScript/TypeScript"]);
    }

    #[test]
    fn test_detect_first_match_wins_suggestion() {
        let signals = detect(&files(&["main.ts", "script.py"]));
        assert_eq!(signals.suggested_template.as_deref(), Some("javascript-developer"));

        let reversed = detect(&files(&["script.py", "main.ts"]));
        assert_eq!(reversed.suggested_template.as_deref(), Some("python-developer"));
        // order changes the suggestion, never the language set
        let mut a = signals.detected_languages.clone();
        let mut b = reversed.detected_languages.clone();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn test_detect_powershell_and_csharp() {
        let signals = detect(&files(&["deploy.PS1", "Module.psm1", "App.cs", "App.csproj"]));
        assert_eq!(signals.detected_languages, vec!["PowerShell", "C#"]);
        assert_eq!(signals.suggested_template.as_deref(), Some("powershell-admin"));
    }

    #[test]
    fn test_detect_node_framework() {
        let signals = detect(&files(&["web/package.json", "src/index.js"]));
        assert_eq!(signals.detected_frameworks, vec!["Node.js"]);
    }

    #[test]
    fn test_detect_empty_input() {
        let signals = detect(&[]);
        assert!(signals.detected_languages.is_empty());
        assert!(signals.detected_frameworks.is_empty());
        assert!(signals.suggested_template.is_none());
    }

    #[test]
    fn test_detect_unknown_extensions_ignored() {
        let signals = detect(&files(&["notes.txt", "Makefile", "image.png"]));
        assert_eq!(signals, WorkspaceSignals::default());
    }

    #[test]
    fn test_summaries() {
        let signals = detect(&files(&["a.py", "c.ts", "package.json"]));
        assert_eq!(signals.languages_summary(), "Python, JavaScript/TypeScript");
        assert_eq!(signals.frameworks_summary(), "Node.js");
    }
}
