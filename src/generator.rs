//! Prompt generator
//!
//! Renders a template body by substituting `{{KEY}}` markers from a value
//! mapping. Pure function of its inputs: no I/O, no clock, no randomness.

use std::collections::HashMap;

use crate::catalog::Template;

/// Render a template with the given placeholder values.
///
/// For each `{{KEY}}` marker with a declared descriptor, substitutes in
/// priority order: a non-empty entry in `values`, then the descriptor's
/// default, then the bracketed `[Label]` fallback so unresolved output is
/// legible but visibly incomplete. Substitution is global and single-pass:
/// substituted text is never re-scanned, so a value containing marker
/// syntax cannot trigger nested expansion. Markers with no matching
/// descriptor are left verbatim; that is a contract, not an error.
pub fn render(template: &Template, values: &HashMap<String, String>) -> String {
    let body = &template.body;
    let bytes = body.as_bytes();
    let mut out = String::with_capacity(body.len());
    let mut i = 0;

    while i < bytes.len() {
        if i + 1 < bytes.len() && &bytes[i..i + 2] == b"{{" {
            if let Some(end) = body[i + 2..].find("}}") {
                let key = &body[i + 2..i + 2 + end];
                if let Some(descriptor) = template.descriptor(key) {
                    match values.get(key).filter(|v| !v.is_empty()) {
                        Some(value) => out.push_str(value),
                        None => match &descriptor.default_value {
                            Some(default) => out.push_str(default),
                            None => out.push_str(&descriptor.fallback()),
                        },
                    }
                    i += 2 + end + 2;
                    continue;
                }
            }
        }
        // not a recognized marker: copy the next char through
        let ch = body[i..].chars().next().unwrap_or('\u{FFFD}');
        out.push(ch);
        i += ch.len_utf8();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PlaceholderDescriptor, Template, builtin_templates};

    fn hello_template() -> Template {
        Template::new(
            "hello",
            "Hello",
            "greeting",
            None,
            "Hello {{NAME}}, you work on {{PROJECT}}.",
            vec![
                PlaceholderDescriptor::text("NAME", "Name", "").with_default("Dev"),
                PlaceholderDescriptor::text("PROJECT", "Project", ""),
            ],
        )
    }

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_render_empty_values_uses_default_and_fallback() {
        // Scenario: NAME has a default, PROJECT falls back to its label
        let out = render(&hello_template(), &HashMap::new());
        assert_eq!(out, "Hello Dev, you work on [Project].");
    }

    #[test]
    fn test_render_supplied_values_win() {
        let out = render(&hello_template(), &values(&[("NAME", "Ada"), ("PROJECT", "Compiler")]));
        assert_eq!(out, "Hello Ada, you work on Compiler.");
    }

    #[test]
    fn test_render_empty_string_value_falls_back() {
        // An empty value is treated as absent, not as a valid substitution
        let out = render(&hello_template(), &values(&[("NAME", "")]));
        assert_eq!(out, "Hello Dev, you work on [Project].");
    }

    #[test]
    fn test_render_global_substitution() {
        let template = Template::new(
            "t",
            "T",
            "",
            None,
            "{{X}} and {{X}} and {{X}}",
            vec![PlaceholderDescriptor::text("X", "X", "")],
        );
        let out = render(&template, &values(&[("X", "y")]));
        assert_eq!(out, "y and y and y");
    }

    #[test]
    fn test_render_unknown_marker_left_verbatim() {
        let template = Template::new(
            "t",
            "T",
            "",
            None,
            "known {{NAME}} unknown {{MYSTERY}}",
            vec![PlaceholderDescriptor::text("NAME", "Name", "").with_default("n")],
        );
        let out = render(&template, &HashMap::new());
        assert_eq!(out, "known n unknown {{MYSTERY}}");
    }

    #[test]
    fn test_render_no_nested_expansion() {
        // A value containing marker syntax must not be expanded again
        let template = Template::new(
            "t",
            "T",
            "",
            None,
            "{{A}} {{B}}",
            vec![
                PlaceholderDescriptor::text("A", "A", ""),
                PlaceholderDescriptor::text("B", "B", "").with_default("b"),
            ],
        );
        let out = render(&template, &values(&[("A", "{{B}}")]));
        assert_eq!(out, "{{B}} b");
    }

    #[test]
    fn test_render_is_idempotent_per_input() {
        let template = hello_template();
        let vals = values(&[("NAME", "Ada")]);
        assert_eq!(render(&template, &vals), render(&template, &vals));
    }

    #[test]
    fn test_render_builtins_with_empty_values_leaves_no_markers() {
        for template in builtin_templates() {
            let out = render(&template, &HashMap::new());
            for key in template.markers() {
                assert!(
                    !out.contains(&format!("{{{{{}}}}}", key)),
                    "template {} left marker {} unresolved",
                    template.id,
                    key
                );
            }
        }
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Rendering is total and stable for arbitrary values on the
            // built-in python template.
            #[test]
            fn render_total_and_stable(
                name in ".{0,40}",
                focus in ".{0,40}",
            ) {
                let template = builtin_templates().remove(1);
                let vals = values(&[("PROJECT_NAME", name.as_str()), ("CURRENT_FOCUS", focus.as_str())]);
                let first = render(&template, &vals);
                let second = render(&template, &vals);
                prop_assert_eq!(first, second);
            }
        }
    }
}
