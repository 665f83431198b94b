//! Integration tests for session-primer
//!
//! These tests verify end-to-end behavior: catalog to render, configuration
//! rounds through the workflow boundary, and durable profile persistence.

use std::collections::HashMap;

use tempfile::TempDir;

use session_primer::catalog::{PlaceholderDescriptor, Template, TemplateCatalog};
use session_primer::detect::detect;
use session_primer::generator::render;
use session_primer::manager::PrimerManager;
use session_primer::profile::{JsonFileStore, ProfileStore, UserProfile};
use session_primer::workflow::ScriptedWorkflow;

fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

// =============================================================================
// Catalog + Generator
// =============================================================================

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

#[test]
fn test_scenario_a_defaults_and_fallbacks() {
    let out = render(&hello_template(), &HashMap::new());
    assert_eq!(out, "Hello Dev, you work on [Project].");
}

#[test]
fn test_scenario_b_supplied_values() {
    let out = render(&hello_template(), &values(&[("NAME", "Ada"), ("PROJECT", "Compiler")]));
    assert_eq!(out, "Hello Ada, you work on Compiler.");
}

#[test]
fn test_every_builtin_renders_clean_with_no_values() {
    let catalog = TemplateCatalog::builtin().unwrap();
    for template in catalog.all() {
        let out = render(template, &HashMap::new());
        assert!(!out.contains("{{"), "template {} left raw markers:\n{}", template.id, out);
        assert!(!out.is_empty());
    }
}

// =============================================================================
// Profile Store (durable)
// =============================================================================

#[tokio::test]
async fn test_scenario_c_last_write_wins_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profiles.json");

    let store = JsonFileStore::open(&path).unwrap();
    store.upsert(UserProfile::new("w1", values(&[("NAME", "Ada")]))).await.unwrap();
    let t1 = store.get("w1").await.unwrap().unwrap().last_updated;
    store
        .upsert(UserProfile::new("w1", values(&[("NAME", "Grace")])))
        .await
        .unwrap();
    drop(store);

    let reopened = JsonFileStore::open(&path).unwrap();
    let profiles = reopened.list_all().await.unwrap();
    assert_eq!(profiles.len(), 1, "exactly one record per workspace");
    assert_eq!(profiles[0].placeholder_values.get("NAME").map(String::as_str), Some("Grace"));
    assert!(profiles[0].last_updated >= t1);
}

#[tokio::test]
async fn test_remove_never_present_then_get_absent() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(dir.path().join("profiles.json")).unwrap();
    store.remove("ghost").await.unwrap();
    assert!(store.get("ghost").await.unwrap().is_none());
}

// =============================================================================
// Detection
// =============================================================================

#[test]
fn test_scenario_d_detection_dedups() {
    let signals = detect(&["a.py".to_string(), "b.py".to_string(), "c.ts".to_string()]);
    assert_eq!(signals.detected_languages.len(), 2);
    assert!(signals.detected_languages.contains(&"Python".to_string()));
    assert!(signals.detected_languages.contains(&"JavaScript/TypeScript".to_string()));
}

// =============================================================================
// Full configuration round
// =============================================================================

#[tokio::test]
async fn test_configure_then_generate_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profiles.json");

    // configure against a durable store
    {
        let store = JsonFileStore::open(&path).unwrap();
        let manager = PrimerManager::new(TemplateCatalog::builtin().unwrap(), store, "w1");

        let signals = detect(&["main.py".to_string()]);
        let workflow = ScriptedWorkflow::answering(values(&[
            ("PROJECT_NAME", "Orbit"),
            ("CURRENT_FOCUS", "query planner rewrite"),
        ]));
        let rendered = manager
            .configure(&workflow, None, &signals, Some("orbit"))
            .await
            .unwrap()
            .expect("workflow completed");
        assert!(rendered.contains("Orbit"));
        assert!(rendered.contains("query planner rewrite"));
    }

    // a fresh process sees the same configuration
    {
        let store = JsonFileStore::open(&path).unwrap();
        let manager = PrimerManager::new(TemplateCatalog::builtin().unwrap(), store, "w1");
        let primer = manager
            .generate(None, &session_primer::WorkspaceSignals::default(), None)
            .await
            .unwrap();
        assert!(primer.contains("Orbit"));
        assert!(primer.contains("query planner rewrite"));
    }
}

#[tokio::test]
async fn test_cancelled_configuration_leaves_store_untouched() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(dir.path().join("profiles.json")).unwrap();
    let manager = PrimerManager::new(TemplateCatalog::builtin().unwrap(), store, "w1");

    let outcome = manager
        .configure(
            &ScriptedWorkflow::cancelling(),
            Some("python-developer"),
            &session_primer::WorkspaceSignals::default(),
            None,
        )
        .await
        .unwrap();
    assert!(outcome.is_none());
    assert!(manager.profile().await.unwrap().is_none());
}

#[tokio::test]
async fn test_reset_then_generate_reconfigures() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(dir.path().join("profiles.json")).unwrap();
    let manager = PrimerManager::new(TemplateCatalog::builtin().unwrap(), store, "w1");

    let signals = detect(&["app.ts".to_string()]);
    manager.generate(None, &signals, Some("dash")).await.unwrap();
    assert!(manager.reset().await.unwrap());

    // after reset, generation starts from scratch (quick configuration again)
    let primer = manager.generate(None, &signals, Some("dash")).await.unwrap();
    assert!(primer.contains("dash"));
    let profile = manager.profile().await.unwrap().unwrap();
    assert_eq!(profile.template_id.as_deref(), Some("javascript-developer"));
}

// =============================================================================
// CLI
// =============================================================================

mod cli {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn config_for(dir: &TempDir) -> std::path::PathBuf {
        let config_path = dir.path().join("config.yml");
        let profiles = dir.path().join("profiles.json");
        std::fs::write(
            &config_path,
            format!("storage:\n  profiles-path: {}\n", profiles.display()),
        )
        .unwrap();
        config_path
    }

    #[test]
    fn test_templates_lists_builtins() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir);

        Command::cargo_bin("primer")
            .unwrap()
            .args(["--config", config.to_str().unwrap(), "templates", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("python-developer"))
            .stdout(predicate::str::contains("custom-template"));
    }

    #[test]
    fn test_generate_renders_for_detected_workspace() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir);
        let workspace = dir.path().join("proj");
        std::fs::create_dir(&workspace).unwrap();
        std::fs::write(workspace.join("main.py"), "print('hi')").unwrap();

        Command::cargo_bin("primer")
            .unwrap()
            .args([
                "--config",
                config.to_str().unwrap(),
                "--workspace",
                workspace.to_str().unwrap(),
                "generate",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Backend Developer"))
            .stdout(predicate::str::contains("proj"));
    }

    #[test]
    fn test_generate_unknown_template_fails() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir);

        Command::cargo_bin("primer")
            .unwrap()
            .args(["--config", config.to_str().unwrap(), "generate", "--template", "nope"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown template"));
    }
}
