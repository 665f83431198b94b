//! session-primer - per-workspace session primers for AI chat sessions
//!
//! Generates a personalized, reusable prompt ("session primer") from a named
//! template with `{{KEY}}` placeholders, persists one resolved configuration
//! per workspace, and seeds placeholder defaults from light workspace
//! detection.
//!
//! # Core Concepts
//!
//! - **Immutable catalog**: templates are validated once at construction and
//!   never change at runtime
//! - **One profile per workspace**: upserts replace in place, last write wins
//! - **Pure rendering**: same template and values always produce the same
//!   primer; unresolved placeholders surface as visible `[Label]` fallbacks
//! - **Best-effort detection**: file signals only ever seed defaults
//!
//! # Modules
//!
//! - [`catalog`] - Template and placeholder data model, built-in set
//! - [`generator`] - Marker substitution
//! - [`profile`] - Per-workspace profile persistence
//! - [`detect`] - File-list classification
//! - [`workflow`] - Configuration workflow boundary and implementations
//! - [`manager`] - Per-workspace orchestration
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod catalog;
pub mod cli;
pub mod config;
pub mod detect;
pub mod generator;
pub mod manager;
pub mod profile;
pub mod workflow;
pub mod workspace;

// Re-export commonly used types
pub use catalog::{CatalogError, PlaceholderDescriptor, PlaceholderKind, Template, TemplateCatalog, TemplateCategory};
pub use config::{Config, DetectionConfig, StorageConfig};
pub use detect::{WorkspaceSignals, detect};
pub use generator::render;
pub use manager::PrimerManager;
pub use profile::{DEFAULT_WORKSPACE_ID, JsonFileStore, MemoryStore, ProfileStore, StoreError, UserProfile};
pub use workflow::{AcceptSeeds, ConfigurationWorkflow, ConsoleWorkflow, ScriptedWorkflow, seed_values};
pub use workspace::{enumerate_files, workspace_id, workspace_name};
