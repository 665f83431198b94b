//! Template catalog
//!
//! Owns the fixed set of templates. Read-only after construction; all
//! structural validation happens at build so render never has to.

use thiserror::Error;
use tracing::debug;

use super::builtin::builtin_templates;
use super::descriptor::PlaceholderKind;
use super::template::{Template, is_marker_key};

/// Malformed catalog entries, rejected at construction
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate template id: {0}")]
    DuplicateTemplate(String),

    #[error("Duplicate placeholder key {key} in template {template}")]
    DuplicateKey { template: String, key: String },

    #[error("Placeholder key {key:?} in template {template} is not a valid marker key")]
    InvalidKey { template: String, key: String },

    #[error("Select placeholder {key} in template {template} has no options")]
    EmptySelectOptions { template: String, key: String },
}

/// Read-only collection of templates, lookup by id
#[derive(Debug)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    /// Build a catalog from the given templates, validating each entry
    pub fn new(templates: Vec<Template>) -> Result<Self, CatalogError> {
        for (i, template) in templates.iter().enumerate() {
            if templates[..i].iter().any(|t| t.id == template.id) {
                return Err(CatalogError::DuplicateTemplate(template.id.clone()));
            }
            validate_template(template)?;
        }
        debug!(count = templates.len(), "catalog constructed");
        Ok(Self { templates })
    }

    /// Build the catalog of built-in templates
    ///
    /// The built-in set is covered by tests, so failure here is a
    /// programming error in the template definitions.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin_templates())
    }

    /// Exact lookup by template id
    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// All templates, in declaration order
    pub fn all(&self) -> &[Template] {
        &self.templates
    }

    /// The single universal template (first catalog entry)
    ///
    /// # Panics
    /// Panics if the catalog is empty. The catalog is statically populated
    /// at construction, so an empty catalog is a programming error.
    pub fn universal(&self) -> &Template {
        self.templates
            .first()
            .unwrap_or_else(|| panic!("template catalog is empty"))
    }
}

fn validate_template(template: &Template) -> Result<(), CatalogError> {
    for (i, descriptor) in template.placeholders.iter().enumerate() {
        // a key that could not appear inside {{...}} can never be rendered
        if !is_marker_key(&descriptor.key) {
            return Err(CatalogError::InvalidKey {
                template: template.id.clone(),
                key: descriptor.key.clone(),
            });
        }
        if template.placeholders[..i].iter().any(|d| d.key == descriptor.key) {
            return Err(CatalogError::DuplicateKey {
                template: template.id.clone(),
                key: descriptor.key.clone(),
            });
        }
        if descriptor.kind == PlaceholderKind::Select && descriptor.options.is_empty() {
            return Err(CatalogError::EmptySelectOptions {
                template: template.id.clone(),
                key: descriptor.key.clone(),
            });
        }
    }
    Ok(())
}
