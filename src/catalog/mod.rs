//! Template catalog and data model
//!
//! Templates are immutable text bodies with `{{KEY}}` markers plus an
//! ordered set of placeholder descriptors. The catalog owns the built-in
//! set, validates it at construction, and is read-only afterwards.

mod builtin;
#[allow(clippy::module_inception)]
mod catalog;
mod descriptor;
pub(crate) mod template;

pub use builtin::builtin_templates;
pub use catalog::{CatalogError, TemplateCatalog};
pub use descriptor::{PlaceholderDescriptor, PlaceholderKind};
pub use template::{Template, TemplateCategory};
