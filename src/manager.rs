//! Primer manager
//!
//! Ties the catalog, the profile store, and the configuration workflow
//! together for one workspace: template selection, quick configuration,
//! interactive configuration, rendering, and reset.

use eyre::{Result, eyre};
use tracing::{debug, info};

use crate::catalog::{Template, TemplateCatalog};
use crate::detect::WorkspaceSignals;
use crate::generator::render;
use crate::profile::{ProfileStore, UserProfile};
use crate::workflow::{AcceptSeeds, ConfigurationWorkflow, seed_values};

/// Per-workspace orchestration over a catalog and a profile store
pub struct PrimerManager<S: ProfileStore> {
    catalog: TemplateCatalog,
    store: S,
    workspace_id: String,
}

impl<S: ProfileStore> PrimerManager<S> {
    pub fn new(catalog: TemplateCatalog, store: S, workspace_id: impl Into<String>) -> Self {
        Self {
            catalog,
            store,
            workspace_id: workspace_id.into(),
        }
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn workspace_id(&self) -> &str {
        &self.workspace_id
    }

    /// The stored profile for this workspace, if any
    pub async fn profile(&self) -> Result<Option<UserProfile>> {
        Ok(self.store.get(&self.workspace_id).await?)
    }

    /// Pick the template to work with.
    ///
    /// Priority: explicit id (unknown ids are an error), then the id bound
    /// to an existing profile (ignored if it no longer exists), then the
    /// detected suggestion, then the universal template.
    fn select_template(
        &self,
        explicit: Option<&str>,
        profile: Option<&UserProfile>,
        signals: &WorkspaceSignals,
    ) -> Result<&Template> {
        if let Some(id) = explicit {
            return self.catalog.get(id).ok_or_else(|| {
                let known: Vec<&str> = self.catalog.all().iter().map(|t| t.id.as_str()).collect();
                eyre!("Unknown template '{}'. Available: {}", id, known.join(", "))
            });
        }

        let from_profile = profile
            .and_then(|p| p.template_id.as_deref())
            .and_then(|id| self.catalog.get(id));
        if let Some(template) = from_profile {
            return Ok(template);
        }

        let suggested = signals.suggested_template.as_deref().and_then(|id| self.catalog.get(id));
        Ok(suggested.unwrap_or_else(|| self.catalog.universal()))
    }

    /// Render the primer for this workspace.
    ///
    /// Uses the stored profile when present. An explicit template id that
    /// differs from the profile's binding reseeds the profile for the new
    /// template (existing values carry over where keys match) and rebinds
    /// it. Without a profile, performs a quick configuration: seed every
    /// placeholder from detection signals and defaults, persist the
    /// result, and render it.
    pub async fn generate(
        &self,
        explicit_template: Option<&str>,
        signals: &WorkspaceSignals,
        project_name: Option<&str>,
    ) -> Result<String> {
        let existing = self.store.get(&self.workspace_id).await?;
        let template = self.select_template(explicit_template, existing.as_ref(), signals)?;

        if let Some(profile) = &existing {
            let rebinding =
                explicit_template.is_some() && profile.template_id.as_deref() != Some(template.id.as_str());
            if !rebinding {
                debug!(workspace = %self.workspace_id, template = %template.id, "rendering from stored profile");
                return Ok(render(template, &profile.placeholder_values));
            }
        }

        let seeds = seed_values(template, existing.as_ref(), signals, project_name);
        let values = AcceptSeeds
            .collect(template, &seeds)
            .await?
            .unwrap_or(seeds); // AcceptSeeds never cancels

        let profile = UserProfile::new(&self.workspace_id, values.clone()).with_template(&template.id);
        self.store.upsert(profile).await?;
        info!(workspace = %self.workspace_id, template = %template.id, "quick configuration saved");

        Ok(render(template, &values))
    }

    /// Run a full configuration round through `workflow`.
    ///
    /// Returns the rendered primer on completion, or `None` on cancellation
    /// (in which case nothing is written).
    pub async fn configure(
        &self,
        workflow: &dyn ConfigurationWorkflow,
        explicit_template: Option<&str>,
        signals: &WorkspaceSignals,
        project_name: Option<&str>,
    ) -> Result<Option<String>> {
        let existing = self.store.get(&self.workspace_id).await?;
        let template = self.select_template(explicit_template, existing.as_ref(), signals)?;
        let seeds = seed_values(template, existing.as_ref(), signals, project_name);

        let Some(values) = workflow.collect(template, &seeds).await? else {
            info!(workspace = %self.workspace_id, "configuration cancelled, nothing saved");
            return Ok(None);
        };

        let profile = UserProfile::new(&self.workspace_id, values.clone()).with_template(&template.id);
        self.store.upsert(profile).await?;
        info!(workspace = %self.workspace_id, template = %template.id, "configuration saved");

        Ok(Some(render(template, &values)))
    }

    /// Remove this workspace's profile. Returns whether one existed.
    pub async fn reset(&self) -> Result<bool> {
        let existed = self.store.get(&self.workspace_id).await?.is_some();
        self.store.remove(&self.workspace_id).await?;
        if existed {
            info!(workspace = %self.workspace_id, "profile removed");
        }
        Ok(existed)
    }
}
