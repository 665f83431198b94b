//! Configuration workflow boundary
//!
//! The core exposes exactly this surface to the interactive layer: for each
//! descriptor in a template, obtain a final string value, or cancel. A
//! cancellation discards all partial input and writes nothing.

mod console;
mod seed;

use std::collections::HashMap;

use async_trait::async_trait;
use eyre::Result;

use crate::catalog::Template;

pub use console::ConsoleWorkflow;
pub use seed::seed_values;

/// Interactive collector of placeholder values
///
/// `Ok(None)` is user cancellation, a normal alternate outcome; only real
/// collection failures (e.g. a broken terminal) are errors.
#[async_trait]
pub trait ConfigurationWorkflow {
    /// Collect one value per descriptor, starting from `seeds`.
    async fn collect(&self, template: &Template, seeds: &HashMap<String, String>)
    -> Result<Option<HashMap<String, String>>>;
}

/// Non-interactive workflow that accepts every seed as-is
///
/// Used by quick configuration (no prompts) and as a test double.
#[derive(Debug, Default)]
pub struct AcceptSeeds;

#[async_trait]
impl ConfigurationWorkflow for AcceptSeeds {
    async fn collect(
        &self,
        template: &Template,
        seeds: &HashMap<String, String>,
    ) -> Result<Option<HashMap<String, String>>> {
        let mut values = HashMap::new();
        for descriptor in &template.placeholders {
            let value = seeds
                .get(&descriptor.key)
                .cloned()
                .or_else(|| descriptor.default_value.clone())
                .unwrap_or_default();
            values.insert(descriptor.key.clone(), value);
        }
        Ok(Some(values))
    }
}

/// Scripted workflow for tests: fixed answers, or cancellation
#[derive(Debug, Default)]
pub struct ScriptedWorkflow {
    answers: HashMap<String, String>,
    cancel: bool,
}

impl ScriptedWorkflow {
    /// Answer every descriptor from the given map (missing keys use seeds)
    pub fn answering(answers: HashMap<String, String>) -> Self {
        Self { answers, cancel: false }
    }

    /// Cancel as soon as collection starts
    pub fn cancelling() -> Self {
        Self {
            answers: HashMap::new(),
            cancel: true,
        }
    }
}

#[async_trait]
impl ConfigurationWorkflow for ScriptedWorkflow {
    async fn collect(
        &self,
        template: &Template,
        seeds: &HashMap<String, String>,
    ) -> Result<Option<HashMap<String, String>>> {
        if self.cancel {
            return Ok(None);
        }
        let mut values = HashMap::new();
        for descriptor in &template.placeholders {
            let value = self
                .answers
                .get(&descriptor.key)
                .or_else(|| seeds.get(&descriptor.key))
                .cloned()
                .or_else(|| descriptor.default_value.clone())
                .unwrap_or_default();
            values.insert(descriptor.key.clone(), value);
        }
        Ok(Some(values))
    }
}
