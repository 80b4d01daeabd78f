//! Where live component definitions come from.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use super::data::ComponentDefinition;

/// Supplies every known component with its live definitions, in
/// enumeration order.
pub trait ComponentSource {
    fn components(&self) -> Result<Vec<(String, ComponentDefinition)>>;
}

/// Component definitions dumped to a JSON manifest by the library's
/// introspection step: `{ "VBtn": { "props": {...}, "events": {...}, ... } }`.
#[derive(Debug, Clone)]
pub struct ManifestSource {
    path: PathBuf,
}

impl ManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ComponentSource for ManifestSource {
    fn components(&self) -> Result<Vec<(String, ComponentDefinition)>> {
        let content = fs::read_to_string(&self.path).with_context(|| {
            format!("Failed to read component manifest: {}", self.path.display())
        })?;
        parse_manifest(&content)
            .with_context(|| format!("Invalid component manifest: {}", self.path.display()))
    }
}

/// Parse a manifest, keeping the order components appear in.
pub fn parse_manifest(content: &str) -> Result<Vec<(String, ComponentDefinition)>> {
    let root: Value = serde_json::from_str(content)?;
    let Value::Object(components) = root else {
        bail!("Root of the manifest must be an object");
    };

    let mut result = Vec::with_capacity(components.len());
    for (name, definition) in components {
        let definition: ComponentDefinition = serde_json::from_value(definition)
            .with_context(|| format!("Invalid definition for component '{}'", name))?;
        result.push((name, definition));
    }

    Ok(result)
}
