//! Per-component extraction worker.
//!
//! Runs on the extraction pool: it only reads the shared [`ExtractContext`]
//! and writes files named after its own component.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Serialize;

use super::{
    data::{ComponentDefinition, ComponentMetadata, MemberInfo, MemberKind},
    store::to_pretty_json,
};

/// Token in the declaration template replaced by the component name.
pub const COMPONENT_TOKEN: &str = "__component__";

/// Read-only inputs shared by every worker.
#[derive(Debug, Clone)]
pub struct ExtractContext<'a> {
    /// Ambient type declaration template.
    pub template: &'a str,
    pub locales: &'a [String],
    /// Receives `<ComponentName>.d.ts` stubs.
    pub tmp_dir: &'a Path,
    /// Receives `<locale>/<kebab-name>.json` raw metadata.
    pub out_dir: &'a Path,
}

impl ExtractContext<'_> {
    pub fn stub_path(&self, component_name: &str) -> PathBuf {
        self.tmp_dir.join(format!("{}.d.ts", component_name))
    }

    pub fn raw_data_path(&self, locale: &str, kebab_name: &str) -> PathBuf {
        self.out_dir
            .join(locale)
            .join(format!("{}.json", kebab_name))
    }
}

#[derive(Serialize)]
struct RawComponentData<'a> {
    locale: &'a str,
    #[serde(flatten)]
    metadata: &'a ComponentMetadata,
}

/// Extract the metadata of one component and write its artifacts.
pub fn extract_component(
    name: &str,
    definition: &ComponentDefinition,
    ctx: &ExtractContext<'_>,
) -> Result<ComponentMetadata> {
    let mut metadata = ComponentMetadata::new(name);
    for kind in MemberKind::ALL {
        let members = metadata.members_mut(kind);
        for (member, raw) in definition.members(kind) {
            members.insert(member.clone(), MemberInfo::from_definition(raw));
        }
    }

    write_type_stub(name, ctx)?;
    write_raw_data(&metadata, ctx)?;

    Ok(metadata)
}

fn write_type_stub(name: &str, ctx: &ExtractContext<'_>) -> Result<()> {
    let path = ctx.stub_path(name);
    write_file(&path, &ctx.template.replace(COMPONENT_TOKEN, name))
}

fn write_raw_data(metadata: &ComponentMetadata, ctx: &ExtractContext<'_>) -> Result<()> {
    for locale in ctx.locales {
        let path = ctx.raw_data_path(locale, &metadata.kebab_name);
        let content = to_pretty_json(&RawComponentData { locale, metadata })
            .with_context(|| format!("Failed to serialize {}", metadata.component_name))?;
        write_file(&path, &content)?;
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
