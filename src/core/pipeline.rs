//! End-to-end generation run.
//!
//! 1. **Enumerate**: read component definitions from the [`ComponentSource`]
//! 2. **Extract**: one task per component on the bounded pool, results in
//!    enumeration order; any failure aborts the run
//! 3. **Merge**: sequentially fill missing descriptions in the locale files
//! 4. **Flush**: write every touched locale file, failures reported per file

use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::debug;

use super::{
    extract::{ExtractContext, extract_component},
    flush::{FlushReport, flush},
    merge::{MergeOptions, MergeReport, TranslationCache, merge_translations},
    pool::{Dispatcher, is_allowed},
    source::ComponentSource,
    store::TranslationStore,
};

#[derive(Debug, Clone)]
pub struct GenerateOptions<'a> {
    pub locales: &'a [String],
    pub locale_root: &'a Path,
    pub template: &'a Path,
    pub tmp_dir: &'a Path,
    pub out_dir: &'a Path,
    pub edit_url_base: &'a str,
    /// Restrict processing to these components; `None` processes all.
    pub components: Option<&'a [String]>,
    pub pool_size: usize,
}

#[derive(Debug, Default)]
pub struct GenerateSummary {
    pub pool_size: usize,
    pub components_processed: usize,
    /// Allow-list entries that match no known component.
    pub unknown_components: Vec<String>,
    pub merge: MergeReport,
    pub flush: FlushReport,
}

pub fn generate<C, S>(
    source: &C,
    store: &S,
    options: &GenerateOptions<'_>,
) -> Result<GenerateSummary>
where
    C: ComponentSource + ?Sized,
    S: TranslationStore + ?Sized,
{
    let components = source.components()?;

    let unknown_components = options
        .components
        .unwrap_or_default()
        .iter()
        .filter(|wanted| !components.iter().any(|(name, _)| name == *wanted))
        .cloned()
        .collect();

    let selected: Vec<_> = components
        .iter()
        .filter(|(name, _)| is_allowed(name, options.components))
        .collect();
    debug!(
        "Selected {} of {} component(s)",
        selected.len(),
        components.len()
    );

    let template = fs::read_to_string(options.template).with_context(|| {
        format!(
            "Failed to read declaration template: {}",
            options.template.display()
        )
    })?;

    let ctx = ExtractContext {
        template: &template,
        locales: options.locales,
        tmp_dir: options.tmp_dir,
        out_dir: options.out_dir,
    };

    let dispatcher = Dispatcher::new(options.pool_size)?;
    let metadata = dispatcher.run(&selected, |(name, definition)| {
        extract_component(name, definition, &ctx)
            .with_context(|| format!("Failed to extract component {}", name))
    })?;
    debug!("Extracted {} component(s)", metadata.len());

    let mut cache = TranslationCache::new();
    let merge = merge_translations(
        &metadata,
        &mut cache,
        store,
        &MergeOptions {
            locale_root: options.locale_root,
            locales: options.locales,
            edit_url_base: options.edit_url_base,
        },
    );
    debug!(
        "Merged into {} locale file(s), {} placeholder(s) added",
        cache.len(),
        merge.placeholders_inserted
    );

    let flush = flush(&cache, store);

    Ok(GenerateSummary {
        pool_size: dispatcher.size(),
        components_processed: metadata.len(),
        unknown_components,
        merge,
        flush,
    })
}
