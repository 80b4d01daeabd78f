use std::env;

use anyhow::{Context, Result};
use log::debug;

use super::args::Arguments;
use crate::{
    config::{CONFIG_FILE_NAME, load_config},
    core::{FsStore, GenerateOptions, GenerateSummary, ManifestSource, PoolProbe, generate},
};

/// Run generation in the current working directory.
///
/// Configuration comes from the nearest `.apigenrc.json` (or defaults);
/// relative paths resolve against the directory holding it.
pub fn run(args: &Arguments) -> Result<GenerateSummary> {
    let cwd = env::current_dir().context("Failed to determine the working directory")?;
    let loaded = load_config(&cwd)?;
    if !loaded.from_file {
        debug!("No {} found, using default configuration", CONFIG_FILE_NAME);
    }
    let config = &loaded.config;

    let probe = PoolProbe::detect();
    debug!(
        "cpus: {}, free memory: {} bytes, inspecting: {}",
        probe.cpus, probe.free_memory, probe.inspecting
    );

    let locale_root = loaded.resolve(&config.locale_root);
    let template = loaded.resolve(&config.template);
    let tmp_dir = loaded.resolve(&config.tmp_dir);
    let out_dir = loaded.resolve(&config.out_dir);
    let source = ManifestSource::new(loaded.resolve(&config.manifest));
    debug!("Reading components from {}", source.path().display());

    generate(
        &source,
        &FsStore,
        &GenerateOptions {
            locales: &config.locales,
            locale_root: &locale_root,
            template: &template,
            tmp_dir: &tmp_dir,
            out_dir: &out_dir,
            edit_url_base: &config.edit_url_base,
            components: args.components.as_deref(),
            pool_size: probe.pool_size(),
        },
    )
}
