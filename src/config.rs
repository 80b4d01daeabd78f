use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".apigenrc.json";

/// Where placeholder descriptions point readers to fill in the missing text.
pub const DEFAULT_EDIT_URL_BASE: &str =
    "https://github.com/vuetifyjs/vuetify/tree/next/packages/api-generator/src/locale";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
    #[serde(default = "default_locale_root")]
    pub locale_root: String,
    #[serde(default = "default_manifest")]
    pub manifest: String,
    #[serde(default = "default_template")]
    pub template: String,
    #[serde(default = "default_tmp_dir")]
    pub tmp_dir: String,
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
    #[serde(default = "default_edit_url_base")]
    pub edit_url_base: String,
}

fn default_locales() -> Vec<String> {
    vec!["en".to_string()]
}

fn default_locale_root() -> String {
    "./src/locale".to_string()
}

fn default_manifest() -> String {
    "./src/components.json".to_string()
}

fn default_template() -> String {
    "./src/template.d.ts".to_string()
}

fn default_tmp_dir() -> String {
    "./src/tmp".to_string()
}

fn default_out_dir() -> String {
    "./dist/api".to_string()
}

fn default_edit_url_base() -> String {
    DEFAULT_EDIT_URL_BASE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales: default_locales(),
            locale_root: default_locale_root(),
            manifest: default_manifest(),
            template: default_template(),
            tmp_dir: default_tmp_dir(),
            out_dir: default_out_dir(),
            edit_url_base: default_edit_url_base(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Locales become directory names, so they must be non-empty and must not
    /// escape the locale root.
    pub fn validate(&self) -> Result<()> {
        if self.locales.is_empty() {
            bail!("'locales' must contain at least one locale");
        }

        for locale in &self.locales {
            if locale.is_empty()
                || locale.contains('/')
                || locale.contains('\\')
                || locale.contains("..")
            {
                bail!("Invalid locale in 'locales': \"{}\"", locale);
            }
        }

        Ok(())
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory that relative paths in the config resolve against.
    pub root: PathBuf,
}

impl ConfigLoadResult {
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                root,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            root: start_dir.to_path_buf(),
        }),
    }
}
