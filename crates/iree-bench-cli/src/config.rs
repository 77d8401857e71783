use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

const ENV_PREFIX: &str = "IREE_BENCH";

/// Settings shared by the subcommands
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// Where to write the catalog, stdout when unset
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default = "default_format")]
    pub format: String,
    /// Suites to generate, every registered suite when empty
    #[serde(default)]
    pub suites: Vec<String>,
    #[serde(default = "default_compile_stats")]
    pub compile_stats: bool,
    /// Root that module directories are resolved against
    #[serde(default = "default_module_root")]
    pub module_root: PathBuf,
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: None,
            format: default_format(),
            suites: Vec::new(),
            compile_stats: default_compile_stats(),
            module_root: default_module_root(),
            log_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from defaults, an optional config file and then
    /// `IREE_BENCH_*` environment variables, in increasing precedence.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("format", default_format())?
            .set_default("compile_stats", default_compile_stats())?
            .set_default("module_root", default_module_root().to_string_lossy().to_string())?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("suites")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        let settings: Settings = config
            .try_deserialize()
            .context("Failed to parse configuration")?;
        tracing::debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }
}

fn default_format() -> String {
    "json".to_string()
}

fn default_compile_stats() -> bool {
    true
}

fn default_module_root() -> PathBuf {
    PathBuf::from("modules")
}
