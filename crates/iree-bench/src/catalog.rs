use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::collections::generate_benchmarks_from;
use crate::definitions::{E2EModelRunConfig, ModuleGenerationConfig};
use crate::errors::{BenchError, BenchResult};
use crate::suites::{tags, BenchmarkSuite};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogFormat {
    #[default]
    Json,
    Yaml,
}

impl std::str::FromStr for CatalogFormat {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(CatalogFormat::Json),
            "yaml" | "yml" => Ok(CatalogFormat::Yaml),
            other => Err(BenchError::InvalidConfig(format!(
                "unsupported catalog format '{}'",
                other
            ))),
        }
    }
}

/// Generated benchmark configs, ready to be handed to the benchmark pipeline
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BenchmarkCatalog {
    pub module_generation_configs: Vec<ModuleGenerationConfig>,
    pub run_configs: Vec<E2EModelRunConfig>,
}

/// Config counts grouped for display
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CatalogSummary {
    pub module_generation_configs: usize,
    pub compile_stats_configs: usize,
    pub run_configs: usize,
    pub modules_by_backend: BTreeMap<String, usize>,
    pub runs_by_device: BTreeMap<String, usize>,
}

impl BenchmarkCatalog {
    pub fn new(
        module_generation_configs: Vec<ModuleGenerationConfig>,
        run_configs: Vec<E2EModelRunConfig>,
    ) -> Self {
        Self {
            module_generation_configs,
            run_configs,
        }
    }

    pub fn generate(suites: &[Box<dyn BenchmarkSuite>]) -> BenchResult<Self> {
        let (gen_configs, run_configs) = generate_benchmarks_from(suites)?;
        Ok(Self::new(gen_configs, run_configs))
    }

    pub fn find_module(&self, composite_id: &str) -> Option<&ModuleGenerationConfig> {
        self.module_generation_configs
            .iter()
            .find(|config| config.composite_id == composite_id)
    }

    pub fn is_compile_stats(config: &ModuleGenerationConfig) -> bool {
        config
            .compile_config
            .tags
            .iter()
            .any(|tag| tag == tags::COMPILE_STATS)
    }

    /// Drop the compile-stats modules, keeping the suite outputs only
    pub fn without_compile_stats(mut self) -> Self {
        self.module_generation_configs
            .retain(|config| !Self::is_compile_stats(config));
        self
    }

    /// Module generation configs carrying `tag` on the module or its compile config
    pub fn modules_with_tag<'a>(
        &'a self,
        tag: &'a str,
    ) -> impl Iterator<Item = &'a ModuleGenerationConfig> + 'a {
        self.module_generation_configs.iter().filter(move |config| {
            config.tags.iter().any(|t| t == tag)
                || config.compile_config.tags.iter().any(|t| t == tag)
        })
    }

    pub fn summary(&self) -> CatalogSummary {
        let mut summary = CatalogSummary {
            module_generation_configs: self.module_generation_configs.len(),
            run_configs: self.run_configs.len(),
            ..Default::default()
        };
        for config in &self.module_generation_configs {
            if Self::is_compile_stats(config) {
                summary.compile_stats_configs += 1;
            }
            for target in &config.compile_config.compile_targets {
                *summary
                    .modules_by_backend
                    .entry(target.target_backend.as_str().to_string())
                    .or_default() += 1;
            }
        }
        for run in &self.run_configs {
            *summary
                .runs_by_device
                .entry(run.target_device_spec.to_string())
                .or_default() += 1;
        }
        summary
    }

    pub fn to_text(&self, format: CatalogFormat) -> BenchResult<String> {
        Ok(match format {
            CatalogFormat::Json => serde_json::to_string_pretty(self)?,
            CatalogFormat::Yaml => serde_yaml::to_string(self)?,
        })
    }

    pub fn from_text(content: &str, format: CatalogFormat) -> BenchResult<Self> {
        Ok(match format {
            CatalogFormat::Json => serde_json::from_str(content)?,
            CatalogFormat::Yaml => serde_yaml::from_str(content)?,
        })
    }

    pub fn save(&self, path: &Path, format: CatalogFormat) -> BenchResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_text(format)?)?;
        Ok(())
    }

    pub fn load(path: &Path, format: CatalogFormat) -> BenchResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_text(&content, format)
    }
}
