use anyhow::{Context, Result};
use iree_bench::{BenchmarkCatalog, BenchmarkSuite, CatalogFormat, SuiteFactory};
use tracing::info;

use crate::config::Settings;

/// Instantiate the configured suites, or every registered suite when none is named.
pub fn selected_suites(settings: &Settings) -> Result<Vec<Box<dyn BenchmarkSuite>>> {
    if settings.suites.is_empty() {
        return Ok(SuiteFactory::default_suites());
    }
    SuiteFactory::select(&settings.suites).context("Failed to select benchmark suites")
}

pub fn build_catalog(settings: &Settings) -> Result<BenchmarkCatalog> {
    let suites = selected_suites(settings)?;
    let catalog =
        BenchmarkCatalog::generate(&suites).context("Failed to generate benchmark catalog")?;
    if settings.compile_stats {
        Ok(catalog)
    } else {
        Ok(catalog.without_compile_stats())
    }
}

pub fn handle_generate(settings: &Settings) -> Result<()> {
    let format: CatalogFormat = settings.format.parse()?;
    let catalog = build_catalog(settings)?;

    match &settings.output {
        Some(path) => {
            catalog
                .save(path, format)
                .with_context(|| format!("Failed to write catalog to {}", path.display()))?;
            let summary = catalog.summary();
            info!(
                path = %path.display(),
                gen_configs = summary.module_generation_configs,
                run_configs = summary.run_configs,
                "Wrote benchmark catalog"
            );
        }
        None => println!("{}", catalog.to_text(format)?),
    }
    Ok(())
}
