use anyhow::{anyhow, Result};
use iree_bench::artifacts::module_dir_path;
use iree_bench::BenchmarkCatalog;

use super::generate::build_catalog;
use crate::config::Settings;

/// Compile flags of one module with its output directory filled in.
pub fn module_compile_flags(
    catalog: &BenchmarkCatalog,
    composite_id: &str,
    settings: &Settings,
) -> Result<Vec<String>> {
    let gen_config = catalog
        .find_module(composite_id)
        .ok_or_else(|| anyhow!("No module generation config with id '{}'", composite_id))?;
    let module_dir = module_dir_path(&settings.module_root, gen_config);
    Ok(gen_config.materialize_compile_flags(&module_dir.to_string_lossy()))
}

pub fn handle_flags(composite_id: &str, settings: &Settings) -> Result<()> {
    let catalog = build_catalog(settings)?;
    for flag in module_compile_flags(&catalog, composite_id, settings)? {
        println!("{}", flag);
    }
    Ok(())
}
