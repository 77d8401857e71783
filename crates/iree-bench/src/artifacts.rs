use std::path::{Path, PathBuf};

use crate::definitions::ModuleGenerationConfig;

pub const ARTIFACT_PREFIX: &str = "iree";
pub const MODULE_FILENAME: &str = "module.vmfb";
pub const SCHEDULING_STATS_FILENAME: &str = "scheduling_stats.json";

/// Directory holding the compiled module and its side outputs
pub fn module_dir_path(root: &Path, gen_config: &ModuleGenerationConfig) -> PathBuf {
    root.join(format!(
        "{}_{}_module_{}",
        ARTIFACT_PREFIX, gen_config.imported_model.model.name, gen_config.composite_id
    ))
}

pub fn module_path(root: &Path, gen_config: &ModuleGenerationConfig) -> PathBuf {
    module_dir_path(root, gen_config).join(MODULE_FILENAME)
}
