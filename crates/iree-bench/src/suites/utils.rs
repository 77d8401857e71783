use crate::definitions::{
    BenchmarkToolType, CompileConfig, DeviceSpec, E2EModelRunConfig, ImportedModel,
    ModelInputData, ModuleExecutionConfig, ModuleGenerationConfig,
};
use crate::errors::BenchResult;

/// Compile every model with `compile_config`, tagging each module with `tags`.
pub fn generate_module_generation_configs(
    models: &[ImportedModel],
    compile_config: &CompileConfig,
    tags: &[&str],
) -> BenchResult<Vec<ModuleGenerationConfig>> {
    models
        .iter()
        .map(|model| {
            ModuleGenerationConfig::build(
                model.clone(),
                compile_config.clone(),
                tags.iter().map(|t| t.to_string()).collect(),
            )
        })
        .collect()
}

/// Run every module with every execution config on every device.
///
/// Output order is modules outermost, then execution configs, then devices.
pub fn generate_e2e_model_run_configs(
    module_generation_configs: &[ModuleGenerationConfig],
    module_execution_configs: &[ModuleExecutionConfig],
    device_specs: &[DeviceSpec],
    tags: &[&str],
) -> Vec<E2EModelRunConfig> {
    let mut run_configs = Vec::with_capacity(
        module_generation_configs.len() * module_execution_configs.len() * device_specs.len(),
    );
    for gen_config in module_generation_configs {
        for exec_config in module_execution_configs {
            for device_spec in device_specs {
                run_configs.push(E2EModelRunConfig::build(
                    gen_config.clone(),
                    exec_config.clone(),
                    device_spec.clone(),
                    ModelInputData::zeros(),
                    BenchmarkToolType::IreeBenchmarkModule,
                    tags.iter().map(|t| t.to_string()).collect(),
                ));
            }
        }
    }
    run_configs
}
