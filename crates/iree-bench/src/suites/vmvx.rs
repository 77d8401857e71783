use tracing::debug;

use super::tags::{self, presets};
use super::utils::{generate_e2e_model_run_configs, generate_module_generation_configs};
use super::{devices, execution, models, BenchmarkSuite, SuiteOutput};
use crate::definitions::{
    CompileConfig, CompileTarget, DeviceArchitecture, TargetAbi, TargetBackend,
};
use crate::errors::BenchResult;

const VMVX_COMPILE_CONFIG_ID: &str = "75336abd-8108-462c-9ce3-15443e3f32f4";

/// Reference interpreter benchmarks on Android CPUs
pub struct AndroidVmvxBenchmarks {}

impl AndroidVmvxBenchmarks {
    pub fn new() -> Self {
        AndroidVmvxBenchmarks {}
    }
}

impl Default for AndroidVmvxBenchmarks {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchmarkSuite for AndroidVmvxBenchmarks {
    fn name(&self) -> &str {
        "android-vmvx"
    }

    fn generate(&self) -> BenchResult<SuiteOutput> {
        let compile_config = CompileConfig::build(
            VMVX_COMPILE_CONFIG_ID,
            vec![
                tags::EXPERIMENTAL_FLAGS.to_string(),
                tags::MICROKERNELS.to_string(),
            ],
            vec![CompileTarget::new(
                TargetBackend::Vmvx,
                DeviceArchitecture::VmvxGeneric,
                TargetAbi::Vmvx,
            )],
            vec!["--iree-vmvx-enable-microkernels".to_string()],
        )?;
        let imported = models::import_all(models::QUANTIZED_MODELS)?;
        let gen_configs =
            generate_module_generation_configs(&imported, &compile_config, &[presets::VMVX])?;
        let run_configs = generate_e2e_model_run_configs(
            &gen_configs,
            &[execution::vmvx_local_task(4)?],
            &[devices::pixel_6_pro_big_cores()?],
            &[],
        );

        debug!(
            suite = self.name(),
            gen_configs = gen_configs.len(),
            run_configs = run_configs.len(),
            "Generated suite"
        );
        Ok((gen_configs, run_configs))
    }
}
