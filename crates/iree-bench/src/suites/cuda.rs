use tracing::debug;

use super::tags::{self, presets};
use super::utils::{generate_e2e_model_run_configs, generate_module_generation_configs};
use super::{devices, execution, models, BenchmarkSuite, SuiteOutput};
use crate::definitions::{
    CompileConfig, CompileTarget, DeviceArchitecture, TargetAbi, TargetBackend,
};
use crate::errors::BenchResult;

const SM80_COMPILE_CONFIG_ID: &str = "09cb5300-7f73-45cf-9f68-e114c77ca030";

pub struct LinuxCudaBenchmarks {}

impl LinuxCudaBenchmarks {
    pub fn new() -> Self {
        LinuxCudaBenchmarks {}
    }

    fn sm80_compile_config() -> BenchResult<CompileConfig> {
        CompileConfig::build(
            SM80_COMPILE_CONFIG_ID,
            vec![tags::DEFAULT_FLAGS.to_string()],
            vec![CompileTarget::new(
                TargetBackend::Cuda,
                DeviceArchitecture::CudaSm80,
                TargetAbi::LinuxGnu,
            )],
            Vec::new(),
        )
    }
}

impl Default for LinuxCudaBenchmarks {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchmarkSuite for LinuxCudaBenchmarks {
    fn name(&self) -> &str {
        "linux-cuda"
    }

    fn generate(&self) -> BenchResult<SuiteOutput> {
        let compile_config = Self::sm80_compile_config()?;
        let small_models =
            models::import_all(&[models::MOBILEBERT_FP32, models::MOBILENET_V2_FP32])?;
        let large_models = models::import_all(models::LARGE_MODELS)?;

        let mut gen_configs =
            generate_module_generation_configs(&small_models, &compile_config, &[presets::CUDA])?;
        gen_configs.extend(generate_module_generation_configs(
            &large_models,
            &compile_config,
            &[presets::CUDA_LARGE],
        )?);

        let run_configs = generate_e2e_model_run_configs(
            &gen_configs,
            &[execution::cuda()?],
            &[devices::gcp_a2_highgpu_1g_cuda()?],
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
