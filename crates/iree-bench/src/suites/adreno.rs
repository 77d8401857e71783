use tracing::debug;

use super::tags::{self, presets};
use super::utils::{generate_e2e_model_run_configs, generate_module_generation_configs};
use super::{devices, execution, models, BenchmarkSuite, SuiteOutput};
use crate::definitions::{
    CompileConfig, CompileTarget, DeviceArchitecture, TargetAbi, TargetBackend,
};
use crate::errors::BenchResult;

const DEFAULT_COMPILE_CONFIG_ID: &str = "c7eea358-d8d2-4199-9d75-bb741c399b1b";
const FUSE_PADDING_COMPILE_CONFIG_ID: &str = "d3038b95-c889-456a-bff6-5cbabd10f1ad";
const FUSE_PADDING_REPEATED_KERNEL_COMPILE_CONFIG_ID: &str = "70b823ca-2807-4531-8c00-e02af7d70466";

const REPEATED_KERNEL_COUNT: u32 = 16;

/// Vulkan benchmarks on Qualcomm Adreno GPUs
pub struct AndroidAdrenoBenchmarks {}

impl AndroidAdrenoBenchmarks {
    pub fn new() -> Self {
        AndroidAdrenoBenchmarks {}
    }

    fn compile_target() -> CompileTarget {
        CompileTarget::new(
            TargetBackend::VulkanSpirv,
            DeviceArchitecture::QualcommAdreno,
            TargetAbi::LinuxAndroid31,
        )
    }
}

impl Default for AndroidAdrenoBenchmarks {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchmarkSuite for AndroidAdrenoBenchmarks {
    fn name(&self) -> &str {
        "android-adreno"
    }

    fn generate(&self) -> BenchResult<SuiteOutput> {
        let fuse_padding_flag =
            "--iree-flow-enable-fuse-padding-into-linalg-consumer-ops".to_string();
        let default_config = CompileConfig::build(
            DEFAULT_COMPILE_CONFIG_ID,
            vec![tags::DEFAULT_FLAGS.to_string()],
            vec![Self::compile_target()],
            Vec::new(),
        )?;
        let fuse_padding_config = CompileConfig::build(
            FUSE_PADDING_COMPILE_CONFIG_ID,
            vec![
                tags::EXPERIMENTAL_FLAGS.to_string(),
                tags::FUSE_PADDING.to_string(),
            ],
            vec![Self::compile_target()],
            vec![fuse_padding_flag.clone()],
        )?;
        let repeated_kernel_config = CompileConfig::build(
            FUSE_PADDING_REPEATED_KERNEL_COMPILE_CONFIG_ID,
            vec![
                tags::EXPERIMENTAL_FLAGS.to_string(),
                tags::FUSE_PADDING.to_string(),
                tags::REPEATED_KERNEL.to_string(),
            ],
            vec![Self::compile_target()],
            vec![
                fuse_padding_flag,
                format!(
                    "--iree-hal-benchmark-dispatch-repeat-count={}",
                    REPEATED_KERNEL_COUNT
                ),
            ],
        )?;

        let imported = models::import_all(models::SMALL_GPU_MODELS)?;
        let default_gen_configs = generate_module_generation_configs(
            &imported,
            &default_config,
            &[presets::ANDROID_GPU],
        )?;
        let fuse_padding_gen_configs = generate_module_generation_configs(
            &imported,
            &fuse_padding_config,
            &[presets::ANDROID_GPU],
        )?;
        let repeated_kernel_gen_configs = generate_module_generation_configs(
            &imported,
            &repeated_kernel_config,
            &[presets::ANDROID_GPU],
        )?;

        let device_specs = vec![devices::moto_edge_x30_gpu()?];
        let mut run_configs = Vec::new();
        for gen_configs in [&default_gen_configs, &fuse_padding_gen_configs] {
            run_configs.extend(generate_e2e_model_run_configs(
                gen_configs,
                &[execution::vulkan()?],
                &device_specs,
                &[],
            ));
        }
        run_configs.extend(generate_e2e_model_run_configs(
            &repeated_kernel_gen_configs,
            &[execution::vulkan_batched(REPEATED_KERNEL_COUNT)?],
            &device_specs,
            &[],
        ));

        let mut gen_configs = default_gen_configs;
        gen_configs.extend(fuse_padding_gen_configs);
        gen_configs.extend(repeated_kernel_gen_configs);

        debug!(
            suite = self.name(),
            gen_configs = gen_configs.len(),
            run_configs = run_configs.len(),
            "Generated suite"
        );
        Ok((gen_configs, run_configs))
    }
}
