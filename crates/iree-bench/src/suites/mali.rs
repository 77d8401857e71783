use tracing::debug;

use super::tags::{self, presets};
use super::utils::{generate_e2e_model_run_configs, generate_module_generation_configs};
use super::{devices, execution, models, BenchmarkSuite, SuiteOutput};
use crate::definitions::{
    CompileConfig, CompileTarget, DeviceArchitecture, TargetAbi, TargetBackend,
};
use crate::errors::BenchResult;

const DEFAULT_COMPILE_CONFIG_ID: &str = "8da35f2b-a042-4b7d-9dcf-5ebbc1728765";
const FUSE_PADDING_COMPILE_CONFIG_ID: &str = "32a56c8d-cc6c-41b8-8620-1f8eda0b8223";
const FUSE_PADDING_REPEATED_KERNEL_COMPILE_CONFIG_ID: &str = "6b601a8d-4824-42e0-bcc6-500c0c3fa346";
const FP16_COMPILE_CONFIG_ID: &str = "1a7ba4c0-3b51-4d0c-9a8e-79e5e8e4f6d2";

const REPEATED_KERNEL_COUNT: u32 = 32;

/// Vulkan benchmarks on ARM Mali (Valhall) GPUs
pub struct AndroidMaliBenchmarks {}

impl AndroidMaliBenchmarks {
    pub fn new() -> Self {
        AndroidMaliBenchmarks {}
    }

    fn compile_target() -> CompileTarget {
        CompileTarget::new(
            TargetBackend::VulkanSpirv,
            DeviceArchitecture::ArmValhall,
            TargetAbi::LinuxAndroid31,
        )
    }

    fn build_config(
        id: &str,
        config_tags: &[&str],
        flags: &[String],
    ) -> BenchResult<CompileConfig> {
        CompileConfig::build(
            id,
            config_tags.iter().map(|t| t.to_string()).collect(),
            vec![Self::compile_target()],
            flags.to_vec(),
        )
    }
}

impl Default for AndroidMaliBenchmarks {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchmarkSuite for AndroidMaliBenchmarks {
    fn name(&self) -> &str {
        "android-mali"
    }

    fn generate(&self) -> BenchResult<SuiteOutput> {
        let fuse_padding_flag =
            "--iree-flow-enable-fuse-padding-into-linalg-consumer-ops".to_string();
        let default_config =
            Self::build_config(DEFAULT_COMPILE_CONFIG_ID, &[tags::DEFAULT_FLAGS], &[])?;
        let fuse_padding_config = Self::build_config(
            FUSE_PADDING_COMPILE_CONFIG_ID,
            &[tags::EXPERIMENTAL_FLAGS, tags::FUSE_PADDING],
            &[fuse_padding_flag.clone()],
        )?;
        let repeated_kernel_config = Self::build_config(
            FUSE_PADDING_REPEATED_KERNEL_COMPILE_CONFIG_ID,
            &[
                tags::EXPERIMENTAL_FLAGS,
                tags::FUSE_PADDING,
                tags::REPEATED_KERNEL,
            ],
            &[
                fuse_padding_flag.clone(),
                format!(
                    "--iree-hal-benchmark-dispatch-repeat-count={}",
                    REPEATED_KERNEL_COUNT
                ),
            ],
        )?;
        let fp16_config = Self::build_config(
            FP16_COMPILE_CONFIG_ID,
            &[
                tags::EXPERIMENTAL_FLAGS,
                tags::FUSE_PADDING,
                tags::DEMOTE_F32_TO_F16,
            ],
            &[fuse_padding_flag, "--iree-flow-demote-f32-to-f16".to_string()],
        )?;

        let fp32_models = models::import_all(models::SMALL_GPU_MODELS)?;
        let fp16_models = models::import_all(&[models::MOBILEBERT_FP16])?;

        let mut gen_configs = Vec::new();
        for config in [&default_config, &fuse_padding_config] {
            gen_configs.extend(generate_module_generation_configs(
                &fp32_models,
                config,
                &[presets::ANDROID_GPU],
            )?);
        }
        gen_configs.extend(generate_module_generation_configs(
            &fp16_models,
            &fp16_config,
            &[presets::ANDROID_GPU],
        )?);
        let repeated_kernel_gen_configs = generate_module_generation_configs(
            &fp32_models,
            &repeated_kernel_config,
            &[presets::ANDROID_GPU],
        )?;

        let device_specs = vec![devices::pixel_6_pro_gpu()?];
        let mut run_configs = generate_e2e_model_run_configs(
            &gen_configs,
            &[execution::vulkan()?],
            &device_specs,
            &[],
        );
        run_configs.extend(generate_e2e_model_run_configs(
            &repeated_kernel_gen_configs,
            &[execution::vulkan_batched(REPEATED_KERNEL_COUNT)?],
            &device_specs,
            &[],
        ));
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
