use tracing::debug;

use super::tags::{self, presets};
use super::utils::{generate_e2e_model_run_configs, generate_module_generation_configs};
use super::{devices, execution, models, BenchmarkSuite, SuiteOutput};
use crate::definitions::{
    CompileConfig, CompileTarget, DeviceArchitecture, TargetAbi, TargetBackend,
};
use crate::errors::BenchResult;

const SIMT_COMPILE_CONFIG_ID: &str = "3f7a0a55-ff66-4e58-9c43-9a5ab5b5f07c";
const TENSORCORE_COMPILE_CONFIG_ID: &str = "e5a6f4a3-2d5c-4a51-9d3a-27a6fd0c3d11";

/// Vulkan benchmarks on NVIDIA Ampere GPUs
pub struct LinuxVulkanNvidiaBenchmarks {}

impl LinuxVulkanNvidiaBenchmarks {
    pub fn new() -> Self {
        LinuxVulkanNvidiaBenchmarks {}
    }

    fn compile_target() -> CompileTarget {
        CompileTarget::new(
            TargetBackend::VulkanSpirv,
            DeviceArchitecture::NvidiaAmpere,
            TargetAbi::LinuxGnu,
        )
    }
}

impl Default for LinuxVulkanNvidiaBenchmarks {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchmarkSuite for LinuxVulkanNvidiaBenchmarks {
    fn name(&self) -> &str {
        "linux-vulkan-nvidia"
    }

    fn generate(&self) -> BenchResult<SuiteOutput> {
        let simt_config = CompileConfig::build(
            SIMT_COMPILE_CONFIG_ID,
            vec![tags::DEFAULT_FLAGS.to_string(), tags::SIMT.to_string()],
            vec![Self::compile_target()],
            Vec::new(),
        )?;
        let tensorcore_config = CompileConfig::build(
            TENSORCORE_COMPILE_CONFIG_ID,
            vec![
                tags::EXPERIMENTAL_FLAGS.to_string(),
                tags::TENSORCORE.to_string(),
            ],
            vec![Self::compile_target()],
            vec!["--iree-spirv-enable-cooperative-matrix".to_string()],
        )?;

        let imported = models::import_all(&[
            models::BERT_LARGE_TF_FP32_SEQLEN384,
            models::RESNET50_TF_FP32,
            models::EFFICIENTNET_V2_S_TF_FP32,
        ])?;
        let mut gen_configs = Vec::new();
        for config in [&simt_config, &tensorcore_config] {
            gen_configs.extend(generate_module_generation_configs(
                &imported,
                config,
                &[presets::VULKAN_NVIDIA],
            )?);
        }

        let run_configs = generate_e2e_model_run_configs(
            &gen_configs,
            &[execution::vulkan()?],
            &[devices::gcp_a2_highgpu_1g_vulkan()?],
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
