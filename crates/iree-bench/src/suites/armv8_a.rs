use tracing::debug;

use super::tags::{self, presets};
use super::utils::{generate_e2e_model_run_configs, generate_module_generation_configs};
use super::{devices, execution, models, BenchmarkSuite, SuiteOutput};
use crate::definitions::{
    CompileConfig, CompileTarget, DeviceArchitecture, TargetAbi, TargetBackend,
};
use crate::errors::BenchResult;

const DEFAULT_COMPILE_CONFIG_ID: &str = "1f2adf49-282e-4aff-9d4f-e63b1621f1e8";
const MMT4D_COMPILE_CONFIG_ID: &str = "d463322c-24e6-4685-85ca-d541b41a405f";
const MMT4D_DOTPROD_COMPILE_CONFIG_ID: &str = "f672a6b9-99fc-47ce-8b1b-8e5f44a541a1";

/// CPU benchmarks on Android phones with ARMv8.2-A cores
pub struct AndroidArmv8ABenchmarks {}

impl AndroidArmv8ABenchmarks {
    pub fn new() -> Self {
        AndroidArmv8ABenchmarks {}
    }

    fn compile_target() -> CompileTarget {
        CompileTarget::new(
            TargetBackend::LlvmCpu,
            DeviceArchitecture::Armv8_2AGeneric,
            TargetAbi::LinuxAndroid29,
        )
    }

    fn compile_configs() -> BenchResult<Vec<CompileConfig>> {
        let data_tiling_flags = vec![
            "--iree-opt-data-tiling".to_string(),
            "--iree-llvmcpu-enable-microkernels".to_string(),
        ];
        let mut dotprod_flags = data_tiling_flags.clone();
        dotprod_flags.push("--iree-llvmcpu-target-cpu-features=+dotprod".to_string());

        Ok(vec![
            CompileConfig::build(
                DEFAULT_COMPILE_CONFIG_ID,
                vec![tags::DEFAULT_FLAGS.to_string()],
                vec![Self::compile_target()],
                Vec::new(),
            )?,
            CompileConfig::build(
                MMT4D_COMPILE_CONFIG_ID,
                vec![tags::EXPERIMENTAL_FLAGS.to_string(), tags::MMT4D.to_string()],
                vec![Self::compile_target()],
                data_tiling_flags,
            )?,
            CompileConfig::build(
                MMT4D_DOTPROD_COMPILE_CONFIG_ID,
                vec![
                    tags::EXPERIMENTAL_FLAGS.to_string(),
                    tags::MMT4D.to_string(),
                    tags::DOTPROD.to_string(),
                ],
                vec![Self::compile_target()],
                dotprod_flags,
            )?,
        ])
    }
}

impl Default for AndroidArmv8ABenchmarks {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchmarkSuite for AndroidArmv8ABenchmarks {
    fn name(&self) -> &str {
        "android-armv8-a"
    }

    fn generate(&self) -> BenchResult<SuiteOutput> {
        let imported = models::import_all(models::SMALL_CPU_MODELS)?;
        let mut gen_configs = Vec::new();
        for config in Self::compile_configs()? {
            gen_configs.extend(generate_module_generation_configs(
                &imported,
                &config,
                &[presets::ANDROID_CPU],
            )?);
        }

        let mut run_configs = generate_e2e_model_run_configs(
            &gen_configs,
            &[
                execution::elf_local_sync()?,
                execution::elf_local_task(1)?,
                execution::elf_local_task(4)?,
            ],
            &[
                devices::pixel_6_pro_big_cores()?,
                devices::moto_edge_x30_big_cores()?,
            ],
            &[],
        );
        // Little cores are too slow for the multi-threaded configs.
        run_configs.extend(generate_e2e_model_run_configs(
            &gen_configs,
            &[execution::elf_local_sync()?],
            &[devices::pixel_6_pro_little_cores()?],
            &[],
        ));

        debug!(
            suite = self.name(),
            gen_configs = gen_configs.len(),
            run_configs = run_configs.len(),
            "Generated suite"
        );
        Ok((gen_configs, run_configs))
    }
}
