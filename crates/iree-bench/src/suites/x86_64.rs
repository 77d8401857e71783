use tracing::debug;

use super::tags::{self, presets};
use super::utils::{generate_e2e_model_run_configs, generate_module_generation_configs};
use super::{devices, execution, models, BenchmarkSuite, SuiteOutput};
use crate::definitions::{
    CompileConfig, CompileTarget, DeviceArchitecture, TargetAbi, TargetBackend,
};
use crate::errors::BenchResult;

const DEFAULT_COMPILE_CONFIG_ID: &str = "e7e18b0f-c72d-4f1c-89b1-5afee70df6e9";
const EXPERIMENTAL_COMPILE_CONFIG_ID: &str = "6d0d5716-5525-44ad-b71d-8075ee1583a6";

/// CPU benchmarks on a cascadelake Linux host
pub struct LinuxX86_64Benchmarks {}

impl LinuxX86_64Benchmarks {
    pub fn new() -> Self {
        LinuxX86_64Benchmarks {}
    }

    fn compile_target() -> CompileTarget {
        CompileTarget::new(
            TargetBackend::LlvmCpu,
            DeviceArchitecture::X86_64Cascadelake,
            TargetAbi::LinuxGnu,
        )
    }

    fn default_compile_config() -> BenchResult<CompileConfig> {
        CompileConfig::build(
            DEFAULT_COMPILE_CONFIG_ID,
            vec![tags::DEFAULT_FLAGS.to_string()],
            vec![Self::compile_target()],
            Vec::new(),
        )
    }

    fn experimental_compile_config() -> BenchResult<CompileConfig> {
        CompileConfig::build(
            EXPERIMENTAL_COMPILE_CONFIG_ID,
            vec![
                tags::EXPERIMENTAL_FLAGS.to_string(),
                tags::DATA_TILING.to_string(),
                tags::MICROKERNELS.to_string(),
            ],
            vec![Self::compile_target()],
            vec![
                "--iree-opt-data-tiling".to_string(),
                "--iree-llvmcpu-enable-microkernels".to_string(),
            ],
        )
    }
}

impl Default for LinuxX86_64Benchmarks {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchmarkSuite for LinuxX86_64Benchmarks {
    fn name(&self) -> &str {
        "linux-x86_64"
    }

    fn generate(&self) -> BenchResult<SuiteOutput> {
        let default_config = Self::default_compile_config()?;
        let experimental_config = Self::experimental_compile_config()?;
        let small_models = models::import_all(models::SMALL_CPU_MODELS)?;
        let large_models = models::import_all(models::LARGE_MODELS)?;

        let mut gen_configs = Vec::new();
        for config in [&default_config, &experimental_config] {
            gen_configs.extend(generate_module_generation_configs(
                &small_models,
                config,
                &[presets::X86_64],
            )?);
        }
        let large_gen_configs = generate_module_generation_configs(
            &large_models,
            &experimental_config,
            &[presets::X86_64_LARGE],
        )?;
        gen_configs.extend(large_gen_configs);

        let exec_configs = vec![
            execution::elf_local_sync()?,
            execution::elf_local_task(1)?,
            execution::elf_local_task(4)?,
            execution::elf_local_task(8)?,
        ];
        let device_specs = vec![devices::gcp_c2_standard_16()?];
        let run_configs =
            generate_e2e_model_run_configs(&gen_configs, &exec_configs, &device_specs, &[]);

        debug!(
            suite = self.name(),
            gen_configs = gen_configs.len(),
            run_configs = run_configs.len(),
            "Generated suite"
        );
        Ok((gen_configs, run_configs))
    }
}
