use tracing::debug;

use super::tags::{self, presets};
use super::utils::{generate_e2e_model_run_configs, generate_module_generation_configs};
use super::{devices, execution, models, BenchmarkSuite, SuiteOutput};
use crate::definitions::{
    CompileConfig, CompileTarget, DeviceArchitecture, TargetAbi, TargetBackend,
};
use crate::errors::BenchResult;

const RV64_COMPILE_CONFIG_ID: &str = "cdf579a9-5446-403b-a991-802a6c702e65";
const RV32_COMPILE_CONFIG_ID: &str = "6d9ce240-ec14-4d8f-a8e4-1b20aa17b4e4";

fn riscv_compile_config(id: &str, architecture: DeviceArchitecture) -> BenchResult<CompileConfig> {
    CompileConfig::build(
        id,
        vec![tags::DEFAULT_FLAGS.to_string()],
        vec![CompileTarget::new(
            TargetBackend::LlvmCpu,
            architecture,
            TargetAbi::LinuxGnu,
        )],
        Vec::new(),
    )
}

/// 64-bit RISC-V benchmarks, run under emulation
pub struct LinuxRv64Benchmarks {}

impl LinuxRv64Benchmarks {
    pub fn new() -> Self {
        LinuxRv64Benchmarks {}
    }
}

impl Default for LinuxRv64Benchmarks {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchmarkSuite for LinuxRv64Benchmarks {
    fn name(&self) -> &str {
        "linux-rv64"
    }

    fn generate(&self) -> BenchResult<SuiteOutput> {
        let compile_config =
            riscv_compile_config(RV64_COMPILE_CONFIG_ID, DeviceArchitecture::Rv64Generic)?;
        let imported = models::import_all(&[
            models::DEEPLAB_V3_FP32,
            models::MOBILEBERT_FP32,
            models::MOBILEBERT_INT8,
            models::MOBILENET_V2_FP32,
            models::PERSON_DETECT_INT8,
            models::EFFICIENTNET_INT8,
        ])?;
        let gen_configs =
            generate_module_generation_configs(&imported, &compile_config, &[presets::RISCV])?;
        let run_configs = generate_e2e_model_run_configs(
            &gen_configs,
            &[execution::elf_local_sync()?],
            &[devices::emulator_riscv_64()?],
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

/// 32-bit RISC-V benchmarks. Only quantized models, the target has no double precision.
pub struct LinuxRv32Benchmarks {}

impl LinuxRv32Benchmarks {
    pub fn new() -> Self {
        LinuxRv32Benchmarks {}
    }
}

impl Default for LinuxRv32Benchmarks {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchmarkSuite for LinuxRv32Benchmarks {
    fn name(&self) -> &str {
        "linux-rv32"
    }

    fn generate(&self) -> BenchResult<SuiteOutput> {
        let compile_config =
            riscv_compile_config(RV32_COMPILE_CONFIG_ID, DeviceArchitecture::Rv32Generic)?;
        let imported = models::import_all(models::QUANTIZED_MODELS)?;
        let gen_configs =
            generate_module_generation_configs(&imported, &compile_config, &[presets::RISCV])?;
        let run_configs = generate_e2e_model_run_configs(
            &gen_configs,
            &[execution::elf_local_sync()?],
            &[devices::emulator_riscv_32()?],
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rv64_generate() {
        let (gen_configs, run_configs) = LinuxRv64Benchmarks::new().generate().unwrap();
        assert_eq!(gen_configs.len(), 6);
        assert_eq!(run_configs.len(), 6);
        assert!(gen_configs.iter().all(|config| config
            .compile_flags
            .contains(&"--iree-llvmcpu-target-triple=riscv64-pc-linux-gnu".to_string())));
    }

    #[test]
    fn test_rv32_only_quantized_models() {
        let (gen_configs, _) = LinuxRv32Benchmarks::new().generate().unwrap();
        let model_ids: Vec<_> = gen_configs
            .iter()
            .map(|config| config.imported_model.model.id.as_str())
            .collect();
        let expected: Vec<_> = models::QUANTIZED_MODELS.iter().map(|spec| spec.id).collect();
        assert_eq!(model_ids, expected);
        assert!(gen_configs[0]
            .compile_flags
            .contains(&"--iree-llvmcpu-target-abi=ilp32".to_string()));
    }
}
