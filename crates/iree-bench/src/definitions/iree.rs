use serde::{Deserialize, Serialize};
use std::fmt;

use super::common::{DeviceArchitecture, DeviceSpec};
use super::models::{ImportedModel, MlirDialectType, ModelInputData};
use super::unique_ids::hash_composite_id;
use crate::errors::{util::ensure_non_empty, BenchError, BenchResult};

/// Placeholder for the directory a module's artifacts are written to.
///
/// Flags reference it with a POSIX `/` separator regardless of the host, and
/// it is substituted once the real module directory is known.
pub const MODULE_DIR_VARIABLE: &str = "${MODULE_DIR}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetBackend {
    #[serde(rename = "llvm-cpu")]
    LlvmCpu,
    #[serde(rename = "cuda")]
    Cuda,
    #[serde(rename = "vulkan-spirv")]
    VulkanSpirv,
    #[serde(rename = "vmvx")]
    Vmvx,
}

impl TargetBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetBackend::LlvmCpu => "llvm-cpu",
            TargetBackend::Cuda => "cuda",
            TargetBackend::VulkanSpirv => "vulkan-spirv",
            TargetBackend::Vmvx => "vmvx",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetAbi {
    Vmvx,
    LinuxGnu,
    LinuxAndroid29,
    LinuxAndroid31,
}

impl TargetAbi {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetAbi::Vmvx => "vmvx",
            TargetAbi::LinuxGnu => "linux-gnu",
            TargetAbi::LinuxAndroid29 => "linux-android29",
            TargetAbi::LinuxAndroid31 => "linux-android31",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuntimeLoader {
    EmbeddedElf,
    VmvxModule,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuntimeDriver {
    LocalSync,
    LocalTask,
    Cuda,
    Vulkan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BenchmarkToolType {
    IreeBenchmarkModule,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileTarget {
    pub target_backend: TargetBackend,
    pub target_architecture: DeviceArchitecture,
    pub target_abi: TargetAbi,
}

impl CompileTarget {
    pub fn new(
        target_backend: TargetBackend,
        target_architecture: DeviceArchitecture,
        target_abi: TargetAbi,
    ) -> Self {
        Self {
            target_backend,
            target_architecture,
            target_abi,
        }
    }

    /// Backend-specific flags that select the target triple and CPU
    fn target_flags(&self) -> BenchResult<Vec<String>> {
        let arch = self.target_architecture;
        let abi = self.target_abi.as_str();

        if self.target_backend == TargetBackend::VulkanSpirv {
            return Ok(vec![format!(
                "--iree-vulkan-target-triple={}-unknown-{}",
                arch.microarchitecture(),
                abi
            )]);
        }

        let flags = match arch {
            DeviceArchitecture::X86_64Cascadelake => vec![
                format!("--iree-llvmcpu-target-triple=x86_64-unknown-{}", abi),
                format!("--iree-llvmcpu-target-cpu={}", arch.microarchitecture()),
            ],
            DeviceArchitecture::Rv64Generic => vec![
                format!("--iree-llvmcpu-target-triple=riscv64-pc-{}", abi),
                "--iree-llvmcpu-target-cpu=generic-rv64".to_string(),
                "--iree-llvmcpu-target-abi=lp64d".to_string(),
                "--iree-llvmcpu-target-cpu-features=+m,+a,+f,+d,+zvl512b,+v".to_string(),
                "--riscv-v-fixed-length-vector-lmul-max=8".to_string(),
            ],
            DeviceArchitecture::Rv32Generic => vec![
                format!("--iree-llvmcpu-target-triple=riscv32-pc-{}", abi),
                "--iree-llvmcpu-target-cpu=generic-rv32".to_string(),
                "--iree-llvmcpu-target-abi=ilp32".to_string(),
                "--iree-llvmcpu-target-cpu-features=+m,+a,+f,+zvl512b,+zve32x".to_string(),
                "--riscv-v-fixed-length-vector-lmul-max=8".to_string(),
            ],
            DeviceArchitecture::Armv8_2AGeneric => vec![format!(
                "--iree-llvmcpu-target-triple=aarch64-none-{}",
                abi
            )],
            DeviceArchitecture::CudaSm80 => {
                if self.target_abi != TargetAbi::LinuxGnu {
                    return Err(BenchError::InvalidConfig(format!(
                        "CUDA target requires the linux-gnu ABI, got {}",
                        abi
                    )));
                }
                vec![format!(
                    "--iree-hal-cuda-llvm-target-arch={}",
                    arch.microarchitecture()
                )]
            }
            DeviceArchitecture::VmvxGeneric => Vec::new(),
            other => {
                return Err(BenchError::InvalidConfig(format!(
                    "Unsupported architecture {} for backend {}",
                    other,
                    self.target_backend.as_str()
                )))
            }
        };
        Ok(flags)
    }
}

/// Compiler invocation recipe shared by every model compiled with it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileConfig {
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub compile_targets: Vec<CompileTarget>,
    pub extra_flags: Vec<String>,
}

/// Fields to replace when deriving a new [`CompileConfig`]
#[derive(Debug, Clone, Default)]
pub struct CompileConfigOverrides {
    pub id: Option<String>,
    pub tags: Option<Vec<String>>,
    pub compile_targets: Option<Vec<CompileTarget>>,
    pub extra_flags: Option<Vec<String>>,
}

impl CompileConfig {
    pub fn build(
        id: impl Into<String>,
        tags: Vec<String>,
        compile_targets: Vec<CompileTarget>,
        extra_flags: Vec<String>,
    ) -> BenchResult<Self> {
        let id = id.into();
        ensure_non_empty(&id, "compile config id")?;
        if compile_targets.is_empty() {
            return Err(BenchError::InvalidConfig(format!(
                "compile config '{}' has no compile targets",
                id
            )));
        }
        Ok(Self {
            name: format!("[{}]", tags.join(",")),
            id,
            tags,
            compile_targets,
            extra_flags,
        })
    }

    /// Build a copy of this config with the given fields replaced.
    ///
    /// The result goes through [`CompileConfig::build`] so the name and the
    /// validation follow the new fields.
    pub fn derive(&self, overrides: CompileConfigOverrides) -> BenchResult<Self> {
        Self::build(
            overrides.id.unwrap_or_else(|| self.id.clone()),
            overrides.tags.unwrap_or_else(|| self.tags.clone()),
            overrides
                .compile_targets
                .unwrap_or_else(|| self.compile_targets.clone()),
            overrides.extra_flags.unwrap_or_else(|| self.extra_flags.clone()),
        )
    }

    fn compile_flags(&self, dialect_type: MlirDialectType) -> BenchResult<Vec<String>> {
        let target = match self.compile_targets.as_slice() {
            [target] => target,
            _ => {
                return Err(BenchError::InvalidConfig(format!(
                    "compile config '{}' must have exactly one compile target, found {}",
                    self.id,
                    self.compile_targets.len()
                )))
            }
        };

        let mut flags = vec![
            format!("--iree-hal-target-backends={}", target.target_backend.as_str()),
            format!("--iree-input-type={}", dialect_type.input_type()),
        ];
        flags.extend(target.target_flags()?);
        flags.extend(self.extra_flags.iter().cloned());
        Ok(flags)
    }
}

impl fmt::Display for CompileConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One model artifact: an imported model compiled with a compile config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleGenerationConfig {
    pub composite_id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub imported_model: ImportedModel,
    pub compile_config: CompileConfig,
    /// Full compiler command line, possibly containing [`MODULE_DIR_VARIABLE`]
    pub compile_flags: Vec<String>,
}

impl ModuleGenerationConfig {
    pub fn build(
        imported_model: ImportedModel,
        compile_config: CompileConfig,
        tags: Vec<String>,
    ) -> BenchResult<Self> {
        let composite_id = hash_composite_id(&[
            imported_model.composite_id.as_str(),
            compile_config.id.as_str(),
        ]);
        let name = format!("{}{}", imported_model, compile_config);
        let compile_flags = compile_config.compile_flags(imported_model.dialect_type)?;
        Ok(Self {
            composite_id,
            name,
            tags,
            imported_model,
            compile_config,
            compile_flags,
        })
    }

    /// Compile flags with [`MODULE_DIR_VARIABLE`] replaced by `module_dir`.
    pub fn materialize_compile_flags(&self, module_dir: &str) -> Vec<String> {
        self.compile_flags
            .iter()
            .map(|flag| flag.replace(MODULE_DIR_VARIABLE, module_dir))
            .collect()
    }
}

impl fmt::Display for ModuleGenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Runtime settings for executing a compiled module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleExecutionConfig {
    pub id: String,
    pub tags: Vec<String>,
    pub loader: RuntimeLoader,
    pub driver: RuntimeDriver,
    pub extra_flags: Vec<String>,
}

impl ModuleExecutionConfig {
    pub fn build(
        id: impl Into<String>,
        tags: Vec<String>,
        loader: RuntimeLoader,
        driver: RuntimeDriver,
        extra_flags: Vec<String>,
    ) -> BenchResult<Self> {
        let id = id.into();
        ensure_non_empty(&id, "module execution config id")?;
        Ok(Self {
            id,
            tags,
            loader,
            driver,
            extra_flags,
        })
    }
}

impl fmt::Display for ModuleExecutionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.tags.join(","))
    }
}

/// One benchmark execution: a module run with an execution config on a device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct E2EModelRunConfig {
    pub composite_id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub module_generation_config: ModuleGenerationConfig,
    pub module_execution_config: ModuleExecutionConfig,
    pub target_device_spec: DeviceSpec,
    pub input_data: ModelInputData,
    pub tool: BenchmarkToolType,
}

impl E2EModelRunConfig {
    pub fn build(
        module_generation_config: ModuleGenerationConfig,
        module_execution_config: ModuleExecutionConfig,
        target_device_spec: DeviceSpec,
        input_data: ModelInputData,
        tool: BenchmarkToolType,
        tags: Vec<String>,
    ) -> Self {
        let composite_id = hash_composite_id(&[
            module_generation_config.composite_id.as_str(),
            module_execution_config.id.as_str(),
            target_device_spec.id.as_str(),
            input_data.id.as_str(),
        ]);
        let name = format!(
            "{}{} with {} @ {}",
            module_generation_config, module_execution_config, input_data.name, target_device_spec
        );
        Self {
            composite_id,
            name,
            tags,
            module_generation_config,
            module_execution_config,
            target_device_spec,
            input_data,
            tool,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::common::HostEnvironment;
    use crate::definitions::models::{Model, ModelSourceType};
    use test_case::test_case;

    fn imported_model() -> ImportedModel {
        ImportedModel::from_model(
            Model::build(
                "m-1",
                "DeepLabV3",
                &["fp32"],
                ModelSourceType::ExportedTflite,
                "https://example.com/deeplab_v3.tflite",
                "main",
                &["1x257x257x3xf32"],
            )
            .unwrap(),
        )
    }

    fn x86_target() -> CompileTarget {
        CompileTarget::new(
            TargetBackend::LlvmCpu,
            DeviceArchitecture::X86_64Cascadelake,
            TargetAbi::LinuxGnu,
        )
    }

    #[test]
    fn test_compile_config_build() {
        let config = CompileConfig::build(
            "cfg-x86",
            vec!["default-flags".to_string(), "fp32".to_string()],
            vec![x86_target()],
            vec![],
        )
        .unwrap();
        assert_eq!(config.name, "[default-flags,fp32]");
        assert_eq!(config.to_string(), "[default-flags,fp32]");
    }

    #[test]
    fn test_compile_config_rejects_missing_targets() {
        let err = CompileConfig::build("cfg", vec![], vec![], vec![]).unwrap_err();
        assert!(matches!(err, BenchError::InvalidConfig(_)));
        assert!(CompileConfig::build("", vec![], vec![x86_target()], vec![]).is_err());
    }

    #[test]
    fn test_derive_overrides_only_given_fields() {
        let base = CompileConfig::build(
            "cfg",
            vec!["a".to_string()],
            vec![x86_target()],
            vec!["--f1".to_string()],
        )
        .unwrap();
        let derived = base
            .derive(CompileConfigOverrides {
                id: Some("cfg-2".to_string()),
                tags: Some(vec!["a".to_string(), "b".to_string()]),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(derived.id, "cfg-2");
        assert_eq!(derived.name, "[a,b]");
        assert_eq!(derived.compile_targets, base.compile_targets);
        assert_eq!(derived.extra_flags, base.extra_flags);
        // the source is left untouched
        assert_eq!(base.id, "cfg");
        assert_eq!(base.name, "[a]");
    }

    #[test]
    fn test_module_generation_flags() {
        let config = CompileConfig::build(
            "cfg-x86",
            vec!["default-flags".to_string()],
            vec![x86_target()],
            vec!["--iree-flow-enable-data-tiling".to_string()],
        )
        .unwrap();
        let gen_config =
            ModuleGenerationConfig::build(imported_model(), config, vec!["fp32".to_string()])
                .unwrap();

        assert_eq!(
            gen_config.compile_flags,
            vec![
                "--iree-hal-target-backends=llvm-cpu",
                "--iree-input-type=tosa",
                "--iree-llvmcpu-target-triple=x86_64-unknown-linux-gnu",
                "--iree-llvmcpu-target-cpu=cascadelake",
                "--iree-flow-enable-data-tiling",
            ]
        );
        assert_eq!(gen_config.name, "DeepLabV3(fp32)[default-flags]");
        assert_eq!(gen_config.tags, vec!["fp32"]);
    }

    #[test_case(
        CompileTarget::new(TargetBackend::Cuda, DeviceArchitecture::CudaSm80, TargetAbi::LinuxGnu),
        "--iree-hal-cuda-llvm-target-arch=sm_80" ; "cuda"
    )]
    #[test_case(
        CompileTarget::new(TargetBackend::VulkanSpirv, DeviceArchitecture::ArmValhall, TargetAbi::LinuxAndroid31),
        "--iree-vulkan-target-triple=valhall-unknown-linux-android31" ; "vulkan mali"
    )]
    #[test_case(
        CompileTarget::new(TargetBackend::LlvmCpu, DeviceArchitecture::Armv8_2AGeneric, TargetAbi::LinuxAndroid29),
        "--iree-llvmcpu-target-triple=aarch64-none-linux-android29" ; "arm64"
    )]
    #[test_case(
        CompileTarget::new(TargetBackend::LlvmCpu, DeviceArchitecture::Rv64Generic, TargetAbi::LinuxGnu),
        "--iree-llvmcpu-target-triple=riscv64-pc-linux-gnu" ; "riscv64"
    )]
    fn test_target_flags(target: CompileTarget, expected_flag: &str) {
        let flags = target.target_flags().unwrap();
        assert_eq!(flags[0], expected_flag);
    }

    #[test]
    fn test_cuda_requires_linux_gnu() {
        let target = CompileTarget::new(
            TargetBackend::Cuda,
            DeviceArchitecture::CudaSm80,
            TargetAbi::LinuxAndroid31,
        );
        assert!(target.target_flags().is_err());
    }

    #[test]
    fn test_materialize_compile_flags() {
        let config = CompileConfig::build(
            "cfg",
            vec![],
            vec![x86_target()],
            vec![format!("--dump={}/stats.json", MODULE_DIR_VARIABLE)],
        )
        .unwrap();
        let gen_config = ModuleGenerationConfig::build(imported_model(), config, vec![]).unwrap();

        let flags = gen_config.materialize_compile_flags("/tmp/modules/a");
        assert_eq!(flags.last().unwrap(), "--dump=/tmp/modules/a/stats.json");
        assert!(gen_config.compile_flags.last().unwrap().contains(MODULE_DIR_VARIABLE));
    }

    #[test]
    fn test_run_config_ids() {
        let config = CompileConfig::build("cfg", vec![], vec![x86_target()], vec![]).unwrap();
        let gen_config = ModuleGenerationConfig::build(imported_model(), config, vec![]).unwrap();
        let exec_config = ModuleExecutionConfig::build(
            "local-sync",
            vec!["full-inference".to_string(), "default-flags".to_string()],
            RuntimeLoader::EmbeddedElf,
            RuntimeDriver::LocalSync,
            vec![],
        )
        .unwrap();
        let device = DeviceSpec::build(
            "c2-standard-16",
            "c2-standard-16",
            HostEnvironment::LinuxX86_64,
            DeviceArchitecture::X86_64Cascadelake,
            &[],
            &[],
        )
        .unwrap();

        let run = E2EModelRunConfig::build(
            gen_config.clone(),
            exec_config.clone(),
            device.clone(),
            ModelInputData::zeros(),
            BenchmarkToolType::IreeBenchmarkModule,
            vec![],
        );
        let again = E2EModelRunConfig::build(
            gen_config,
            exec_config,
            device,
            ModelInputData::zeros(),
            BenchmarkToolType::IreeBenchmarkModule,
            vec![],
        );
        assert_eq!(run, again);
        assert_eq!(
            run.name,
            "DeepLabV3(fp32)[](full-inference,default-flags) with zeros @ c2-standard-16[]"
        );
    }
}
