use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{util::ensure_non_empty, BenchResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchitectureType {
    Cpu,
    Gpu,
}

/// Hardware a module is compiled for and benchmarked on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceArchitecture {
    VmvxGeneric,
    X86_64Cascadelake,
    Armv8_2AGeneric,
    Rv64Generic,
    Rv32Generic,
    CudaSm80,
    ArmValhall,
    QualcommAdreno,
    NvidiaAmpere,
}

impl DeviceArchitecture {
    pub fn arch_type(&self) -> ArchitectureType {
        match self {
            DeviceArchitecture::CudaSm80
            | DeviceArchitecture::ArmValhall
            | DeviceArchitecture::QualcommAdreno
            | DeviceArchitecture::NvidiaAmpere => ArchitectureType::Gpu,
            _ => ArchitectureType::Cpu,
        }
    }

    /// Architecture family, e.g. `x86_64` or `cuda`
    pub fn architecture(&self) -> &'static str {
        match self {
            DeviceArchitecture::VmvxGeneric => "vmvx",
            DeviceArchitecture::X86_64Cascadelake => "x86_64",
            DeviceArchitecture::Armv8_2AGeneric => "armv8.2-a",
            DeviceArchitecture::Rv64Generic => "riscv_64",
            DeviceArchitecture::Rv32Generic => "riscv_32",
            DeviceArchitecture::CudaSm80 => "cuda",
            DeviceArchitecture::ArmValhall => "arm",
            DeviceArchitecture::QualcommAdreno => "qualcomm",
            DeviceArchitecture::NvidiaAmpere => "nvidia",
        }
    }

    pub fn microarchitecture(&self) -> &'static str {
        match self {
            DeviceArchitecture::X86_64Cascadelake => "cascadelake",
            DeviceArchitecture::CudaSm80 => "sm_80",
            DeviceArchitecture::ArmValhall => "valhall",
            DeviceArchitecture::QualcommAdreno => "adreno",
            DeviceArchitecture::NvidiaAmpere => "ampere",
            _ => "generic",
        }
    }
}

impl fmt::Display for DeviceArchitecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.architecture(), self.microarchitecture())
    }
}

/// Platform and ABI of the machine that hosts the benchmark tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HostEnvironment {
    LinuxX86_64,
    LinuxRiscv64,
    LinuxRiscv32,
    AndroidArmv8_2A,
}

impl HostEnvironment {
    pub fn platform(&self) -> &'static str {
        match self {
            HostEnvironment::AndroidArmv8_2A => "android",
            _ => "linux",
        }
    }

    pub fn architecture(&self) -> &'static str {
        match self {
            HostEnvironment::LinuxX86_64 => "x86_64",
            HostEnvironment::LinuxRiscv64 => "riscv_64",
            HostEnvironment::LinuxRiscv32 => "riscv_32",
            HostEnvironment::AndroidArmv8_2A => "arm64-v8a",
        }
    }
}

/// A concrete device that benchmarks are run on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSpec {
    pub id: String,
    pub device_name: String,
    pub host_environment: HostEnvironment,
    pub architecture: DeviceArchitecture,
    pub device_parameters: Vec<String>,
    pub tags: Vec<String>,
}

impl DeviceSpec {
    pub fn build(
        id: impl Into<String>,
        device_name: impl Into<String>,
        host_environment: HostEnvironment,
        architecture: DeviceArchitecture,
        device_parameters: &[&str],
        tags: &[&str],
    ) -> BenchResult<Self> {
        let id = id.into();
        let device_name = device_name.into();
        ensure_non_empty(&id, "device spec id")?;
        ensure_non_empty(&device_name, "device name")?;
        Ok(Self {
            id,
            device_name,
            host_environment,
            architecture,
            device_parameters: device_parameters.iter().map(|p| p.to_string()).collect(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        })
    }
}

impl fmt::Display for DeviceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.device_name, self.tags.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_architecture_properties() {
        let arch = DeviceArchitecture::X86_64Cascadelake;
        assert_eq!(arch.arch_type(), ArchitectureType::Cpu);
        assert_eq!(arch.to_string(), "x86_64-cascadelake");

        let gpu = DeviceArchitecture::ArmValhall;
        assert_eq!(gpu.arch_type(), ArchitectureType::Gpu);
        assert_eq!(gpu.microarchitecture(), "valhall");
    }

    #[test]
    fn test_device_spec_build() {
        let spec = DeviceSpec::build(
            "pixel-6-pro",
            "pixel-6-pro",
            HostEnvironment::AndroidArmv8_2A,
            DeviceArchitecture::Armv8_2AGeneric,
            &["big-cores"],
            &["big-cores"],
        )
        .unwrap();
        assert_eq!(spec.host_environment.platform(), "android");
        assert_eq!(spec.to_string(), "pixel-6-pro[big-cores]");

        assert!(DeviceSpec::build(
            "",
            "pixel-6-pro",
            HostEnvironment::AndroidArmv8_2A,
            DeviceArchitecture::Armv8_2AGeneric,
            &[],
            &[],
        )
        .is_err());
    }
}
