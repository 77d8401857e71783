use super::tags;
use crate::definitions::{DeviceArchitecture, DeviceSpec, HostEnvironment};
use crate::errors::BenchResult;

pub fn gcp_c2_standard_16() -> BenchResult<DeviceSpec> {
    DeviceSpec::build(
        "9a4804f1-b1b9-46cd-b251-7f16a655f782",
        "c2-standard-16",
        HostEnvironment::LinuxX86_64,
        DeviceArchitecture::X86_64Cascadelake,
        &["all-cores"],
        &["cpu"],
    )
}

pub fn gcp_a2_highgpu_1g_cuda() -> BenchResult<DeviceSpec> {
    DeviceSpec::build(
        "78c56b95-2d7d-44b5-b5fd-8e47aa961108",
        "a2-highgpu-1g",
        HostEnvironment::LinuxX86_64,
        DeviceArchitecture::CudaSm80,
        &[],
        &["gpu"],
    )
}

pub fn gcp_a2_highgpu_1g_vulkan() -> BenchResult<DeviceSpec> {
    DeviceSpec::build(
        "c5b4b3f0-8d1a-4a7e-9e67-1f8c7d8a0e3b",
        "a2-highgpu-1g",
        HostEnvironment::LinuxX86_64,
        DeviceArchitecture::NvidiaAmpere,
        &[],
        &["gpu", "vulkan"],
    )
}

pub fn emulator_riscv_64() -> BenchResult<DeviceSpec> {
    DeviceSpec::build(
        "916a9b4a-ee01-4a13-a8ee-bc3ddb1a9ab6",
        "emulator-riscv_64",
        HostEnvironment::LinuxRiscv64,
        DeviceArchitecture::Rv64Generic,
        &[],
        &["emulator"],
    )
}

pub fn emulator_riscv_32() -> BenchResult<DeviceSpec> {
    DeviceSpec::build(
        "1ee82785-7e8e-4bff-9d2f-1d2c2c5bd5d1",
        "emulator-riscv_32",
        HostEnvironment::LinuxRiscv32,
        DeviceArchitecture::Rv32Generic,
        &[],
        &["emulator"],
    )
}

pub fn pixel_6_pro_big_cores() -> BenchResult<DeviceSpec> {
    DeviceSpec::build(
        "2d1bd2b3-0e4b-4f3c-a8e8-7d7f3a3a5f7e",
        "pixel-6-pro",
        HostEnvironment::AndroidArmv8_2A,
        DeviceArchitecture::Armv8_2AGeneric,
        &[tags::BIG_CORES],
        &[tags::BIG_CORES],
    )
}

pub fn pixel_6_pro_little_cores() -> BenchResult<DeviceSpec> {
    DeviceSpec::build(
        "8ef4cd7f-0c4f-4e83-a5d1-3b45e2c6aa1d",
        "pixel-6-pro",
        HostEnvironment::AndroidArmv8_2A,
        DeviceArchitecture::Armv8_2AGeneric,
        &[tags::LITTLE_CORES],
        &[tags::LITTLE_CORES],
    )
}

pub fn pixel_6_pro_gpu() -> BenchResult<DeviceSpec> {
    DeviceSpec::build(
        "a4e8a1b5-1e10-4d5f-9a3d-0bc2fb0f6c4d",
        "pixel-6-pro",
        HostEnvironment::AndroidArmv8_2A,
        DeviceArchitecture::ArmValhall,
        &[],
        &["gpu"],
    )
}

pub fn moto_edge_x30_big_cores() -> BenchResult<DeviceSpec> {
    DeviceSpec::build(
        "3d3b9a6c-2f5d-4e6b-8c0d-5a1f9b7e2c48",
        "moto-edge-x30",
        HostEnvironment::AndroidArmv8_2A,
        DeviceArchitecture::Armv8_2AGeneric,
        &[tags::BIG_CORES],
        &[tags::BIG_CORES],
    )
}

pub fn moto_edge_x30_gpu() -> BenchResult<DeviceSpec> {
    DeviceSpec::build(
        "7e1c5d2a-9b3f-4a6e-b8d0-2c4f6a8e0b13",
        "moto-edge-x30",
        HostEnvironment::AndroidArmv8_2A,
        DeviceArchitecture::QualcommAdreno,
        &[],
        &["gpu"],
    )
}
