mod adreno;
mod armv8_a;
mod cuda;
pub mod devices;
pub mod execution;
pub mod factory;
mod mali;
pub mod models;
mod riscv;
mod suite;
pub mod tags;
pub mod utils;
mod vmvx;
mod vulkan_nvidia;
mod x86_64;

pub use adreno::AndroidAdrenoBenchmarks;
pub use armv8_a::AndroidArmv8ABenchmarks;
pub use cuda::LinuxCudaBenchmarks;
pub use factory::{register_suite, SuiteFactory, SuiteRegistry};
pub use mali::AndroidMaliBenchmarks;
pub use riscv::{LinuxRv32Benchmarks, LinuxRv64Benchmarks};
pub use suite::{BenchmarkSuite, SuiteOutput};
pub use vmvx::AndroidVmvxBenchmarks;
pub use vulkan_nvidia::LinuxVulkanNvidiaBenchmarks;
pub use x86_64::LinuxX86_64Benchmarks;
