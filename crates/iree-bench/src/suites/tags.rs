// Compile config tags
pub const DEFAULT_FLAGS: &str = "default-flags";
pub const EXPERIMENTAL_FLAGS: &str = "experimental-flags";
pub const DATA_TILING: &str = "data-tiling";
pub const MICROKERNELS: &str = "ukernel";
pub const MMT4D: &str = "mmt4d";
pub const DOTPROD: &str = "dotprod";
pub const FUSE_PADDING: &str = "fuse-padding";
pub const REPEATED_KERNEL: &str = "repeated-kernel";
pub const DEMOTE_F32_TO_F16: &str = "demote-f32-to-f16";
pub const TENSORCORE: &str = "tensorcore";
pub const SIMT: &str = "simt";

/// Marks compile configs derived to collect compilation statistics.
pub const COMPILE_STATS: &str = "compile-stats";

// Execution config tags
pub const FULL_INFERENCE: &str = "full-inference";
pub const SYSTEM_SCHEDULING: &str = "system-scheduling";

// Device tags
pub const BIG_CORES: &str = "big-cores";
pub const LITTLE_CORES: &str = "little-cores";

/// Tags placed on module generation configs to group them for execution.
pub mod presets {
    pub const X86_64: &str = "x86_64";
    pub const X86_64_LARGE: &str = "x86_64-large";
    pub const CUDA: &str = "cuda";
    pub const CUDA_LARGE: &str = "cuda-large";
    pub const RISCV: &str = "riscv";
    pub const ANDROID_CPU: &str = "android-cpu";
    pub const ANDROID_GPU: &str = "android-gpu";
    pub const VULKAN_NVIDIA: &str = "vulkan-nvidia";
    pub const VMVX: &str = "vmvx";
}

pub fn thread_count(threads: u32) -> String {
    format!("{}-thread", threads)
}

pub fn batch_size(size: u32) -> String {
    format!("batch-size-{}", size)
}
