pub mod common;
pub mod iree;
pub mod models;
pub mod unique_ids;

// Re-export the record types used throughout the suites
pub use common::{ArchitectureType, DeviceArchitecture, DeviceSpec, HostEnvironment};
pub use iree::{
    BenchmarkToolType, CompileConfig, CompileConfigOverrides, CompileTarget, E2EModelRunConfig,
    ModuleExecutionConfig, ModuleGenerationConfig, RuntimeDriver, RuntimeLoader, TargetAbi,
    TargetBackend, MODULE_DIR_VARIABLE,
};
pub use models::{ImportedModel, MlirDialectType, Model, ModelInputData, ModelSourceType};
