use super::tags;
use crate::definitions::{ModuleExecutionConfig, RuntimeDriver, RuntimeLoader};
use crate::errors::BenchResult;

pub fn elf_local_sync() -> BenchResult<ModuleExecutionConfig> {
    ModuleExecutionConfig::build(
        "13fc65a9-e5dc-4cbb-9c09-25b0b08f4c03",
        vec![
            tags::FULL_INFERENCE.to_string(),
            tags::DEFAULT_FLAGS.to_string(),
        ],
        RuntimeLoader::EmbeddedElf,
        RuntimeDriver::LocalSync,
        Vec::new(),
    )
}

/// Multi-threaded CPU execution pinned to `threads` topology groups
pub fn elf_local_task(threads: u32) -> BenchResult<ModuleExecutionConfig> {
    ModuleExecutionConfig::build(
        format!("c7c4a15e-b20c-4898-bb4a-864f34ff34b2-{}", threads),
        vec![
            tags::FULL_INFERENCE.to_string(),
            tags::thread_count(threads),
            tags::SYSTEM_SCHEDULING.to_string(),
        ],
        RuntimeLoader::EmbeddedElf,
        RuntimeDriver::LocalTask,
        vec![format!("--task_topology_group_count={}", threads)],
    )
}

pub fn vmvx_local_task(threads: u32) -> BenchResult<ModuleExecutionConfig> {
    ModuleExecutionConfig::build(
        format!("d7d4a64d-0e85-4b5a-9a8b-6f1f4d7c7c2f-{}", threads),
        vec![
            tags::FULL_INFERENCE.to_string(),
            tags::thread_count(threads),
            tags::SYSTEM_SCHEDULING.to_string(),
        ],
        RuntimeLoader::VmvxModule,
        RuntimeDriver::LocalTask,
        vec![format!("--task_topology_group_count={}", threads)],
    )
}

pub fn cuda() -> BenchResult<ModuleExecutionConfig> {
    ModuleExecutionConfig::build(
        "f7c0ec98-f028-436a-b05a-7d35cf18ce2d",
        vec![
            tags::FULL_INFERENCE.to_string(),
            tags::DEFAULT_FLAGS.to_string(),
        ],
        RuntimeLoader::None,
        RuntimeDriver::Cuda,
        Vec::new(),
    )
}

pub fn vulkan() -> BenchResult<ModuleExecutionConfig> {
    ModuleExecutionConfig::build(
        "34ae13f0-d6d9-43f7-befb-15d024e88e89",
        vec![
            tags::FULL_INFERENCE.to_string(),
            tags::DEFAULT_FLAGS.to_string(),
        ],
        RuntimeLoader::None,
        RuntimeDriver::Vulkan,
        Vec::new(),
    )
}

/// Vulkan execution that repeats each dispatch `batch_size` times
pub fn vulkan_batched(batch_size: u32) -> BenchResult<ModuleExecutionConfig> {
    ModuleExecutionConfig::build(
        format!("b10737a8-5da4-4052-9b7a-5b07f21e02d0-{}", batch_size),
        vec![
            tags::FULL_INFERENCE.to_string(),
            tags::batch_size(batch_size),
        ],
        RuntimeLoader::None,
        RuntimeDriver::Vulkan,
        vec![format!("--batch_size={}", batch_size)],
    )
}
