use std::sync::{OnceLock, RwLock};

use super::{
    AndroidAdrenoBenchmarks, AndroidArmv8ABenchmarks, AndroidMaliBenchmarks,
    AndroidVmvxBenchmarks, BenchmarkSuite, LinuxCudaBenchmarks, LinuxRv32Benchmarks,
    LinuxRv64Benchmarks, LinuxVulkanNvidiaBenchmarks, LinuxX86_64Benchmarks,
};
use crate::errors::{BenchError, BenchResult};

type SuiteConstructor = Box<dyn Fn() -> Box<dyn BenchmarkSuite> + Send + Sync>;

/// Ordered collection of suite constructors.
///
/// Suites are instantiated in registration order, which is also the order
/// their configs appear in the generated catalog.
#[derive(Default)]
pub struct SuiteRegistry {
    entries: Vec<(String, SuiteConstructor)>,
}

impl SuiteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in hardware suites
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("linux-x86_64", || Box::new(LinuxX86_64Benchmarks::new()));
        registry.register("linux-cuda", || Box::new(LinuxCudaBenchmarks::new()));
        registry.register("linux-rv64", || Box::new(LinuxRv64Benchmarks::new()));
        registry.register("linux-rv32", || Box::new(LinuxRv32Benchmarks::new()));
        registry.register("android-armv8-a", || Box::new(AndroidArmv8ABenchmarks::new()));
        registry.register("android-adreno", || Box::new(AndroidAdrenoBenchmarks::new()));
        registry.register("android-mali", || Box::new(AndroidMaliBenchmarks::new()));
        registry.register("linux-vulkan-nvidia", || {
            Box::new(LinuxVulkanNvidiaBenchmarks::new())
        });
        registry.register("android-vmvx", || Box::new(AndroidVmvxBenchmarks::new()));
        registry
    }

    /// Add a suite, replacing any earlier suite of the same name in place.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        constructor: impl Fn() -> Box<dyn BenchmarkSuite> + Send + Sync + 'static,
    ) {
        let name = name.into();
        let constructor: SuiteConstructor = Box::new(constructor);
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = constructor,
            None => self.entries.push((name, constructor)),
        }
    }

    pub fn create(&self, name: &str) -> Option<Box<dyn BenchmarkSuite>> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, constructor)| constructor())
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn instantiate_all(&self) -> Vec<Box<dyn BenchmarkSuite>> {
        self.entries
            .iter()
            .map(|(_, constructor)| constructor())
            .collect()
    }

    /// Instantiate the named suites, keeping registration order.
    pub fn select(&self, names: &[String]) -> BenchResult<Vec<Box<dyn BenchmarkSuite>>> {
        if let Some(unknown) = names
            .iter()
            .find(|name| !self.entries.iter().any(|(existing, _)| existing == *name))
        {
            return Err(BenchError::UnknownSuite(unknown.clone()));
        }
        Ok(self
            .entries
            .iter()
            .filter(|(name, _)| names.contains(name))
            .map(|(_, constructor)| constructor())
            .collect())
    }
}

static SUITE_REGISTRY: OnceLock<RwLock<SuiteRegistry>> = OnceLock::new();

/// Initialize the registry with the built-in suites if it hasn't been initialized
fn registry() -> &'static RwLock<SuiteRegistry> {
    SUITE_REGISTRY.get_or_init(|| RwLock::new(SuiteRegistry::builtin()))
}

/// Register an additional suite with the process-wide registry
pub fn register_suite(
    name: impl Into<String>,
    constructor: impl Fn() -> Box<dyn BenchmarkSuite> + Send + Sync + 'static,
) {
    if let Ok(mut registry) = registry().write() {
        registry.register(name, constructor);
    }
}

pub struct SuiteFactory;

impl SuiteFactory {
    pub fn create(name: &str) -> Option<Box<dyn BenchmarkSuite>> {
        registry().read().ok()?.create(name)
    }

    pub fn available_suites() -> Vec<String> {
        registry()
            .read()
            .map(|registry| registry.names())
            .unwrap_or_default()
    }

    pub fn default_suites() -> Vec<Box<dyn BenchmarkSuite>> {
        registry()
            .read()
            .map(|registry| registry.instantiate_all())
            .unwrap_or_default()
    }

    pub fn select(names: &[String]) -> BenchResult<Vec<Box<dyn BenchmarkSuite>>> {
        registry()
            .read()
            .map_err(|e| BenchError::Generation(format!("suite registry is poisoned: {}", e)))?
            .select(names)
    }
}

#[macro_export]
macro_rules! register_suite {
    ($name:expr, $suite_type:ty) => {
        $crate::suites::factory::register_suite($name, || Box::new(<$suite_type>::new()))
    };
}
