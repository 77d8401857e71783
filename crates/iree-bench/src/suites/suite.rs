use crate::definitions::{E2EModelRunConfig, ModuleGenerationConfig};
use crate::errors::BenchResult;

/// Module generation configs and run configs produced by one suite
pub type SuiteOutput = (Vec<ModuleGenerationConfig>, Vec<E2EModelRunConfig>);

/// A hardware or backend specific set of benchmarks
pub trait BenchmarkSuite: Send + Sync {
    fn name(&self) -> &str;

    fn generate(&self) -> BenchResult<SuiteOutput>;
}
