pub mod artifacts;
pub mod catalog;
pub mod collections;
pub mod definitions;
pub mod errors;
pub mod suites;

// Re-export main components for easier use
pub use catalog::{BenchmarkCatalog, CatalogFormat, CatalogSummary};
pub use collections::{generate_benchmarks, generate_benchmarks_from, COMPILE_STATS_ID_SUFFIX};
pub use errors::{BenchError, BenchResult};
pub use suites::{BenchmarkSuite, SuiteFactory, SuiteOutput, SuiteRegistry};
