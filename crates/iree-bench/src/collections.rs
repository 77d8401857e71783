use std::collections::HashMap;

use tracing::{debug, info};

use crate::artifacts::SCHEDULING_STATS_FILENAME;
use crate::definitions::{
    CompileConfig, CompileConfigOverrides, E2EModelRunConfig, ModuleGenerationConfig,
    MODULE_DIR_VARIABLE,
};
use crate::errors::{BenchError, BenchResult};
use crate::suites::{tags, BenchmarkSuite, SuiteFactory, SuiteOutput};

pub const COMPILE_STATS_ID_SUFFIX: &str = "-compile-stats";

/// Extra compiler flags requesting component sizes and scheduling statistics.
pub fn compile_stats_flags() -> [String; 4] {
    // POSIX separator, see MODULE_DIR_VARIABLE.
    let scheduling_stats_path = format!("{}/{}", MODULE_DIR_VARIABLE, SCHEDULING_STATS_FILENAME);
    [
        // Zip polyglot output provides the component sizes.
        "--iree-vm-emit-polyglot-zip=true".to_string(),
        // Debug symbols would skew the component sizes.
        "--iree-llvmcpu-debug-symbols=false".to_string(),
        "--iree-scheduling-dump-statistics-format=json".to_string(),
        format!(
            "--iree-scheduling-dump-statistics-file={}",
            scheduling_stats_path
        ),
    ]
}

/// Clone `compile_config` into its compile-stats variant.
pub fn derive_compile_stats_config(compile_config: &CompileConfig) -> BenchResult<CompileConfig> {
    let mut tags = compile_config.tags.clone();
    tags.push(tags::COMPILE_STATS.to_string());
    let mut extra_flags = compile_config.extra_flags.clone();
    extra_flags.extend(compile_stats_flags());

    compile_config.derive(CompileConfigOverrides {
        id: Some(format!("{}{}", compile_config.id, COMPILE_STATS_ID_SUFFIX)),
        tags: Some(tags),
        extra_flags: Some(extra_flags),
        ..Default::default()
    })
}

/// Sibling of `gen_config` compiled with the compile-stats variant of its config.
pub fn derive_compile_stats_gen_config(
    gen_config: &ModuleGenerationConfig,
) -> BenchResult<ModuleGenerationConfig> {
    ModuleGenerationConfig::build(
        gen_config.imported_model.clone(),
        derive_compile_stats_config(&gen_config.compile_config)?,
        gen_config.tags.clone(),
    )
}

/// Concatenate the output of every suite, in order. Stops at the first failure.
pub fn collect_suite_outputs(suites: &[Box<dyn BenchmarkSuite>]) -> BenchResult<SuiteOutput> {
    let mut all_gen_configs = Vec::new();
    let mut all_run_configs = Vec::new();
    for suite in suites {
        let (gen_configs, run_configs) = suite.generate()?;
        debug!(
            suite = suite.name(),
            gen_configs = gen_configs.len(),
            run_configs = run_configs.len(),
            "Collected suite"
        );
        all_gen_configs.extend(gen_configs);
        all_run_configs.extend(run_configs);
    }
    Ok((all_gen_configs, all_run_configs))
}

/// Fail if two different compile configs share an id.
///
/// Modules compiled with the same recipe carry equal copies of one compile
/// config, which is not a collision.
pub fn validate_unique_compile_config_ids(
    gen_configs: &[ModuleGenerationConfig],
) -> BenchResult<()> {
    let mut seen: HashMap<&str, &CompileConfig> = HashMap::new();
    for gen_config in gen_configs {
        let config = &gen_config.compile_config;
        if let Some(existing) = seen.insert(config.id.as_str(), config) {
            if existing != config {
                return Err(BenchError::DuplicateCompileConfigId(config.id.clone()));
            }
        }
    }
    Ok(())
}

/// Generate the catalog from the given suites.
///
/// The returned module generation configs are the suite outputs in suite
/// order followed by one compile-stats sibling per module, in the same order.
/// Run configs are the suite outputs unchanged.
pub fn generate_benchmarks_from(
    suites: &[Box<dyn BenchmarkSuite>],
) -> BenchResult<(Vec<ModuleGenerationConfig>, Vec<E2EModelRunConfig>)> {
    let (mut all_gen_configs, all_run_configs) = collect_suite_outputs(suites)?;

    // For now every module also gets its compilation statistics tracked.
    let compile_stats_gen_configs = all_gen_configs
        .iter()
        .map(derive_compile_stats_gen_config)
        .collect::<BenchResult<Vec<_>>>()?;
    all_gen_configs.extend(compile_stats_gen_configs);

    validate_unique_compile_config_ids(&all_gen_configs)?;

    info!(
        suites = suites.len(),
        gen_configs = all_gen_configs.len(),
        run_configs = all_run_configs.len(),
        "Generated benchmark catalog"
    );
    Ok((all_gen_configs, all_run_configs))
}

/// Generate the catalog from every registered suite.
pub fn generate_benchmarks() -> BenchResult<(Vec<ModuleGenerationConfig>, Vec<E2EModelRunConfig>)> {
    generate_benchmarks_from(&SuiteFactory::default_suites())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::{
        CompileTarget, DeviceArchitecture, ImportedModel, Model, ModelSourceType, TargetAbi,
        TargetBackend,
    };
    use crate::suites::SuiteRegistry;

    fn gen_config(id: &str, extra_flags: Vec<String>) -> ModuleGenerationConfig {
        let model = Model::build(
            "m-1",
            "PersonDetect_int8",
            &["int8"],
            ModelSourceType::ExportedTflite,
            "",
            "main",
            &[],
        )
        .unwrap();
        let config = CompileConfig::build(
            id,
            vec!["x".to_string()],
            vec![CompileTarget::new(
                TargetBackend::LlvmCpu,
                DeviceArchitecture::X86_64Cascadelake,
                TargetAbi::LinuxGnu,
            )],
            extra_flags,
        )
        .unwrap();
        let imported_model = ImportedModel::from_model(model);
        ModuleGenerationConfig::build(imported_model, config, vec!["g".to_string()]).unwrap()
    }

    #[test]
    fn test_compile_stats_flags() {
        assert_eq!(
            compile_stats_flags()[3],
            "--iree-scheduling-dump-statistics-file=${MODULE_DIR}/scheduling_stats.json"
        );
    }

    #[test]
    fn test_derive_compile_stats_gen_config() {
        let original = gen_config("cfgA", vec!["--f1".to_string()]);
        let derived = derive_compile_stats_gen_config(&original).unwrap();

        assert_eq!(derived.compile_config.id, "cfgA-compile-stats");
        assert_eq!(derived.compile_config.tags, vec!["x", "compile-stats"]);
        assert_eq!(derived.compile_config.name, "[x,compile-stats]");
        assert_eq!(
            derived.compile_config.compile_targets,
            original.compile_config.compile_targets
        );
        assert_eq!(derived.compile_config.extra_flags[0], "--f1");
        assert_eq!(&derived.compile_config.extra_flags[1..], &compile_stats_flags());
        assert_eq!(derived.imported_model, original.imported_model);
        assert_eq!(derived.tags, original.tags);
        assert_ne!(derived.composite_id, original.composite_id);
        // the materialized command line ends with the statistics flags too
        assert!(derived.compile_flags.ends_with(&compile_stats_flags()));
    }

    #[test]
    fn test_validate_unique_compile_config_ids() {
        let a = gen_config("cfg", vec![]);
        let same = gen_config("cfg", vec![]);
        assert!(validate_unique_compile_config_ids(&[a.clone(), same]).is_ok());

        let clash = gen_config("cfg", vec!["--other".to_string()]);
        let err = validate_unique_compile_config_ids(&[a, clash]).unwrap_err();
        assert!(matches!(err, BenchError::DuplicateCompileConfigId(id) if id == "cfg"));
    }

    #[test]
    fn test_colliding_suffix_is_rejected() {
        // A base id that already carries the suffix collides with a derived id.
        let base = gen_config("cfg", vec![]);
        let imposter = gen_config("cfg-compile-stats", vec![]);
        let suites: Vec<Box<dyn BenchmarkSuite>> = vec![Box::new(FixedSuite(vec![base, imposter]))];
        let err = generate_benchmarks_from(&suites).unwrap_err();
        assert!(matches!(err, BenchError::DuplicateCompileConfigId(_)));
    }

    #[test]
    fn test_builtin_suites_generate() {
        let suites = SuiteRegistry::builtin().instantiate_all();
        let (gen_configs, run_configs) = generate_benchmarks_from(&suites).unwrap();
        assert_eq!(gen_configs.len() % 2, 0);
        assert!(!run_configs.is_empty());

        let half = gen_configs.len() / 2;
        for (original, derived) in gen_configs[..half].iter().zip(&gen_configs[half..]) {
            assert!(!original.compile_config.tags.contains(&tags::COMPILE_STATS.to_string()));
            assert_eq!(
                derived.compile_config.id,
                format!("{}{}", original.compile_config.id, COMPILE_STATS_ID_SUFFIX)
            );
        }
    }

    struct FixedSuite(Vec<ModuleGenerationConfig>);

    impl BenchmarkSuite for FixedSuite {
        fn name(&self) -> &str {
            "fixed"
        }

        fn generate(&self) -> BenchResult<SuiteOutput> {
            Ok((self.0.clone(), Vec::new()))
        }
    }
}
