use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use iree_bench::collections::compile_stats_flags;
use iree_bench::definitions::{
    CompileConfig, CompileTarget, DeviceArchitecture, E2EModelRunConfig, ImportedModel, Model,
    ModelSourceType, ModuleGenerationConfig, TargetAbi, TargetBackend,
};
use iree_bench::suites::utils::generate_e2e_model_run_configs;
use iree_bench::suites::{devices, execution, tags};
use iree_bench::{
    generate_benchmarks, generate_benchmarks_from, BenchError, BenchResult, BenchmarkSuite,
    SuiteOutput, SuiteRegistry,
};

/// Suite returning a fixed output and counting how often it was asked
struct StubSuite {
    name: String,
    output: SuiteOutput,
    calls: Arc<AtomicUsize>,
}

impl StubSuite {
    fn new(name: &str, output: SuiteOutput) -> Self {
        Self {
            name: name.to_string(),
            output,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl BenchmarkSuite for StubSuite {
    fn name(&self) -> &str {
        &self.name
    }

    fn generate(&self) -> BenchResult<SuiteOutput> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.output.clone())
    }
}

struct FailingSuite;

impl BenchmarkSuite for FailingSuite {
    fn name(&self) -> &str {
        "failing"
    }

    fn generate(&self) -> BenchResult<SuiteOutput> {
        Err(BenchError::Generation("device table missing".to_string()))
    }
}

fn gen_config(
    model_id: &str,
    config_id: &str,
    tags: &[&str],
    flags: &[&str],
) -> ModuleGenerationConfig {
    let model = Model::build(
        model_id,
        format!("Model_{}", model_id),
        &[],
        ModelSourceType::ExportedTflite,
        "",
        "main",
        &[],
    )
    .unwrap();
    let compile_config = CompileConfig::build(
        config_id,
        tags.iter().map(|t| t.to_string()).collect(),
        vec![CompileTarget::new(
            TargetBackend::LlvmCpu,
            DeviceArchitecture::X86_64Cascadelake,
            TargetAbi::LinuxGnu,
        )],
        flags.iter().map(|f| f.to_string()).collect(),
    )
    .unwrap();
    ModuleGenerationConfig::build(
        ImportedModel::from_model(model),
        compile_config,
        vec!["x86_64".to_string()],
    )
    .unwrap()
}

fn run_configs_for(gen_configs: &[ModuleGenerationConfig]) -> Vec<E2EModelRunConfig> {
    generate_e2e_model_run_configs(
        gen_configs,
        &[execution::elf_local_sync().unwrap()],
        &[devices::gcp_c2_standard_16().unwrap()],
        &[],
    )
}

fn stub(name: &str, gen_configs: Vec<ModuleGenerationConfig>) -> Box<dyn BenchmarkSuite> {
    let run_configs = run_configs_for(&gen_configs);
    Box::new(StubSuite::new(name, (gen_configs, run_configs)))
}

#[test]
fn test_single_stub_suite_scenario() {
    let original = gen_config("m1", "cfgA", &["x"], &["--f1"]);
    let suites = vec![stub("stub", vec![original.clone()])];

    let (gen_configs, run_configs) = generate_benchmarks_from(&suites).unwrap();

    assert_eq!(gen_configs.len(), 2);
    assert_eq!(gen_configs[0], original);

    let derived = &gen_configs[1].compile_config;
    assert_eq!(derived.id, "cfgA-compile-stats");
    assert_eq!(derived.tags, vec!["x", "compile-stats"]);
    assert_eq!(
        derived.extra_flags,
        vec![
            "--f1",
            "--iree-vm-emit-polyglot-zip=true",
            "--iree-llvmcpu-debug-symbols=false",
            "--iree-scheduling-dump-statistics-format=json",
            "--iree-scheduling-dump-statistics-file=${MODULE_DIR}/scheduling_stats.json",
        ]
    );
    assert_eq!(gen_configs[1].imported_model, original.imported_model);
    assert_eq!(gen_configs[1].tags, original.tags);
    assert_eq!(run_configs.len(), 1);
}

#[test]
fn test_suite_outputs_are_concatenated_in_order() {
    let first = vec![
        gen_config("m1", "cfg-a", &["a"], &[]),
        gen_config("m2", "cfg-a", &["a"], &[]),
    ];
    let second = vec![gen_config("m3", "cfg-b", &["b"], &["--b"])];
    let third = vec![
        gen_config("m4", "cfg-c", &[], &[]),
        gen_config("m5", "cfg-c", &[], &[]),
        gen_config("m6", "cfg-d", &["d"], &[]),
    ];
    let expected_originals: Vec<_> = first.iter().chain(&second).chain(&third).cloned().collect();
    let expected_runs: Vec<_> = run_configs_for(&first)
        .into_iter()
        .chain(run_configs_for(&second))
        .chain(run_configs_for(&third))
        .collect();

    let suites = vec![stub("first", first), stub("second", second), stub("third", third)];
    let (gen_configs, run_configs) = generate_benchmarks_from(&suites).unwrap();

    let originals = expected_originals.len();
    assert_eq!(gen_configs.len(), 2 * originals);
    assert_eq!(&gen_configs[..originals], expected_originals.as_slice());
    assert_eq!(run_configs, expected_runs);

    for (original, derived) in expected_originals.iter().zip(&gen_configs[originals..]) {
        assert_eq!(
            derived.compile_config.id,
            format!("{}-compile-stats", original.compile_config.id)
        );
        let mut expected_tags = original.compile_config.tags.clone();
        expected_tags.push(tags::COMPILE_STATS.to_string());
        assert_eq!(derived.compile_config.tags, expected_tags);

        let flag_count = original.compile_config.extra_flags.len();
        assert_eq!(
            &derived.compile_config.extra_flags[..flag_count],
            original.compile_config.extra_flags.as_slice()
        );
        assert_eq!(
            &derived.compile_config.extra_flags[flag_count..],
            &compile_stats_flags()
        );
        assert_eq!(derived.imported_model, original.imported_model);
        assert_eq!(derived.tags, original.tags);
    }
}

#[test]
fn test_empty_suites() {
    let suites = vec![stub("empty", Vec::new())];
    let (gen_configs, run_configs) = generate_benchmarks_from(&suites).unwrap();
    assert!(gen_configs.is_empty());
    assert!(run_configs.is_empty());

    let (gen_configs, run_configs) = generate_benchmarks_from(&[]).unwrap();
    assert!(gen_configs.is_empty());
    assert!(run_configs.is_empty());
}

#[test]
fn test_failure_propagates_and_stops() {
    let later = StubSuite::new("later", (vec![gen_config("m1", "cfg", &[], &[])], Vec::new()));
    let later_calls = later.calls.clone();
    let suites: Vec<Box<dyn BenchmarkSuite>> = vec![
        stub("earlier", vec![gen_config("m0", "cfg0", &[], &[])]),
        Box::new(FailingSuite),
        Box::new(later),
    ];

    let err = generate_benchmarks_from(&suites).unwrap_err();
    assert!(
        matches!(err, BenchError::Generation(ref message) if message == "device table missing")
    );
    assert_eq!(later_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_each_suite_invoked_once() {
    let suite = StubSuite::new("once", (vec![gen_config("m1", "cfg", &[], &[])], Vec::new()));
    let calls = suite.calls.clone();
    let suites: Vec<Box<dyn BenchmarkSuite>> = vec![Box::new(suite)];
    generate_benchmarks_from(&suites).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_builtin_catalog_properties() {
    let suites = SuiteRegistry::builtin().instantiate_all();
    let mut expected_gen = 0;
    let mut expected_run = 0;
    for suite in &suites {
        let (gen_configs, run_configs) = suite.generate().unwrap();
        assert!(!gen_configs.is_empty(), "{} produced no modules", suite.name());
        expected_gen += gen_configs.len();
        expected_run += run_configs.len();
    }

    let (gen_configs, run_configs) = generate_benchmarks().unwrap();
    assert_eq!(gen_configs.len(), 2 * expected_gen);
    assert_eq!(run_configs.len(), expected_run);
    assert!(gen_configs[expected_gen..]
        .iter()
        .all(|config| config.compile_config.id.ends_with("-compile-stats")));
}

#[test]
fn test_generation_is_idempotent() {
    let first = generate_benchmarks().unwrap();
    let second = generate_benchmarks().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_macro_registration() {
    struct MacroSuite;

    impl MacroSuite {
        fn new() -> Self {
            MacroSuite
        }
    }

    impl BenchmarkSuite for MacroSuite {
        fn name(&self) -> &str {
            "macro-suite"
        }

        fn generate(&self) -> BenchResult<SuiteOutput> {
            Ok((Vec::new(), Vec::new()))
        }
    }

    iree_bench::register_suite!("macro-suite", MacroSuite);
    let created = iree_bench::SuiteFactory::create("macro-suite").unwrap();
    assert_eq!(created.name(), "macro-suite");
}
