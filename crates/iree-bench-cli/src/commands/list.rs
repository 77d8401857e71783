use anyhow::{anyhow, Result};
use console::style;
use iree_bench::SuiteFactory;

/// One row per registered suite, in generation order.
pub fn suite_rows() -> Result<Vec<(String, usize, usize)>> {
    let mut rows = Vec::new();
    for name in SuiteFactory::available_suites() {
        let suite = SuiteFactory::create(&name)
            .ok_or_else(|| anyhow!("Suite '{}' disappeared from the registry", name))?;
        let (gen_configs, run_configs) = suite.generate()?;
        rows.push((name, gen_configs.len(), run_configs.len()));
    }
    Ok(rows)
}

pub fn handle_list_suites() -> Result<()> {
    let rows = suite_rows()?;
    let width = rows.iter().map(|(name, _, _)| name.len()).max().unwrap_or(0);
    println!(
        "{:<width$}  {:>7}  {:>4}",
        style("SUITE").bold(),
        style("MODULES").bold(),
        style("RUNS").bold(),
        width = width
    );
    for (name, modules, runs) in rows {
        println!(
            "{:<width$}  {:>7}  {:>4}",
            style(name).cyan(),
            modules,
            runs,
            width = width
        );
    }
    Ok(())
}
