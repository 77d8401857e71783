use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod logging;

use commands::flags::handle_flags;
use commands::generate::handle_generate;
use commands::list::handle_list_suites;
use config::Settings;
use logging::setup_logging;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        help = "TOML settings file",
        long_help = "Read settings from a TOML file. IREE_BENCH_* environment variables and command line flags take precedence."
    )]
    config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        value_name = "DIR",
        help = "Also write logs to a daily rotated file in DIR"
    )]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the benchmark catalog
    #[command(about = "Generate module generation and run configs for the benchmark suites")]
    Generate {
        #[arg(
            short,
            long,
            value_name = "FILE",
            help = "Write the catalog to FILE instead of stdout"
        )]
        output: Option<PathBuf>,

        #[arg(short, long, help = "Catalog format (json, yaml)")]
        format: Option<String>,

        #[arg(
            short,
            long = "suite",
            value_name = "NAME",
            help = "Only generate the named suite, may be repeated",
            long_help = "Only generate the named suites. Suites are generated in registration order regardless of the order given here."
        )]
        suites: Vec<String>,

        #[arg(long, help = "Skip the derived compile-stats module configs")]
        no_compile_stats: bool,
    },

    /// List the registered suites
    #[command(about = "List registered benchmark suites and their config counts")]
    ListSuites,

    /// Print the compile flags of a module
    #[command(about = "Print the compile flags of a module with its output directory filled in")]
    Flags {
        #[arg(help = "Composite id of the module generation config")]
        composite_id: String,

        #[arg(
            long,
            value_name = "DIR",
            help = "Root directory the module directories live under"
        )]
        module_root: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if cli.log_dir.is_some() {
        settings.log_dir = cli.log_dir;
    }
    let _guard = setup_logging(settings.log_dir.as_deref())?;

    match cli.command {
        Command::Generate {
            output,
            format,
            suites,
            no_compile_stats,
        } => {
            if output.is_some() {
                settings.output = output;
            }
            if let Some(format) = format {
                settings.format = format;
            }
            if !suites.is_empty() {
                settings.suites = suites;
            }
            if no_compile_stats {
                settings.compile_stats = false;
            }
            handle_generate(&settings)
        }
        Command::ListSuites => handle_list_suites(),
        Command::Flags {
            composite_id,
            module_root,
        } => {
            if let Some(root) = module_root {
                settings.module_root = root;
            }
            handle_flags(&composite_id, &settings)
        }
    }
}
