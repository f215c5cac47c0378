use clap::{Args, Parser, Subcommand};
use std::fmt::Display;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use xtgen_loader::{FeatureSubsets, IsaSource, MergedSubsets, dump, merge_sources, table};

#[derive(Parser)]
#[command(name = "xtgen", about = "Xtensa ISA description compiler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Flatten every (cpu, opcode, variant, arg) tuple into a CSV table
    Table {
        /// ISA description files (`xtensa_<cpu>.json`), later files win
        #[arg(required = true)]
        sources: Vec<PathBuf>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the merged opcode records of each feature subset as JSON
    Dump {
        #[arg(required = true)]
        sources: Vec<PathBuf>,
        #[command(flatten)]
        features: FeatureArgs,
        /// Output directory
        #[arg(short = 'd', long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Generate TableGen instruction definitions for each feature subset
    Gen {
        #[arg(required = true)]
        sources: Vec<PathBuf>,
        #[command(flatten)]
        features: FeatureArgs,
        /// Output directory
        #[arg(short = 'd', long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Table, dumps and TableGen output in one run
    All {
        #[arg(required = true)]
        sources: Vec<PathBuf>,
        #[command(flatten)]
        features: FeatureArgs,
        /// Output directory
        #[arg(short = 'd', long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Show opcode counts per source and per feature subset
    Info {
        #[arg(required = true)]
        sources: Vec<PathBuf>,
        #[command(flatten)]
        features: FeatureArgs,
    },
}

#[derive(Args)]
struct FeatureArgs {
    /// YAML file declaring the feature subsets
    #[arg(long, conflicts_with = "feature")]
    config: Option<PathBuf>,
    /// Feature subset and its opcode list file, repeatable
    #[arg(long = "feature", value_name = "NAME=PATH")]
    feature: Vec<String>,
}

impl FeatureArgs {
    fn load(&self) -> Result<FeatureSubsets, xtgen_loader::Error> {
        match &self.config {
            Some(path) => FeatureSubsets::from_config(path),
            None => FeatureSubsets::from_specs(&self.feature),
        }
    }

    fn load_required(&self) -> FeatureSubsets {
        let features = or_exit(self.load());
        if features.is_empty() {
            eprintln!("Error: no feature subsets declared (use --config or --feature)");
            std::process::exit(1);
        }
        features
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Table { sources, output } => cmd_table(&sources, output.as_deref()),
        Commands::Dump {
            sources,
            features,
            out_dir,
        } => cmd_dump(&sources, &features, &out_dir),
        Commands::Gen {
            sources,
            features,
            out_dir,
        } => cmd_gen(&sources, &features, &out_dir),
        Commands::All {
            sources,
            features,
            out_dir,
        } => cmd_all(&sources, &features, &out_dir),
        Commands::Info { sources, features } => cmd_info(&sources, &features),
    }
}

/// Unwrap or report the error and exit with status 1.
fn or_exit<T, E: Display>(result: Result<T, E>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn load(paths: &[PathBuf]) -> Vec<IsaSource> {
    let sources = or_exit(xtgen_loader::load_sources(paths));
    log::info!("loaded {} ISA descriptions", sources.len());
    sources
}

fn prepare_dir(dir: &Path) {
    fs::create_dir_all(dir).unwrap_or_else(|e| {
        eprintln!("Error creating output directory {}: {e}", dir.display());
        std::process::exit(1);
    });
}

fn merged(sources: &[IsaSource], features: &FeatureArgs) -> MergedSubsets {
    merge_sources(sources, &features.load_required())
}

fn cmd_table(paths: &[PathBuf], output: Option<&Path>) {
    let sources = load(paths);
    match output {
        Some(path) => {
            or_exit(table::write_table_file(path, &sources));
        }
        None => {
            or_exit(table::write_table(io::stdout().lock(), &sources));
        }
    }
}

fn cmd_dump(paths: &[PathBuf], features: &FeatureArgs, out_dir: &Path) {
    let sources = load(paths);
    let merged = merged(&sources, features);
    prepare_dir(out_dir);
    for path in or_exit(dump::write_dumps(out_dir, &merged)) {
        println!("{}", path.display());
    }
}

fn cmd_gen(paths: &[PathBuf], features: &FeatureArgs, out_dir: &Path) {
    let sources = load(paths);
    let merged = merged(&sources, features);
    prepare_dir(out_dir);
    for path in or_exit(xtgen_tablegen::write_subsets(out_dir, &merged)) {
        println!("{}", path.display());
    }
}

fn cmd_all(paths: &[PathBuf], features: &FeatureArgs, out_dir: &Path) {
    let sources = load(paths);
    let merged = merged(&sources, features);
    prepare_dir(out_dir);

    let table_path = out_dir.join("all.csv");
    or_exit(table::write_table_file(&table_path, &sources));
    println!("{}", table_path.display());
    for path in or_exit(dump::write_dumps(out_dir, &merged)) {
        println!("{}", path.display());
    }
    for path in or_exit(xtgen_tablegen::write_subsets(out_dir, &merged)) {
        println!("{}", path.display());
    }
}

fn cmd_info(paths: &[PathBuf], features: &FeatureArgs) {
    let sources = load(paths);

    println!("=== Sources ===");
    for source in &sources {
        let opcodes = &source.isa.opcodes;
        let variants: usize = opcodes.iter().map(|op| op.variants.len()).sum();
        println!(
            "{:<16} opcodes: {:>5}  variants: {:>5}  args: {:>6}",
            source.cpu,
            opcodes.len(),
            variants,
            source.arg_count()
        );
    }

    let features = or_exit(features.load());
    if features.is_empty() {
        return;
    }
    let merged = merge_sources(&sources, &features);

    println!();
    println!("=== Feature subsets ===");
    for (name, opcodes) in merged.iter() {
        let multi = opcodes.values().filter(|op| op.variants.len() > 1).count();
        let no_pattern = opcodes
            .values()
            .filter_map(|op| op.primary_variant())
            .filter(|v| {
                v.args
                    .iter()
                    .filter(|a| a.direction == xtgen_isa::Direction::Output)
                    .count()
                    > 1
            })
            .count();
        println!(
            "{name:<16} opcodes: {:>5}  multi-variant: {multi:>4}  multi-result: {no_pattern:>4}",
            opcodes.len()
        );
    }
}
