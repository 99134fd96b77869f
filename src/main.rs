// Clippy allows
#![allow(clippy::too_many_arguments)]

//! nonb-scan: detect non-canonical DNA structural motifs in a sequence.
//!
//! Usage: nonb-scan <COMMAND> [OPTIONS]

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process;

use nonb_scanner::engine::{ScanEngine, ScanOptions};
use nonb_scanner::registry::load_registry_dir;
use nonb_scanner::resolver::ResolveMode;

#[derive(Parser)]
#[command(name = "nonb-scan")]
#[command(version)]
#[command(about = "Detection engine for non-canonical (non-B) DNA structural motifs", long_about = None)]
struct Cli {
    /// Registry directory (defaults to the crate-bundled registries, or
    /// $NONB_REGISTRY_DIR if set)
    #[arg(long, global = true)]
    registry_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliMode {
    Strict,
    Hybrid,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a raw sequence file and write detected motifs as JSON
    Scan {
        /// Input file containing a single raw DNA sequence
        #[arg(short, long)]
        input: PathBuf,

        /// Cross-class overlap resolution mode
        #[arg(long, value_enum, default_value = "strict")]
        mode: CliMode,

        /// Cluster-detection sliding window length (bp)
        #[arg(long, default_value_t = 1000)]
        cluster_window: usize,

        /// Cluster-detection sliding window step (bp)
        #[arg(long, default_value_t = 100)]
        cluster_step: usize,

        /// Disable Rayon-parallel fan-out across detectors
        #[arg(long)]
        no_parallel: bool,
    },

    /// Registry maintenance
    Registry {
        #[command(subcommand)]
        command: RegistryCommands,
    },
}

#[derive(Subcommand)]
enum RegistryCommands {
    /// Load every class registry under a directory and report errors
    Validate {
        /// Registry root directory (one subdirectory per class)
        dir: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let registry_dir = cli
        .registry_dir
        .unwrap_or_else(|| PathBuf::from(nonb_scanner::config::default_registry_dir()));

    let result = match cli.command {
        Commands::Scan {
            input,
            mode,
            cluster_window,
            cluster_step,
            no_parallel,
        } => run_scan(registry_dir, input, mode, cluster_window, cluster_step, !no_parallel),
        Commands::Registry {
            command: RegistryCommands::Validate { dir },
        } => run_registry_validate(dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run_scan(
    registry_dir: PathBuf,
    input: PathBuf,
    mode: CliMode,
    cluster_window: usize,
    cluster_step: usize,
    parallel: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(&input)?;
    let registries = load_registry_dir(&registry_dir)?;
    let engine = ScanEngine::new(registries);

    let options = ScanOptions {
        mode: match mode {
            CliMode::Strict => ResolveMode::Strict,
            CliMode::Hybrid => ResolveMode::Hybrid,
        },
        cluster_window,
        cluster_step,
        parallel,
    };

    let motifs = engine.scan(raw.trim(), options)?;
    log::info!("scanned {} bases, found {} motifs", raw.trim().len(), motifs.len());

    let json = serde_json::to_string_pretty(&motifs.into_iter().map(MotifJson::from).collect::<Vec<_>>())?;
    println!("{json}");
    Ok(())
}

fn run_registry_validate(dir: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let registries = load_registry_dir(&dir)?;
    for class in nonb_scanner::registry::REGISTRY_CLASSES {
        let registry = registries.get(class).expect("load_registry_dir loads every class");
        println!("{class}: {} patterns OK", registry.len());
    }
    Ok(())
}

/// Serializable projection of [`nonb_scanner::motif::Motif`] (the internal
/// type intentionally has no `Serialize` impl — the wire format is owned by
/// the CLI, not the library).
#[derive(serde::Serialize)]
struct MotifJson {
    id: String,
    class: String,
    subclass: String,
    start: usize,
    end: usize,
    length: usize,
    score: f64,
    method: &'static str,
    strand: char,
    sequence: String,
}

impl From<nonb_scanner::motif::Motif> for MotifJson {
    fn from(m: nonb_scanner::motif::Motif) -> Self {
        Self {
            id: m.id,
            class: m.class.to_string(),
            subclass: m.subclass,
            start: m.start,
            end: m.end,
            length: m.length,
            score: m.score,
            method: m.method,
            strand: m.strand,
            sequence: m.sequence,
        }
    }
}
