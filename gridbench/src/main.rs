//! gridbench CLI: generate terrain maps and benchmark path searches on them.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use gridbench::{
    AlgorithmKind, BenchConfig, BenchmarkRunner, CsvDirSink, DirMapSource, MapReport, MapSpec,
    generate_maps,
};
use gridbench_core::DiagonalMovement;
use gridbench_paths::PathCostMode;
use gridbench_terrain::MapPreset;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tracing::{Level, info};

/// Weighted-grid pathfinding benchmark.
#[derive(Parser)]
#[command(name = "gridbench")]
#[command(version, about, long_about = None)]
struct Cli {
    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate terrain maps as digit-per-cell text files.
    Generate {
        /// JSON config; only its terrain settings are used.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory the maps are written to.
        #[arg(long, default_value = "maps")]
        maps_dir: PathBuf,

        /// Map to generate, as name=WIDTHxHEIGHT or a preset name
        /// (small, medium, big). Repeatable; defaults to every preset.
        #[arg(long = "map")]
        maps: Vec<MapSpec>,
    },

    /// Run the benchmark and export CSV results.
    Run {
        /// JSON config file; command-line flags override its values.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory holding `<map>.txt` files.
        #[arg(long)]
        maps_dir: Option<PathBuf>,

        /// Directory CSV results are written under.
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Map id to run. Repeatable.
        #[arg(long = "map")]
        maps: Vec<String>,

        /// Trials per map.
        #[arg(short, long)]
        trials: Option<usize>,

        /// Diagonal movement policy.
        #[arg(long)]
        movement: Option<DiagonalMovement>,

        /// Algorithm to run (A-Star, Dijkstra). Repeatable.
        #[arg(long = "algorithm")]
        algorithms: Vec<AlgorithmKind>,

        /// Seed for endpoint sampling.
        #[arg(long)]
        seed: Option<u64>,

        /// Path cost accounting: full, or legacy (drops the last step).
        #[arg(long)]
        cost_mode: Option<PathCostMode>,
    },
}

fn load_config(path: Option<&PathBuf>) -> gridbench::Result<BenchConfig> {
    match path {
        Some(p) => BenchConfig::load(p),
        None => Ok(BenchConfig::default()),
    }
}

fn print_reports(reports: &[MapReport]) {
    for report in reports {
        match &report.outcome {
            Ok(summaries) => {
                for s in summaries {
                    println!(
                        "{:<8} {:<9} trials={:<6} found={:<6} mean={:.6}s",
                        report.map_id, s.algorithm, s.trials, s.found, s.mean_time
                    );
                }
            }
            Err(e) => println!("{:<8} FAILED: {e}", report.map_id),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Level::WARN
    } else {
        match cli.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    match cli.command {
        Commands::Generate {
            config,
            maps_dir,
            maps,
        } => {
            let config = load_config(config.as_ref())?;
            let specs = if maps.is_empty() {
                MapPreset::ALL.into_iter().map(MapSpec::from).collect()
            } else {
                maps
            };
            let written = generate_maps(&maps_dir, &specs, &config.terrain)?;
            info!("generated {} map(s) in {}", written.len(), maps_dir.display());
        }
        Commands::Run {
            config,
            maps_dir,
            output_dir,
            maps,
            trials,
            movement,
            algorithms,
            seed,
            cost_mode,
        } => {
            let mut config = load_config(config.as_ref())?;
            if let Some(dir) = maps_dir {
                config.maps_dir = dir;
            }
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }
            if !maps.is_empty() {
                config.maps = maps;
            }
            if let Some(n) = trials {
                config.trial_count = n;
            }
            if let Some(m) = movement {
                config.movement = m;
            }
            if !algorithms.is_empty() {
                config.algorithms = algorithms;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            if let Some(mode) = cost_mode {
                config.cost_mode = mode;
            }
            config.validate()?;

            let seed = config.seed.unwrap_or_else(|| rand::rng().random());
            info!(
                "benchmarking {:?} with {} trials each, movement {}, seed {seed}",
                config.maps, config.trial_count, config.movement
            );

            let algorithms = config.build_algorithms();
            let mut source = DirMapSource::new(&config.maps_dir);
            let mut runner = BenchmarkRunner::new(
                CsvDirSink::new(&config.output_dir),
                StdRng::seed_from_u64(seed),
            )
            .with_cost_mode(config.cost_mode);

            let reports = runner.run(&mut source, &config.maps, &algorithms, config.trial_count);
            print_reports(&reports);

            let failed = reports.iter().filter(|r| !r.is_ok()).count();
            if failed > 0 {
                return Err(format!("{failed} of {} map(s) failed", reports.len()).into());
            }
        }
    }
    Ok(())
}
