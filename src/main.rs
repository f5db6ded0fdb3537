//! Ising CLI - Run simulations from JSON configuration.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use ising_mc::{
    animation::{Renderer, TerminalPlayer},
    compute::{LatticeStats, SimulationEngine},
    schema::{Seed, SimulationConfig},
};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [--no-play]", program_name(&args));
        eprintln!();
        eprintln!("Run an Ising model simulation from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to simulation configuration file");
        eprintln!("  --no-play    Skip terminal playback of the snapshots");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let play = !args.iter().skip(2).any(|a| a == "--no-play");

    // Load configuration
    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: SimulationConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    // Seed file is optional; without one the engine starts from random spins.
    let seed_path = config_path.with_extension("seed.json");
    let initial = if seed_path.exists() {
        let seed_str = fs::read_to_string(&seed_path).unwrap_or_else(|e| {
            eprintln!("Error reading seed file: {}", e);
            std::process::exit(1);
        });
        let seed: Seed = serde_json::from_str(&seed_str).unwrap_or_else(|e| {
            eprintln!("Error parsing seed: {}", e);
            std::process::exit(1);
        });
        let lattice = seed
            .generate(config.height, config.width)
            .unwrap_or_else(|e| {
                eprintln!("Error generating seed lattice: {}", e);
                std::process::exit(1);
            });
        Some(lattice)
    } else {
        None
    };

    println!("Ising Simulation");
    println!("================");
    println!("Lattice: {}x{}", config.width, config.height);
    println!("T: {}  k: {}", config.temperature, config.boltzmann);
    println!(
        "MCS: {} ({} attempted updates)",
        config.max_mcs,
        config.total_updates()
    );
    match config.rng_seed {
        Some(seed) => println!("RNG seed: {}", seed),
        None => println!("RNG seed: entropy"),
    }
    println!();

    let mut engine = SimulationEngine::from_config(config);
    let max_mcs = engine.config().max_mcs;

    println!("Running simulation...");
    let start = Instant::now();

    let run = engine
        .run_with_progress(initial, |p| {
            println!(
                "  MCS {}/{}: accepted={}, rejected={}, unchanged={}",
                p.mcs, max_mcs, p.stats.accepted, p.stats.rejected, p.stats.unchanged
            );
        })
        .unwrap_or_else(|e| {
            eprintln!("Simulation failed: {}", e);
            std::process::exit(1);
        });

    let elapsed = start.elapsed();

    if play {
        TerminalPlayer::stdout()
            .render(&run.snapshots)
            .unwrap_or_else(|e| {
                eprintln!("Playback failed: {}", e);
                std::process::exit(1);
            });
    }

    // The initial snapshot always exists, so first/last are present.
    if let (Some(first), Some(last)) = (run.snapshots.first(), run.snapshots.last()) {
        let initial_stats = LatticeStats::from_lattice(first);
        let final_stats = LatticeStats::from_lattice(last);

        println!();
        println!("Initial state:");
        print_stats(&initial_stats);
        println!("Final state:");
        print_stats(&final_stats);
    }

    println!();
    println!(
        "Snapshots: {}  Acceptance ratio: {:.4}",
        run.snapshots.len(),
        run.stats.acceptance_ratio()
    );
    println!(
        "Time: {:.2}s ({:.0} updates/s)",
        elapsed.as_secs_f64(),
        run.stats.attempted as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
    );
}

/// Invoked name, falling back to the crate binary name for an empty argv.
fn program_name(args: &[String]) -> &str {
    args.first().map_or("ising-mc", String::as_str)
}

fn print_stats(stats: &LatticeStats) {
    println!(
        "  Ones: {}/{} ({:.2}%)",
        stats.ones,
        stats.sites,
        stats.fraction_ones * 100.0
    );
    println!("  Unlike neighbor pairs: {}", stats.unlike_pairs);
}

fn print_example_config() {
    let config = SimulationConfig::default();
    let seed = Seed::default();

    println!("Example configuration (config.json):");
    println!(
        "{}",
        serde_json::to_string_pretty(&config).unwrap_or_default()
    );
    println!();
    println!("Example seed (config.seed.json):");
    println!("{}", serde_json::to_string_pretty(&seed).unwrap_or_default());
}
