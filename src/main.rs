//! hello-ga CLI - evolve a string toward a target and report each generation.

use std::process;

use hello_ga::ga::{GaConfig, GaRunner};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(&args[0]);
        return;
    }

    let mut config = GaConfig::default();
    if let Some(target) = args.get(1) {
        config = config.with_target(target.as_str());
    }
    if let Some(raw) = args.get(2) {
        let generations: usize = raw.parse().unwrap_or_else(|e| {
            eprintln!("Invalid MAX_GENERATIONS {raw:?}: {e}");
            process::exit(1);
        });
        config = config.with_max_generations(generations);
    }

    let result = GaRunner::run_with(&config, None, |generation, best| {
        println!("Generation {generation}: {best}");
    })
    .unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    if !result.converged {
        println!("Maximum generations reached without success.");
    }
    println!("Generation {}: {}", result.generations, result.best);
    println!("Total execution time: {}ms", result.elapsed.as_millis());
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [TARGET] [MAX_GENERATIONS]");
    eprintln!();
    eprintln!("Evolve a random string toward TARGET with a genetic algorithm.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  TARGET           Target string, characters space through y (default: \"Hello, world!\")");
    eprintln!("  MAX_GENERATIONS  Generation budget (default: 16384)");
    eprintln!();
    eprintln!("Set RUST_LOG=debug for per-generation statistics.");
}
