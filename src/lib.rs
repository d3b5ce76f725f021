//! Evolves random strings toward a target string with a genetic algorithm.
//!
//! The engine lives in [`ga`]: immutable [`Chromosome`](ga::Chromosome)s
//! scored by character-code distance to the target, and a
//! [`Population`](ga::Population) that advances one generation per
//! [`evolve`](ga::Population::evolve) call using elitism, tournament
//! selection, single-point crossover, and point mutation.
//!
//! [`GaRunner`](ga::GaRunner) wraps the generation loop (exact match,
//! generation budget, time limit, cancellation). The `hello-ga` binary is a
//! thin console front end over it.
//!
//! ```
//! use hello_ga::ga::{GaConfig, GaRunner};
//!
//! let config = GaConfig::default()
//!     .with_population_size(1024)
//!     .with_mutation_rate(0.05)
//!     .with_max_generations(20000)
//!     .with_seed(42);
//! let result = GaRunner::run(&config).unwrap();
//! assert!(result.converged);
//! assert_eq!(result.best.as_str(), "Hello, world!");
//! ```

pub mod ga;
