//! Generation loop execution.
//!
//! [`GaRunner`] drives a [`Population`] until an exact match is found, the
//! generation budget runs out, the time limit passes, or a cancellation
//! flag is raised.

use super::chromosome::Chromosome;
use super::config::GaConfig;
use super::error::Result;
use super::population::Population;
use log::info;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The fittest chromosome of the final generation.
    pub best: Chromosome,

    /// Number of `evolve()` calls performed.
    pub generations: usize,

    /// Whether the best chromosome matches the target exactly.
    pub converged: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Whether the run stopped on the wall-clock limit.
    pub timed_out: bool,

    /// Wall-clock time spent, including population construction.
    pub elapsed: Duration,

    /// Best fitness of the initial population, then after each generation.
    pub fitness_history: Vec<u32>,
}

/// Executes the generation loop.
///
/// # Usage
///
/// ```
/// use hello_ga::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::fast()
///     .with_target("GA")
///     .with_max_generations(50)
///     .with_seed(42);
/// let result = GaRunner::run(&config).unwrap();
/// assert!(result.generations <= 50);
/// assert_eq!(result.fitness_history.len(), result.generations + 1);
/// assert!(result.best.fitness() <= result.fitness_history[0]);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA to completion.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidConfiguration`](super::GaError::InvalidConfiguration)
    /// if the configuration does not validate.
    pub fn run(config: &GaConfig) -> Result<GaResult> {
        Self::run_with(config, None, |_, _| {})
    }

    /// Runs the GA with an optional cancellation flag and a callback invoked
    /// after every generation with the generation number and current best.
    ///
    /// If `cancel` is set to `true`, the loop stops before the next
    /// generation and returns the best chromosome found so far.
    pub fn run_with<F>(
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
        on_generation: F,
    ) -> Result<GaResult>
    where
        F: FnMut(usize, &Chromosome),
    {
        let start = Instant::now();
        let population = Population::new(config)?;
        Ok(Self::drive(population, config, cancel, on_generation, start))
    }

    /// Runs the GA with an injected generator; `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(config: &GaConfig, rng: R) -> Result<GaResult> {
        let start = Instant::now();
        let population = Population::with_rng(config, rng)?;
        Ok(Self::drive(population, config, None, |_, _| {}, start))
    }

    fn drive<R: Rng, F>(
        mut population: Population<R>,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
        mut on_generation: F,
        start: Instant,
    ) -> GaResult
    where
        F: FnMut(usize, &Chromosome),
    {
        let time_limit = config.time_limit_ms.map(Duration::from_millis);
        let mut fitness_history = Vec::new();
        fitness_history.push(population.best().fitness());

        let mut cancelled = false;
        let mut timed_out = false;

        while !population.best().is_exact() && population.generation() < config.max_generations
        {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if let Some(limit) = time_limit {
                if start.elapsed() >= limit {
                    timed_out = true;
                    break;
                }
            }

            population.evolve();
            fitness_history.push(population.best().fitness());
            on_generation(population.generation(), population.best());
        }

        let best = population.best().clone();
        let elapsed = start.elapsed();
        let reason = if best.is_exact() {
            "exact match"
        } else if cancelled {
            "cancelled"
        } else if timed_out {
            "time limit"
        } else {
            "generation budget exhausted"
        };
        info!(
            "stopped after {} generations ({reason}): best={:?} fitness={} in {:?}",
            population.generation(),
            best.as_str(),
            best.fitness(),
            elapsed
        );

        GaResult {
            converged: best.is_exact(),
            best,
            generations: population.generation(),
            cancelled,
            timed_out,
            elapsed,
            fitness_history,
        }
    }
}
