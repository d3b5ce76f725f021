//! GA configuration.
//!
//! [`GaConfig`] holds every parameter of a run: the target string, the
//! population parameters consumed by [`Population`](super::Population), and
//! the stopping rules applied by [`GaRunner`](super::GaRunner).

use super::error::{GaError, Result};
use super::target::Target;

/// Configuration for the string-evolving genetic algorithm.
///
/// # Defaults
///
/// ```
/// use hello_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.target, "Hello, world!");
/// assert_eq!(config.population_size, 2048);
/// assert_eq!(config.max_generations, 16384);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use hello_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(1024)
///     .with_tournament_size(3)
///     .with_elitism_rate(0.1)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
///
/// Builders store values as given; out-of-range rates are reported by
/// [`validate`](Self::validate) rather than silently clamped.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// The string the population evolves toward.
    ///
    /// Must be non-empty and drawn from
    /// [`GENE_ALPHABET`](super::GENE_ALPHABET) (space through `y`).
    pub target: String,

    /// Number of chromosomes in the population.
    pub population_size: usize,

    /// Extra random draws per tournament, after the initial candidate.
    ///
    /// Must be in `1..=population_size`.
    pub tournament_size: usize,

    /// Probability that a non-elite slot is filled by crossover (0.0–1.0).
    pub crossover_rate: f64,

    /// Fraction of the fittest chromosomes copied unchanged into the next
    /// generation (0.0 inclusive – 1.0 exclusive).
    pub elitism_rate: f64,

    /// Probability that a placed chromosome is mutated (0.0–1.0).
    pub mutation_rate: f64,

    /// Maximum number of `evolve()` calls the runner performs.
    pub max_generations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked before each generation, so a run may exceed it by one
    /// generation's worth of work.
    pub time_limit_ms: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            target: "Hello, world!".to_string(),
            population_size: 2048,
            tournament_size: 3,
            crossover_rate: 0.8,
            elitism_rate: 0.1,
            mutation_rate: 0.03,
            max_generations: 16384,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl GaConfig {
    /// Sets the target string.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the elitism rate.
    pub fn with_elitism_rate(mut self, rate: f64) -> Self {
        self.elitism_rate = rate;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Preset for quick runs: small population, short budget.
    ///
    /// - Population: 256, Generations: 2000, Mutation: 0.05, Time limit: 10s
    pub fn fast() -> Self {
        Self {
            population_size: 256,
            max_generations: 2000,
            mutation_rate: 0.05,
            time_limit_ms: Some(10_000),
            ..Self::default()
        }
    }

    /// Preset for long targets: large population, generous budget.
    ///
    /// - Population: 4096, Generations: 32768, Tournament: 4
    pub fn thorough() -> Self {
        Self {
            population_size: 4096,
            max_generations: 32768,
            tournament_size: 4,
            ..Self::default()
        }
    }

    /// Number of chromosomes copied unchanged by elitism each generation.
    ///
    /// `round(population_size * elitism_rate)`, never more than the
    /// population.
    pub fn elite_count(&self) -> usize {
        let count = (self.population_size as f64 * self.elitism_rate).round() as usize;
        count.min(self.population_size)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidConfiguration`] naming the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        Target::new(&self.target)?;
        if self.population_size == 0 {
            return Err(invalid("population_size must be at least 1"));
        }
        if self.tournament_size == 0 {
            return Err(invalid("tournament_size must be at least 1"));
        }
        if self.tournament_size > self.population_size {
            return Err(invalid("tournament_size must not exceed population_size"));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(invalid("crossover_rate must be within [0.0, 1.0]"));
        }
        if !(0.0..1.0).contains(&self.elitism_rate) {
            return Err(invalid("elitism_rate must be within [0.0, 1.0)"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid("mutation_rate must be within [0.0, 1.0]"));
        }
        if self.time_limit_ms == Some(0) {
            return Err(invalid("time_limit_ms must be positive or None"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> GaError {
    GaError::InvalidConfiguration(msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.target, "Hello, world!");
        assert_eq!(config.population_size, 2048);
        assert_eq!(config.tournament_size, 3);
        assert!((config.crossover_rate - 0.8).abs() < 1e-10);
        assert!((config.elitism_rate - 0.1).abs() < 1e-10);
        assert!((config.mutation_rate - 0.03).abs() < 1e-10);
        assert_eq!(config.max_generations, 16384);
        assert!(config.seed.is_none());
        assert!(config.time_limit_ms.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_target("abc")
            .with_population_size(200)
            .with_tournament_size(5)
            .with_crossover_rate(0.7)
            .with_elitism_rate(0.2)
            .with_mutation_rate(0.05)
            .with_max_generations(1000)
            .with_seed(42)
            .with_time_limit_ms(500);

        assert_eq!(config.target, "abc");
        assert_eq!(config.population_size, 200);
        assert_eq!(config.tournament_size, 5);
        assert!((config.crossover_rate - 0.7).abs() < 1e-10);
        assert!((config.elitism_rate - 0.2).abs() < 1e-10);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.max_generations, 1000);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.time_limit_ms, Some(500));
    }

    #[test]
    fn test_validate_zero_population() {
        let config = GaConfig::default().with_population_size(0);
        assert!(matches!(
            config.validate(),
            Err(GaError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_validate_tournament_size() {
        assert!(GaConfig::default().with_tournament_size(0).validate().is_err());

        let config = GaConfig::default()
            .with_population_size(4)
            .with_tournament_size(5);
        assert!(config.validate().is_err());

        let config = GaConfig::default()
            .with_population_size(4)
            .with_tournament_size(4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rates() {
        assert!(GaConfig::default().with_crossover_rate(-0.1).validate().is_err());
        assert!(GaConfig::default().with_crossover_rate(1.1).validate().is_err());
        assert!(GaConfig::default().with_mutation_rate(1.5).validate().is_err());
        assert!(GaConfig::default().with_mutation_rate(f64::NAN).validate().is_err());
        assert!(GaConfig::default().with_elitism_rate(1.0).validate().is_err());
        assert!(GaConfig::default().with_elitism_rate(-0.01).validate().is_err());

        for rate in [0.0, 1.0] {
            assert!(GaConfig::default().with_crossover_rate(rate).validate().is_ok());
            assert!(GaConfig::default().with_mutation_rate(rate).validate().is_ok());
        }
        assert!(GaConfig::default().with_elitism_rate(0.99).validate().is_ok());
    }

    #[test]
    fn test_validate_target() {
        assert!(GaConfig::default().with_target("").validate().is_err());
        assert!(GaConfig::default().with_target("über").validate().is_err());
        assert!(GaConfig::default().with_target("Hi there").validate().is_ok());
    }

    #[test]
    fn test_validate_unreachable_target() {
        // Genes never contain 'z' or above, so these could never converge.
        for target in ["zz", "pizza", "{braces}", "tilde~"] {
            assert!(
                matches!(
                    GaConfig::default().with_target(target).validate(),
                    Err(GaError::InvalidConfiguration(_))
                ),
                "{target:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_zero_time_limit() {
        let config = GaConfig::default().with_time_limit_ms(0);
        assert!(config.validate().is_err());
        let config = GaConfig::default().with_time_limit_ms(1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_elite_count_rounds() {
        let config = GaConfig::default()
            .with_population_size(1024)
            .with_elitism_rate(0.1);
        assert_eq!(config.elite_count(), 102);

        let config = GaConfig::default()
            .with_population_size(15)
            .with_elitism_rate(0.1);
        assert_eq!(config.elite_count(), 2); // 1.5 rounds up

        let config = GaConfig::default()
            .with_population_size(10)
            .with_elitism_rate(0.99);
        assert_eq!(config.elite_count(), 10);
    }

    #[test]
    fn test_presets() {
        let config = GaConfig::fast();
        assert_eq!(config.population_size, 256);
        assert_eq!(config.max_generations, 2000);
        assert_eq!(config.time_limit_ms, Some(10_000));
        assert!(config.validate().is_ok());

        let config = GaConfig::thorough();
        assert_eq!(config.population_size, 4096);
        assert_eq!(config.tournament_size, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_preset_chainable() {
        let config = GaConfig::fast().with_target("abc").with_seed(1);
        assert_eq!(config.target, "abc");
        assert_eq!(config.seed, Some(1));
        assert_eq!(config.population_size, 256);
    }
}
