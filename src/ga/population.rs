//! Generational population.
//!
//! [`Population`] owns a fitness-sorted set of chromosomes and replaces it
//! wholesale on every [`evolve`](Population::evolve):
//! elitism → tournament crossover / copy → mutation → sort.

use super::chromosome::Chromosome;
use super::config::GaConfig;
use super::error::Result;
use super::random::rng_from_seed;
use super::selection::tournament;
use super::target::Target;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::Rng;

/// A fixed-size population of chromosomes, sorted ascending by fitness.
///
/// The sort invariant holds after construction and after every
/// [`evolve`](Self::evolve) call, so [`best`](Self::best) is always the
/// first member.
///
/// The population owns its random generator. Use [`with_rng`](Self::with_rng)
/// to inject one, e.g. a seeded generator for deterministic tests.
///
/// # Usage
///
/// ```
/// use hello_ga::ga::{GaConfig, Population};
///
/// let config = GaConfig::default()
///     .with_target("Hi!")
///     .with_population_size(64)
///     .with_seed(7);
/// let mut pop = Population::new(&config).unwrap();
/// let initial = pop.best().fitness();
/// while !pop.best().is_exact() && pop.generation() < 100 {
///     pop.evolve();
/// }
/// // Elites survive, so the best never gets worse.
/// assert!(pop.best().fitness() <= initial);
/// ```
#[derive(Debug)]
pub struct Population<R: Rng = StdRng> {
    members: Vec<Chromosome>,
    target: Target,
    tournament_size: usize,
    elite_count: usize,
    crossover_rate: f64,
    elitism_rate: f64,
    mutation_rate: f64,
    generation: usize,
    rng: R,
}

impl Population<StdRng> {
    /// Creates a random population seeded from `config.seed`, or from OS
    /// entropy when no seed is set.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidConfiguration`](super::GaError::InvalidConfiguration)
    /// if the configuration does not validate.
    pub fn new(config: &GaConfig) -> Result<Self> {
        Self::with_rng(config, rng_from_seed(config.seed))
    }
}

impl<R: Rng> Population<R> {
    /// Creates a random population drawing from the given generator.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(config: &GaConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let target = Target::new(&config.target)?;

        let mut members: Vec<Chromosome> = (0..config.population_size)
            .map(|_| Chromosome::generate_random(&target, &mut rng))
            .collect();
        members.sort_by_key(Chromosome::fitness);

        trace!(
            "initialized population: size={}, target={:?}, best={}",
            members.len(),
            target.as_str(),
            members[0].fitness()
        );

        Ok(Self {
            members,
            target,
            tournament_size: config.tournament_size,
            elite_count: config.elite_count(),
            crossover_rate: config.crossover_rate,
            elitism_rate: config.elitism_rate,
            mutation_rate: config.mutation_rate,
            generation: 0,
            rng,
        })
    }

    /// Replaces the population with the next generation.
    ///
    /// 1. The `elite_count()` fittest members are copied unchanged.
    /// 2. Each remaining slot is filled, with probability `crossover_rate`,
    ///    by a child of two tournament-selected parents; the complementary
    ///    child (same pivot, parents swapped) takes the following slot if
    ///    one is left. Otherwise the slot keeps the old member at the same
    ///    index.
    /// 3. Every crossover child or copy is mutated with probability
    ///    `mutation_rate`, independently.
    /// 4. The new generation is sorted by fitness and swapped in.
    pub fn evolve(&mut self) {
        let size = self.members.len();
        let mut next_gen: Vec<Chromosome> = Vec::with_capacity(size);
        next_gen.extend_from_slice(&self.members[..self.elite_count]);

        while next_gen.len() < size {
            if self.rng.random_bool(self.crossover_rate) {
                let p1 = tournament(&self.members, self.tournament_size, &mut self.rng);
                let p2 = tournament(&self.members, self.tournament_size, &mut self.rng);
                let (p1, p2) = (&self.members[p1], &self.members[p2]);
                let pivot = self.rng.random_range(0..self.target.len());

                let child = p1.mate_at(p2, pivot);
                next_gen.push(maybe_mutate(child, self.mutation_rate, &mut self.rng));

                if next_gen.len() < size {
                    let child = p2.mate_at(p1, pivot);
                    next_gen.push(maybe_mutate(child, self.mutation_rate, &mut self.rng));
                }
            } else {
                let copy = self.members[next_gen.len()].clone();
                next_gen.push(maybe_mutate(copy, self.mutation_rate, &mut self.rng));
            }
        }

        next_gen.sort_by_key(Chromosome::fitness);
        self.members = next_gen;
        self.generation += 1;

        debug!(
            "generation {}: best={} worst={} gene={:?}",
            self.generation,
            self.best().fitness(),
            self.members[size - 1].fitness(),
            self.best().as_str()
        );
    }

    /// The fittest chromosome.
    pub fn best(&self) -> &Chromosome {
        &self.members[0]
    }

    /// All members, sorted ascending by fitness.
    pub fn members(&self) -> &[Chromosome] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`; construction rejects empty populations.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of completed `evolve()` calls.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn elitism_rate(&self) -> f64 {
        self.elitism_rate
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Members carried over unchanged each generation, as computed by
    /// [`GaConfig::elite_count`].
    pub fn elite_count(&self) -> usize {
        self.elite_count
    }
}

fn maybe_mutate<R: Rng>(chromosome: Chromosome, rate: f64, rng: &mut R) -> Chromosome {
    if rng.random_bool(rate) {
        chromosome.mutate(rng)
    } else {
        chromosome
    }
}
