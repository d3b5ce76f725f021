//! Genetic algorithm that evolves strings toward a target.
//!
//! A [`Population`] of [`Chromosome`]s, each an immutable string gene with
//! its distance to a [`Target`], is improved one generation at a time by
//! elitism, tournament selection, single-point crossover, and single-point
//! mutation.
//!
//! # Key Types
//!
//! - [`Target`]: The string being searched for
//! - [`Chromosome`]: Candidate solution with precomputed fitness (lower is better)
//! - [`Population`]: Fitness-sorted generation with [`evolve`](Population::evolve)
//! - [`GaConfig`]: Target, population parameters, and stopping rules
//! - [`GaRunner`]: Executes the generation loop, returning a [`GaResult`]
//!
//! # Randomness
//!
//! Every stochastic operation takes an explicit `Rng`. A [`Population`] owns
//! its generator; seed it through [`GaConfig::seed`] or inject one with
//! [`Population::with_rng`].
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod chromosome;
mod config;
mod error;
mod population;
pub mod random;
mod runner;
pub mod selection;
mod target;

pub use chromosome::{Chromosome, GENE_ALPHABET};
pub use config::GaConfig;
pub use error::{GaError, Result};
pub use population::Population;
pub use runner::{GaResult, GaRunner};
pub use target::Target;
