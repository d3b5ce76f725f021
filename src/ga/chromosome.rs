//! Candidate solutions and their genetic operators.
//!
//! A [`Chromosome`] is an immutable string gene paired with its fitness
//! against a [`Target`]. Mutation and crossover never touch the receiver;
//! they build new chromosomes, so a population can keep referring to the
//! previous generation while the next one is assembled.
//!
//! # Operators
//!
//! - [`Chromosome::generate_random`]: uniform gene over [`GENE_ALPHABET`]
//! - [`Chromosome::mutate`]: single-point perturbation, modulo `GENE_ALPHABET.end`
//! - [`Chromosome::mate`] / [`Chromosome::mate_at`]: single-point crossover,
//!   one child per call

use super::error::{GaError, Result};
use super::target::Target;
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;

/// Character codes drawn for random genes and mutation deltas, and the
/// characters a target may contain.
///
/// The upper bound doubles as the mutation modulus, so a mutated character
/// is an ASCII code in `[0, GENE_ALPHABET.end)`. Mutation can wrap below
/// `GENE_ALPHABET.start` into control characters; only random genes are
/// guaranteed printable. This range matches printable English text and does
/// not generalize to arbitrary targets.
pub const GENE_ALPHABET: Range<u8> = 32..122;

/// An immutable candidate solution.
///
/// Fitness is the sum of absolute character-code differences between the
/// gene and the target, computed once at construction. Lower is better and
/// zero is an exact match.
///
/// Equality compares genes. Ordering by fitness is available through
/// [`cmp_fitness`](Self::cmp_fitness); chromosomes with equal fitness but
/// different genes compare `Equal` there.
#[derive(Clone)]
pub struct Chromosome {
    gene: Box<[u8]>,
    fitness: u32,
    target: Target,
}

impl Chromosome {
    /// Creates a chromosome from a gene string.
    ///
    /// # Errors
    /// - [`GaError::InvalidGene`] if the gene length differs from the target's
    /// - [`GaError::NonAsciiGene`] if the gene contains non-ASCII characters
    ///
    /// # Examples
    ///
    /// ```
    /// use hello_ga::ga::{Chromosome, Target};
    ///
    /// let target = Target::new("Hello, world!").unwrap();
    /// let exact = Chromosome::new("Hello, world!", &target).unwrap();
    /// assert_eq!(exact.fitness(), 0);
    ///
    /// assert!(Chromosome::new("Hello", &target).is_err());
    /// ```
    pub fn new(gene: &str, target: &Target) -> Result<Self> {
        if !gene.is_ascii() {
            return Err(GaError::NonAsciiGene);
        }
        if gene.len() != target.len() {
            return Err(GaError::InvalidGene {
                expected: target.len(),
                actual: gene.len(),
            });
        }
        Ok(Self::from_bytes(gene.as_bytes().into(), target.clone()))
    }

    /// Builds a chromosome from bytes already known to satisfy the length
    /// and ASCII invariants.
    fn from_bytes(gene: Box<[u8]>, target: Target) -> Self {
        debug_assert_eq!(gene.len(), target.len());
        let fitness = target.distance(&gene);
        Self {
            gene,
            fitness,
            target,
        }
    }

    /// Creates a chromosome with every character drawn uniformly from
    /// [`GENE_ALPHABET`].
    pub fn generate_random<R: Rng>(target: &Target, rng: &mut R) -> Self {
        let gene: Box<[u8]> = (0..target.len())
            .map(|_| rng.random_range(GENE_ALPHABET))
            .collect();
        Self::from_bytes(gene, target.clone())
    }

    /// Returns a copy with exactly one character perturbed.
    ///
    /// A position is chosen uniformly; its code `c` becomes
    /// `(c + delta) % GENE_ALPHABET.end` with `delta` uniform in
    /// `GENE_ALPHABET`. Since `delta` is never a multiple of the modulus,
    /// the chosen character always changes. The result may be a control
    /// character (code below 32).
    pub fn mutate<R: Rng>(&self, rng: &mut R) -> Self {
        let mut gene = self.gene.clone();
        let idx = rng.random_range(0..gene.len());
        let delta = u16::from(rng.random_range(GENE_ALPHABET));
        let modulus = u16::from(GENE_ALPHABET.end);
        // The modulus keeps the result below 122, so the cast is lossless.
        gene[idx] = ((u16::from(gene[idx]) + delta) % modulus) as u8;
        Self::from_bytes(gene, self.target.clone())
    }

    /// Single-point crossover at a uniformly random pivot in `[0, len)`.
    ///
    /// The child takes `[0, pivot)` from `self` and `[pivot, len)` from
    /// `other`. Call again with the arguments swapped for a second child.
    ///
    /// # Panics
    /// Panics if the parents have different lengths.
    pub fn mate<R: Rng>(&self, other: &Self, rng: &mut R) -> Self {
        let pivot = rng.random_range(0..self.len());
        self.mate_at(other, pivot)
    }

    /// Single-point crossover at an explicit pivot.
    ///
    /// `a.mate_at(&b, p)` and `b.mate_at(&a, p)` are complementary children.
    ///
    /// # Panics
    /// Panics if the parents have different lengths or `pivot > len`.
    pub fn mate_at(&self, other: &Self, pivot: usize) -> Self {
        assert_eq!(
            self.len(),
            other.len(),
            "parents must have equal length"
        );
        assert!(pivot <= self.len(), "pivot out of range");

        let mut gene = Vec::with_capacity(self.len());
        gene.extend_from_slice(&self.gene[..pivot]);
        gene.extend_from_slice(&other.gene[pivot..]);
        Self::from_bytes(gene.into_boxed_slice(), self.target.clone())
    }

    /// Compares two chromosomes by fitness, ascending.
    pub fn cmp_fitness(&self, other: &Self) -> Ordering {
        self.fitness.cmp(&other.fitness)
    }

    /// The gene as ASCII bytes.
    pub fn gene(&self) -> &[u8] {
        &self.gene
    }

    /// The gene as a string slice.
    pub fn as_str(&self) -> &str {
        // Genes are ASCII by construction.
        std::str::from_utf8(&self.gene).unwrap_or_default()
    }

    pub fn fitness(&self) -> u32 {
        self.fitness
    }

    /// `true` when the gene equals the target.
    pub fn is_exact(&self) -> bool {
        self.fitness == 0
    }

    pub fn len(&self) -> usize {
        self.gene.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gene.is_empty()
    }

    pub fn target(&self) -> &Target {
        &self.target
    }
}

impl PartialEq for Chromosome {
    fn eq(&self, other: &Self) -> bool {
        self.gene == other.gene
    }
}

impl Eq for Chromosome {}

impl std::hash::Hash for Chromosome {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.gene.hash(state);
    }
}

impl fmt::Debug for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chromosome")
            .field("gene", &self.as_str())
            .field("fitness", &self.fitness)
            .finish()
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
