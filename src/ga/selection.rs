//! Parent selection.
//!
//! Tournament selection: sample candidates uniformly with replacement and
//! keep the fittest. Larger tournaments apply stronger selection pressure
//! without ranking the whole population.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::chromosome::Chromosome;
use rand::Rng;

/// Selects a parent by tournament and returns its index.
///
/// Starts from one uniformly random member, then draws `rounds` more
/// candidates, replacing the current pick whenever a strictly fitter one
/// turns up. `rounds == 0` degenerates to uniform random selection.
///
/// # Complexity
/// O(rounds) per selection
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<R: Rng>(population: &[Chromosome], rounds: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let n = population.len();
    let mut best_idx = rng.random_range(0..n);
    for _ in 0..rounds {
        let idx = rng.random_range(0..n);
        if population[idx].fitness() < population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::random::create_rng;
    use crate::ga::Target;

    fn make_population(genes: &[&str]) -> Vec<Chromosome> {
        let target = Target::new("aaaa").unwrap();
        genes
            .iter()
            .map(|g| Chromosome::new(g, &target).unwrap())
            .collect()
    }

    #[test]
    fn test_tournament_favors_best() {
        // fitness: 24, 6, 0, 32
        let pop = make_population(&["yaaa", "a[aa", "aaaa", "qqaa"]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[tournament(&pop, 3, &mut rng)] += 1;
        }
        // Four draws with replacement: 1 - (3/4)^4 ~ 68%
        let best_count = counts[2];
        assert!(
            best_count > 6000,
            "expected best to be selected >60% of the time, got {best_count}/{n}"
        );
    }

    #[test]
    fn test_zero_rounds_is_uniform() {
        let pop = make_population(&["yaaa", "baaa", "aaaa", "qaaa"]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[tournament(&pop, 0, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&["abcd"]);
        let mut rng = create_rng(42);
        assert_eq!(tournament(&pop, 3, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Chromosome> = vec![];
        let mut rng = create_rng(42);
        tournament(&pop, 3, &mut rng);
    }
}
