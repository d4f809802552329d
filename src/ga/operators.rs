//! Genetic operators for subset-selection chromosomes.
//!
//! Free functions over [`Chromosome`] values: tournament selection,
//! single-point crossover, and per-bit flip mutation. Every operator takes
//! an explicit `&mut R: Rng`, so runs are reproducible under a seeded
//! generator and tests can force specific draws.
//!
//! # Reference
//! Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//! and the Effects of Noise"

use rand::Rng;

use super::{Chromosome, FitnessEvaluator};

/// Selects one chromosome by tournament.
///
/// Draws `tournament_size` entrants independently and uniformly **with
/// replacement**, then returns the fittest. Ties resolve to the
/// earliest-drawn entrant (stable sort).
pub fn tournament_selection<R: Rng>(
    population: &[Chromosome],
    evaluator: &FitnessEvaluator,
    tournament_size: usize,
    rng: &mut R,
) -> Chromosome {
    debug_assert!(!population.is_empty());
    let mut entrants: Vec<&Chromosome> = (0..tournament_size)
        .map(|_| &population[rng.random_range(0..population.len())])
        .collect();
    entrants.sort_by(|a, b| evaluator.evaluate(b).total_cmp(&evaluator.evaluate(a)));
    entrants[0].clone()
}

/// Selects `count` parents by repeated tournaments.
///
/// Tournaments are independent, so the same chromosome may be selected more
/// than once.
pub fn select_parents<R: Rng>(
    population: &[Chromosome],
    evaluator: &FitnessEvaluator,
    count: usize,
    tournament_size: usize,
    rng: &mut R,
) -> Vec<Chromosome> {
    (0..count)
        .map(|_| tournament_selection(population, evaluator, tournament_size, rng))
        .collect()
}

/// Recombines two parents at a fixed crossover point.
///
/// `point` must lie in `[1, len - 1]`. Child 1 takes parent 1's head and
/// parent 2's tail; child 2 the converse.
pub fn crossover_at(
    parent1: &Chromosome,
    parent2: &Chromosome,
    point: usize,
) -> (Chromosome, Chromosome) {
    let mut child1 = parent1.clone();
    let mut child2 = parent2.clone();
    child1.swap_tails(&mut child2, point);
    (child1, child2)
}

/// Recombines two parents at a uniformly random point in `[1, len - 1]`.
pub fn single_point_crossover<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    debug_assert!(parent1.len() >= 2);
    debug_assert_eq!(parent1.len(), parent2.len());
    let point = rng.random_range(1..parent1.len());
    crossover_at(parent1, parent2, point)
}

/// Produces offspring from consecutive parent pairs.
///
/// Parents are paired in order (0 & 1, 2 & 3, ...); each pair yields two
/// children by single-point crossover. An odd leftover parent is carried
/// into the offspring unchanged. Offspring length equals parent length.
pub fn crossover_pairs<R: Rng>(selected: &[Chromosome], rng: &mut R) -> Vec<Chromosome> {
    let mut offspring = Vec::with_capacity(selected.len());
    let mut pairs = selected.chunks_exact(2);
    for pair in &mut pairs {
        let (c1, c2) = single_point_crossover(&pair[0], &pair[1], rng);
        offspring.push(c1);
        offspring.push(c2);
    }
    if let [leftover] = pairs.remainder() {
        offspring.push(leftover.clone());
    }
    offspring
}

/// Flips each bit independently with probability `mutation_rate`, in place.
pub fn bit_flip_mutation<R: Rng>(chromosome: &mut Chromosome, mutation_rate: f64, rng: &mut R) {
    for i in 0..chromosome.len() {
        if rng.random_bool(mutation_rate) {
            chromosome.flip(i);
        }
    }
}

/// Applies bit-flip mutation to every chromosome in the slice.
pub fn mutate_all<R: Rng>(offspring: &mut [Chromosome], mutation_rate: f64, rng: &mut R) {
    for chromosome in offspring.iter_mut() {
        bit_flip_mutation(chromosome, mutation_rate, rng);
    }
}
