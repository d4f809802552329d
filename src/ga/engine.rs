//! Generational engine and replacement policy.
//!
//! [`GaEngine`] drives the fixed-iteration evolutionary loop: select
//! parents, recombine, mutate, then replace. Replacement is elitist — the
//! top half of the merged parent/offspring pool survives unconditionally,
//! and the remainder is filled by tournaments over the offspring pool.

use log::{info, trace};
use rand::Rng;
use thiserror::Error;

use super::operators::{crossover_pairs, mutate_all, select_parents, tournament_selection};
use super::{Chromosome, FitnessEvaluator};

/// GA parameters.
///
/// The defaults are the reference run: population 5, 10,000 generations,
/// mutation rate 0.30, tournament size 3.
#[derive(Debug, Clone, PartialEq)]
pub struct GaConfig {
    /// Number of chromosomes per generation (>= 2).
    pub population_size: usize,
    /// Fixed number of evolutionary cycles (>= 1).
    pub generations: usize,
    /// Per-bit flip probability in `[0, 1]`.
    pub mutation_rate: f64,
    /// Entrants per selection tournament (>= 1).
    pub tournament_size: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 5,
            generations: 10_000,
            mutation_rate: 0.30,
            tournament_size: 3,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the per-bit mutation rate.
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, tournament_size: usize) -> Self {
        self.tournament_size = tournament_size;
        self
    }

    /// Checks parameter bounds.
    ///
    /// Populations below 2 cannot supply crossover pairs and would starve
    /// the replacement fill loop, so they are rejected here rather than
    /// failing mid-run.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size < 2 {
            return Err(GaError::PopulationTooSmall(self.population_size));
        }
        if self.generations == 0 {
            return Err(GaError::ZeroGenerations);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::MutationRateOutOfRange(self.mutation_rate));
        }
        if self.tournament_size == 0 {
            return Err(GaError::ZeroTournamentSize);
        }
        Ok(())
    }
}

/// GA construction errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaError {
    /// Population size below the minimum of 2.
    #[error("population size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    /// Zero generations requested.
    #[error("generation count must be at least 1")]
    ZeroGenerations,
    /// Mutation rate outside `[0, 1]`.
    #[error("mutation rate must lie in [0, 1], got {0}")]
    MutationRateOutOfRange(f64),
    /// Zero-entrant tournaments cannot pick a winner.
    #[error("tournament size must be at least 1")]
    ZeroTournamentSize,
    /// Single-point crossover needs chromosomes of at least 2 bits.
    #[error("catalog must hold at least 2 providers, got {0}")]
    CatalogTooSmall(usize),
}

/// Snapshot of the best chromosome after one completed generation.
///
/// `best` is the front of the freshly replaced population. The elite slice
/// occupies the front in fitness order, so no re-sort happens before
/// reporting.
#[derive(Debug, Clone, Copy)]
pub struct GenerationReport<'a> {
    /// 1-based generation index.
    pub generation: usize,
    /// Fittest chromosome of this generation.
    pub best: &'a Chromosome,
    /// Its fitness.
    pub best_fitness: f64,
}

/// Outcome of a full run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best chromosome of the final generation.
    pub best: Chromosome,
    /// Its fitness.
    pub best_fitness: f64,
    /// Number of completed generations.
    pub generations: usize,
}

/// Fixed-iteration generational GA over a provider catalog.
#[derive(Debug, Clone)]
pub struct GaEngine {
    config: GaConfig,
    evaluator: FitnessEvaluator,
}

impl GaEngine {
    /// Creates an engine, rejecting invalid parameters.
    pub fn new(config: GaConfig, evaluator: FitnessEvaluator) -> Result<Self, GaError> {
        config.validate()?;
        if evaluator.catalog().len() < 2 {
            return Err(GaError::CatalogTooSmall(evaluator.catalog().len()));
        }
        Ok(Self { config, evaluator })
    }

    /// The engine's parameters.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// The engine's fitness evaluator.
    pub fn evaluator(&self) -> &FitnessEvaluator {
        &self.evaluator
    }

    /// Creates a uniformly random initial population.
    pub fn initialize_population<R: Rng>(&self, rng: &mut R) -> Vec<Chromosome> {
        let len = self.evaluator.catalog().len();
        (0..self.config.population_size)
            .map(|_| Chromosome::random(len, rng))
            .collect()
    }

    /// Runs one evolutionary cycle: select, recombine, mutate, replace.
    ///
    /// The returned population has exactly `population_size` members, elite
    /// fraction first in descending fitness order.
    pub fn evolve<R: Rng>(&self, population: &[Chromosome], rng: &mut R) -> Vec<Chromosome> {
        let selected = select_parents(
            population,
            &self.evaluator,
            self.config.population_size / 2,
            self.config.tournament_size,
            rng,
        );
        let mut offspring = crossover_pairs(&selected, rng);
        mutate_all(&mut offspring, self.config.mutation_rate, rng);
        self.next_generation(selected, offspring, rng)
    }

    /// Runs the full loop from a random initial population.
    ///
    /// `observer` is invoked once per generation with the current best.
    pub fn run<R, F>(&self, rng: &mut R, observer: F) -> GaResult
    where
        R: Rng,
        F: FnMut(GenerationReport<'_>),
    {
        let initial = self.initialize_population(rng);
        self.run_from(initial, rng, observer)
    }

    /// Runs the full loop from a caller-supplied initial population.
    ///
    /// Every chromosome must have catalog length, and the population must
    /// have `population_size` members.
    pub fn run_from<R, F>(
        &self,
        initial: Vec<Chromosome>,
        rng: &mut R,
        mut observer: F,
    ) -> GaResult
    where
        R: Rng,
        F: FnMut(GenerationReport<'_>),
    {
        debug_assert_eq!(initial.len(), self.config.population_size);
        debug_assert!(
            initial
                .iter()
                .all(|c| c.len() == self.evaluator.catalog().len())
        );

        info!(
            "starting run: population {}, {} generations, mutation rate {}",
            self.config.population_size, self.config.generations, self.config.mutation_rate
        );

        let mut population = initial;
        let mut best_fitness = 0.0;
        for generation in 1..=self.config.generations {
            population = self.evolve(&population, rng);

            // The elite slice sits at the front, so population[0] is the
            // generation's best without a re-sort.
            let best = &population[0];
            best_fitness = self.evaluator.evaluate(best);
            trace!("generation {generation}: best {best} at {best_fitness:.4}");
            observer(GenerationReport {
                generation,
                best,
                best_fitness,
            });
        }

        let best = population.into_iter().next().unwrap_or_else(|| {
            // Unreachable: validation guarantees a non-empty population.
            Chromosome::from_bits(vec![false; self.evaluator.catalog().len()])
        });
        info!(
            "run finished after {} generations: best {} at {:.4}",
            self.config.generations, best, best_fitness
        );
        GaResult {
            best,
            best_fitness,
            generations: self.config.generations,
        }
    }

    /// Builds the next generation from parents and their offspring.
    ///
    /// Merges both pools, keeps the top `population_size / 2` by fitness
    /// (stable descending sort), then fills the remaining slots with
    /// tournament winners drawn from the offspring pool only. Duplicates
    /// are allowed in the fill.
    fn next_generation<R: Rng>(
        &self,
        selected: Vec<Chromosome>,
        offspring: Vec<Chromosome>,
        rng: &mut R,
    ) -> Vec<Chromosome> {
        let mut scored: Vec<(f64, Chromosome)> = selected
            .iter()
            .chain(offspring.iter())
            .map(|c| (self.evaluator.evaluate(c), c.clone()))
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        let elite_count = self.config.population_size / 2;
        let mut next: Vec<Chromosome> = scored
            .into_iter()
            .take(elite_count)
            .map(|(_, c)| c)
            .collect();

        // Offspring is non-empty whenever parents were selected, so this
        // terminates for any validated population size.
        while next.len() < self.config.population_size {
            next.push(tournament_selection(
                &offspring,
                &self.evaluator,
                self.config.tournament_size,
                rng,
            ));
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::testing::ZeroRng;
    use crate::models::{Catalog, Provider};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn two_provider_catalog() -> Catalog {
        Catalog::new(vec![
            Provider::new("A", 5.0, 0.9, 0.5),
            Provider::new("B", 10.0, 0.5, 1.0),
        ])
    }

    fn chromosomes(bitstrings: &[&str]) -> Vec<Chromosome> {
        bitstrings
            .iter()
            .map(|s| Chromosome::from_bitstring(s).unwrap())
            .collect()
    }

    #[test]
    fn test_config_defaults() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 5);
        assert_eq!(config.generations, 10_000);
        assert_eq!(config.mutation_rate, 0.30);
        assert_eq!(config.tournament_size, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_degenerate_values() {
        assert_eq!(
            GaConfig::default().with_population_size(1).validate(),
            Err(GaError::PopulationTooSmall(1))
        );
        assert_eq!(
            GaConfig::default().with_generations(0).validate(),
            Err(GaError::ZeroGenerations)
        );
        assert_eq!(
            GaConfig::default().with_mutation_rate(1.5).validate(),
            Err(GaError::MutationRateOutOfRange(1.5))
        );
        assert_eq!(
            GaConfig::default().with_tournament_size(0).validate(),
            Err(GaError::ZeroTournamentSize)
        );
    }

    #[test]
    fn test_engine_rejects_tiny_catalog() {
        let evaluator = FitnessEvaluator::new(Catalog::new(vec![Provider::new(
            "only", 1.0, 0.9, 0.1,
        )]));
        assert_eq!(
            GaEngine::new(GaConfig::default(), evaluator).err(),
            Some(GaError::CatalogTooSmall(1))
        );
    }

    #[test]
    fn test_population_invariants_hold_across_generations() {
        let evaluator = FitnessEvaluator::new(Catalog::reference());
        let engine = GaEngine::new(GaConfig::default(), evaluator).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);

        let mut population = engine.initialize_population(&mut rng);
        assert_eq!(population.len(), 5);
        for _ in 0..30 {
            population = engine.evolve(&population, &mut rng);
            assert_eq!(population.len(), 5);
            assert!(population.iter().all(|c| c.len() == 8));
        }
    }

    #[test]
    fn test_replacement_keeps_elite() {
        let evaluator = FitnessEvaluator::new(two_provider_catalog());
        let config = GaConfig::default().with_population_size(4);
        let engine = GaEngine::new(config, evaluator).unwrap();

        // Fitness: "01" = 0.85, "10" = 0.58, "00" = 0.0.
        let selected = chromosomes(&["01", "00"]);
        let offspring = chromosomes(&["10", "00"]);
        let next = engine.next_generation(selected, offspring, &mut ZeroRng);

        assert_eq!(next.len(), 4);
        assert_eq!(next[0].to_string(), "01");
        assert_eq!(next[1].to_string(), "10");
        // The fill draws from the offspring pool only; the zero RNG always
        // picks offspring[0].
        assert_eq!(next[2].to_string(), "10");
        assert_eq!(next[3].to_string(), "10");
    }

    #[test]
    fn test_single_generation_forced_best() {
        // With a zero RNG every tournament returns population[0], crossover
        // splits at point 1, and mutation is disabled, so "10" propagates
        // through the whole cycle.
        let evaluator = FitnessEvaluator::new(two_provider_catalog());
        let config = GaConfig::default()
            .with_population_size(4)
            .with_generations(1)
            .with_mutation_rate(0.0);
        let engine = GaEngine::new(config, evaluator).unwrap();

        let initial = chromosomes(&["10", "01", "00", "11"]);
        let mut reports = Vec::new();
        let result = engine.run_from(initial, &mut ZeroRng, |r| {
            reports.push((r.generation, r.best.to_string(), r.best_fitness));
        });

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].0, 1);
        assert_eq!(reports[0].1, "10");
        // 0.4 * (5/5) + 0.3 * (1 - 0.9) + 0.3 * 0.5
        assert!((reports[0].2 - 0.58).abs() < 1e-12);
        assert_eq!(result.best.to_string(), "10");
        assert_eq!(result.generations, 1);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let evaluator = FitnessEvaluator::new(Catalog::reference());
        let config = GaConfig::default().with_generations(25);

        let collect = || {
            let engine = GaEngine::new(config.clone(), evaluator.clone()).unwrap();
            let mut rng = SmallRng::seed_from_u64(7);
            let mut lines = Vec::new();
            engine.run(&mut rng, |r| {
                lines.push(format!("{} {} {:.4}", r.generation, r.best, r.best_fitness));
            });
            lines
        };

        assert_eq!(collect(), collect());
    }

    #[test]
    fn test_observer_sees_one_based_consecutive_generations() {
        let evaluator = FitnessEvaluator::new(Catalog::reference());
        let config = GaConfig::default().with_generations(10);
        let engine = GaEngine::new(config, evaluator).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);

        let mut seen = Vec::new();
        engine.run(&mut rng, |r| seen.push(r.generation));
        assert_eq!(seen, (1..=10).collect::<Vec<_>>());
    }
}
