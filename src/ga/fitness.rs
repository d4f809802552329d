//! Fitness evaluation for provider subsets.
//!
//! The score combines three weighted terms per selected provider:
//!
//! - cost, normalized by the maximum cost among all selected providers
//! - unreliability (`1 - reliability`)
//! - latency (base latency plus a per-pass increment)
//!
//! Two accumulation modes exist. In [`FitnessMode::LastSelected`] the three
//! term accumulators are overwritten on every set bit, so only the
//! highest-indexed selected provider's terms reach the final sum (the
//! normalizing maximum still spans all selected providers). In
//! [`FitnessMode::Summed`] the terms accumulate over every selected
//! provider. `LastSelected` is the default.
//!
//! Evaluation is pure: nothing is cached on the chromosome and repeated
//! calls return identical values.

use crate::models::Catalog;

use super::Chromosome;

/// Weight applied to the normalized cost term.
pub const COST_WEIGHT: f64 = 0.4;
/// Weight applied to the unreliability term.
pub const RELIABILITY_WEIGHT: f64 = 0.3;
/// Weight applied to the latency term.
pub const LATENCY_WEIGHT: f64 = 0.3;

/// How per-provider terms combine into the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitnessMode {
    /// Term accumulators are overwritten per set bit; the highest-indexed
    /// selected provider determines the cost/reliability/latency terms.
    #[default]
    LastSelected,
    /// Terms are summed over all selected providers.
    Summed,
}

/// Evaluates chromosome fitness against a provider catalog.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    catalog: Catalog,
    mode: FitnessMode,
}

impl FitnessEvaluator {
    /// Creates an evaluator with the default [`FitnessMode::LastSelected`].
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            mode: FitnessMode::default(),
        }
    }

    /// Sets the accumulation mode.
    pub fn with_mode(mut self, mode: FitnessMode) -> Self {
        self.mode = mode;
        self
    }

    /// The catalog this evaluator scores against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Computes the fitness of a chromosome.
    ///
    /// An all-zero chromosome scores exactly `0.0`; no division by the (then
    /// zero) maximum cost occurs. The chromosome length must equal the
    /// catalog length.
    pub fn evaluate(&self, chromosome: &Chromosome) -> f64 {
        assert_eq!(
            chromosome.len(),
            self.catalog.len(),
            "chromosome length must equal catalog length"
        );

        let max_cost = chromosome
            .selected_indices()
            .map(|i| self.catalog.get(i).map(|p| p.cost).unwrap_or(0.0))
            .fold(0.0_f64, f64::max);
        if max_cost == 0.0 {
            return 0.0;
        }

        // Extra latency charged on repeat visits to the same index within a
        // single pass. One pass visits each index once, so it never fires;
        // state is local to the call, keeping evaluation pure.
        let mut latency_increment = vec![0.0_f64; chromosome.len()];

        let mut cost = 0.0;
        let mut reliability = 0.0;
        let mut latency = 0.0;
        for i in chromosome.selected_indices() {
            let provider = match self.catalog.get(i) {
                Some(p) => p,
                None => continue,
            };
            let cost_term = COST_WEIGHT * (provider.cost / max_cost);
            let reliability_term = RELIABILITY_WEIGHT * (1.0 - provider.reliability);
            let latency_term =
                LATENCY_WEIGHT * (provider.base_latency + latency_increment[i]);
            latency_increment[i] += 0.1;

            match self.mode {
                FitnessMode::LastSelected => {
                    cost = cost_term;
                    reliability = reliability_term;
                    latency = latency_term;
                }
                FitnessMode::Summed => {
                    cost += cost_term;
                    reliability += reliability_term;
                    latency += latency_term;
                }
            }
        }

        cost + reliability + latency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Provider;

    fn two_provider_catalog() -> Catalog {
        Catalog::new(vec![
            Provider::new("A", 5.0, 0.9, 0.5),
            Provider::new("B", 10.0, 0.5, 1.0),
        ])
    }

    #[test]
    fn test_all_zero_chromosome_scores_zero() {
        let evaluator = FitnessEvaluator::new(Catalog::reference());
        let ch = Chromosome::from_bitstring("00000000").unwrap();
        assert_eq!(evaluator.evaluate(&ch), 0.0);
    }

    #[test]
    fn test_single_selected_provider() {
        let evaluator = FitnessEvaluator::new(two_provider_catalog());
        let ch = Chromosome::from_bitstring("10").unwrap();
        // 0.4 * (5/5) + 0.3 * (1 - 0.9) + 0.3 * 0.5
        let expected = 0.4 + 0.03 + 0.15;
        assert!((evaluator.evaluate(&ch) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_last_selected_keeps_final_terms_only() {
        let evaluator = FitnessEvaluator::new(two_provider_catalog());
        let ch = Chromosome::from_bitstring("11").unwrap();
        // max_cost = 10 over both, but only B's terms survive:
        // 0.4 * (10/10) + 0.3 * (1 - 0.5) + 0.3 * 1.0
        let expected = 0.4 + 0.15 + 0.3;
        assert!((evaluator.evaluate(&ch) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_summed_mode_accumulates_all_terms() {
        let evaluator =
            FitnessEvaluator::new(two_provider_catalog()).with_mode(FitnessMode::Summed);
        let ch = Chromosome::from_bitstring("11").unwrap();
        // A: 0.4 * (5/10) + 0.3 * 0.1 + 0.3 * 0.5
        // B: 0.4 * (10/10) + 0.3 * 0.5 + 0.3 * 1.0
        let expected = (0.2 + 0.03 + 0.15) + (0.4 + 0.15 + 0.3);
        assert!((evaluator.evaluate(&ch) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_modes_agree_on_single_bit() {
        let last = FitnessEvaluator::new(two_provider_catalog());
        let summed =
            FitnessEvaluator::new(two_provider_catalog()).with_mode(FitnessMode::Summed);
        let ch = Chromosome::from_bitstring("01").unwrap();
        assert_eq!(last.evaluate(&ch), summed.evaluate(&ch));
    }

    #[test]
    fn test_fitness_is_deterministic() {
        let evaluator = FitnessEvaluator::new(Catalog::reference());
        let ch = Chromosome::from_bitstring("10110101").unwrap();
        let first = evaluator.evaluate(&ch);
        for _ in 0..10 {
            assert_eq!(evaluator.evaluate(&ch), first);
        }
    }

    #[test]
    #[should_panic(expected = "chromosome length must equal catalog length")]
    fn test_length_mismatch_panics() {
        let evaluator = FitnessEvaluator::new(two_provider_catalog());
        let ch = Chromosome::from_bitstring("101").unwrap();
        evaluator.evaluate(&ch);
    }
}
