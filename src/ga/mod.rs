//! GA engine for provider subset selection.
//!
//! Implements the full evolutionary cycle over bit-vector chromosomes:
//! tournament selection, single-point crossover, per-bit mutation, and
//! elitist generational replacement, driven for a fixed number of
//! generations by [`GaEngine`].
//!
//! # Submodules
//!
//! - [`operators`]: Selection, crossover, and mutation as free functions
//!
//! Randomness is threaded explicitly (`&mut R: Rng`) through every
//! operation, so seeded runs are fully reproducible.
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization, and
//! Machine Learning"

mod chromosome;
mod engine;
mod fitness;
pub mod operators;

pub use chromosome::Chromosome;
pub use engine::{GaConfig, GaEngine, GaError, GaResult, GenerationReport};
pub use fitness::{
    COST_WEIGHT, FitnessEvaluator, FitnessMode, LATENCY_WEIGHT, RELIABILITY_WEIGHT,
};
