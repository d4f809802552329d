//! Genetic-algorithm optimizer for cloud-service-provider selection.
//!
//! Selects a subset of candidate cloud-service providers (CSPs) minimizing a
//! weighted objective over cost, unreliability, and latency. Candidate
//! subsets are encoded as fixed-length bit vectors, one bit per catalog
//! entry, and evolved with tournament selection, single-point crossover,
//! per-bit mutation, and elitist generational replacement.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Provider`, `Catalog`, and the compiled-in
//!   reference catalog of eight providers
//! - **`validation`**: Catalog integrity checks (duplicate names, reliability
//!   bounds, non-positive attributes)
//! - **`ga`**: The GA engine — `Chromosome`, `FitnessEvaluator`, genetic
//!   operators, and the generational `GaEngine`
//!
//! # Example
//!
//! ```
//! use csp_select::ga::{FitnessEvaluator, GaConfig, GaEngine};
//! use csp_select::models::Catalog;
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let evaluator = FitnessEvaluator::new(Catalog::reference());
//! let config = GaConfig::default().with_generations(50);
//! let engine = GaEngine::new(config, evaluator).unwrap();
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let result = engine.run(&mut rng, |_report| {});
//! assert_eq!(result.best.len(), 8);
//! ```
//!
//! # References
//!
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization, and
//!   Machine Learning"
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"

pub mod ga;
pub mod models;
pub mod validation;
