//! Reference optimization run.
//!
//! Evolves provider subsets over the compiled-in eight-provider catalog with
//! the default parameters and prints the best chromosome of every
//! generation.

use csp_select::ga::{FitnessEvaluator, GaConfig, GaEngine};
use csp_select::models::Catalog;
use csp_select::validation::validate_catalog;

fn main() {
    env_logger::init();

    let catalog = Catalog::reference();
    if let Err(errors) = validate_catalog(&catalog) {
        for error in &errors {
            eprintln!("catalog error: {}", error.message);
        }
        std::process::exit(1);
    }

    let evaluator = FitnessEvaluator::new(catalog);
    let engine = match GaEngine::new(GaConfig::default(), evaluator) {
        Ok(engine) => engine,
        Err(error) => {
            eprintln!("configuration error: {error}");
            std::process::exit(1);
        }
    };

    let mut rng = rand::rng();
    engine.run(&mut rng, |report| {
        println!(
            "Generation {}: Best solution - {}, Fitness - {:.4}",
            report.generation, report.best, report.best_fitness
        );
    });
}
