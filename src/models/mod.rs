//! Domain models for CSP selection.
//!
//! Defines the provider catalog the GA optimizes over. The catalog is loaded
//! once (compiled-in or deserialized) and never mutated during a run.

mod provider;

pub use provider::{Catalog, Provider};
