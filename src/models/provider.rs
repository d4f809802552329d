//! Cloud-service-provider model.
//!
//! A provider is a candidate the optimizer may include in a solution subset.
//! Each carries the three attributes the fitness formula weighs: unit cost,
//! reliability, and base latency.

use serde::{Deserialize, Serialize};

/// A candidate cloud-service provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    /// Unique provider name.
    pub name: String,
    /// Unit cost (arbitrary currency units, > 0).
    pub cost: f64,
    /// Reliability in `[0, 1]` (1.0 = never fails).
    pub reliability: f64,
    /// Base latency (arbitrary time units, > 0).
    pub base_latency: f64,
}

impl Provider {
    /// Creates a provider with the given attributes.
    pub fn new(name: impl Into<String>, cost: f64, reliability: f64, base_latency: f64) -> Self {
        Self {
            name: name.into(),
            cost,
            reliability,
            base_latency,
        }
    }
}

/// An ordered, immutable catalog of candidate providers.
///
/// Chromosome bit positions map one-to-one onto catalog indices, so order is
/// significant and the catalog must not change while a population derived
/// from it is alive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    providers: Vec<Provider>,
}

impl Catalog {
    /// Creates a catalog from a list of providers.
    pub fn new(providers: Vec<Provider>) -> Self {
        Self { providers }
    }

    /// The reference catalog of eight providers.
    pub fn reference() -> Self {
        Self::new(vec![
            Provider::new("CSP_1", 4.6, 0.8, 0.6),
            Provider::new("CSP_2", 5.0, 0.85, 0.4),
            Provider::new("CSP_3", 6.0, 0.9, 0.5),
            Provider::new("CSP_4", 4.8, 0.82, 0.6),
            Provider::new("CSP_5", 6.2, 0.92, 0.4),
            Provider::new("CSP_6", 6.5, 0.94, 0.5),
            Provider::new("CSP_7", 5.5, 0.88, 0.6),
            Provider::new("CSP_8", 7.0, 0.98, 0.4),
        ])
    }

    /// Number of providers (= chromosome length).
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// True if the catalog holds no providers.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// The provider at the given index.
    pub fn get(&self, index: usize) -> Option<&Provider> {
        self.providers.get(index)
    }

    /// Iterates over providers in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Provider> {
        self.providers.iter()
    }

    /// All providers as a slice.
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }
}
