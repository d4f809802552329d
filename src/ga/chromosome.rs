//! Bit-vector chromosome for subset selection.
//!
//! # Encoding
//!
//! A chromosome is a fixed-length bit vector, one bit per catalog entry.
//! Bit *i* set means provider *i* is part of the candidate subset. Order is
//! significant: positions map one-to-one onto catalog indices.
//!
//! Fitness is never cached on the chromosome — it is recomputed on demand by
//! [`FitnessEvaluator`](super::FitnessEvaluator), so a chromosome's identity
//! is purely its bit content.

use std::fmt;

use rand::Rng;

/// A candidate provider subset encoded as a fixed-length bit vector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chromosome {
    bits: Vec<bool>,
}

impl Chromosome {
    /// Creates a chromosome from explicit bits.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Parses a chromosome from a `'0'`/`'1'` string.
    ///
    /// Returns `None` if any character is not `'0'` or `'1'`.
    pub fn from_bitstring(s: &str) -> Option<Self> {
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Some(false),
                '1' => Some(true),
                _ => None,
            })
            .collect::<Option<Vec<bool>>>()?;
        Some(Self { bits })
    }

    /// Creates a uniformly random chromosome of the given length.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        let bits = (0..len).map(|_| rng.random_bool(0.5)).collect();
        Self { bits }
    }

    /// Number of bits (= catalog size).
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True if the chromosome has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bit at the given position.
    pub fn bit(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Flips the bit at the given position.
    pub fn flip(&mut self, index: usize) {
        self.bits[index] = !self.bits[index];
    }

    /// All bits as a slice.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Number of set bits (selected providers).
    pub fn selected_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Indices of set bits, in catalog order.
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
    }

    /// Splits off the tail at `point`, swapping with `other`'s tail.
    ///
    /// Used by single-point crossover; `point` must lie in `[1, len - 1]`
    /// and both chromosomes must have equal length.
    pub(super) fn swap_tails(&mut self, other: &mut Chromosome, point: usize) {
        debug_assert_eq!(self.len(), other.len());
        debug_assert!(point >= 1 && point < self.len());
        self.bits[point..].swap_with_slice(&mut other.bits[point..]);
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
