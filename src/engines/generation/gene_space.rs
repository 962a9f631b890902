//! Gene space: how many genes exist and where each one may live.
//!
//! [`GeneSpace::sample`] is the only source of fresh gene values. Initial
//! seeding and major mutations both go through it.

use crate::error::{GenpolyError, Result};
use crate::types::{GeneRange, Individual, Population};
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct GeneSpace {
    ranges: Vec<GeneRange>,
}

impl GeneSpace {
    pub fn new(ranges: Vec<GeneRange>) -> Result<Self> {
        Self::check(&ranges)?;
        Ok(Self { ranges })
    }

    fn check(ranges: &[GeneRange]) -> Result<()> {
        if ranges.is_empty() {
            return Err(GenpolyError::Configuration(
                "At least one gene range is required".to_string(),
            ));
        }
        for range in ranges {
            range.validate()?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn ranges(&self) -> &[GeneRange] {
        &self.ranges
    }

    pub fn range(&self, gene: usize) -> &GeneRange {
        &self.ranges[gene]
    }

    /// Uniform draw from the closed range of `gene`.
    pub fn sample<R: Rng>(&self, gene: usize, rng: &mut R) -> f64 {
        let range = &self.ranges[gene];
        rng.gen_range(range.min..=range.max)
    }

    /// Fresh individual with every gene sampled once, in gene order.
    pub fn random_individual<R: Rng>(&self, rng: &mut R) -> Individual {
        (0..self.ranges.len())
            .map(|gene| self.sample(gene, rng))
            .collect()
    }

    /// Generation-0 parents.
    pub fn initialize<R: Rng>(&self, ancestors: usize, rng: &mut R) -> Population {
        (0..ancestors).map(|_| self.random_individual(rng)).collect()
    }

    /// Swap in new ranges for a later training stage. The gene count is fixed.
    pub fn set_ranges(&mut self, ranges: Vec<GeneRange>) -> Result<()> {
        if ranges.len() != self.ranges.len() {
            return Err(GenpolyError::Configuration(format!(
                "Expected {} gene ranges, got {}",
                self.ranges.len(),
                ranges.len()
            )));
        }
        Self::check(&ranges)?;
        self.ranges = ranges;
        Ok(())
    }

    /// Pull every gene of `individual` into its current range.
    pub fn clamp(&self, individual: &mut Individual) {
        for (value, range) in individual.iter_mut().zip(&self.ranges) {
            *value = range.clamp(*value);
        }
    }

    pub fn contains(&self, individual: &[f64]) -> bool {
        individual.len() == self.ranges.len()
            && individual
                .iter()
                .zip(&self.ranges)
                .all(|(value, range)| range.contains(*value))
    }
}
