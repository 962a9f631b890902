use super::traits::{check_probability, ConfigSection};
use crate::error::GenpolyError;
use serde::{Deserialize, Serialize};

/// Tunables of the genetic optimizer, fixed for the lifetime of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Parents kept after each generation
    pub ancestors: usize,
    /// Generations run by `train(None)`
    pub generations: usize,
    /// Per-gene chance of rerolling the value from its full range
    pub major_mutation_chance: f64,
    /// Per-gene chance of nudging the inherited value
    pub minor_mutation_chance: f64,
    /// Proportional size of a minor mutation (0.2 = up to a 20% shift)
    pub variance: f64,
    /// Seed for the random source; entropy when absent
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            ancestors: 5,
            generations: 50,
            major_mutation_chance: 0.01,
            minor_mutation_chance: 0.2,
            variance: 0.2,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Children bred per generation from `ancestors` parents
    pub fn children_per_generation(&self) -> usize {
        self.ancestors * self.ancestors.saturating_sub(1)
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), GenpolyError> {
        let section = Self::section_name();
        if self.ancestors < 2 {
            return Err(GenpolyError::Configuration(format!(
                "{}.ancestors must be at least 2 to breed offspring, got {}",
                section, self.ancestors
            )));
        }
        check_probability(section, "major_mutation_chance", self.major_mutation_chance)?;
        check_probability(section, "minor_mutation_chance", self.minor_mutation_chance)?;
        // The perturbation factor is drawn from a range 2 * variance wide,
        // which must stay sampleable
        if self.variance < 0.0 || !(4.0 * self.variance).is_finite() {
            return Err(GenpolyError::Configuration(format!(
                "{}.variance must be a non-negative number of manageable size, got {}",
                section, self.variance
            )));
        }
        Ok(())
    }
}
