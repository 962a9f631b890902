use crate::error::{GenpolyError, Result};
use serde::{Deserialize, Serialize};

/// One candidate parameter vector, one value per gene position.
pub type Individual = Vec<f64>;

pub type Population = Vec<Individual>;

/// Legal closed interval for a single gene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneRange {
    pub min: f64,
    pub max: f64,
}

impl GeneRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(GenpolyError::Configuration(format!(
                "Gene range bounds must be finite, got [{}, {}]",
                self.min, self.max
            )));
        }
        if self.min > self.max {
            return Err(GenpolyError::Configuration(format!(
                "Gene range min {} exceeds max {}",
                self.min, self.max
            )));
        }
        // Uniform sampling rescales the width by slightly more than 1
        if !(2.0 * self.width()).is_finite() {
            return Err(GenpolyError::Configuration(format!(
                "Gene range [{}, {}] is too wide to sample from",
                self.min, self.max
            )));
        }
        Ok(())
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Only valid on a range that passed `validate`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// An individual paired with the score it was ranked by
#[derive(Debug, Clone, PartialEq)]
pub struct Scored<S> {
    pub genes: Individual,
    pub score: S,
}

impl<S> Scored<S> {
    pub fn new(genes: Individual, score: S) -> Self {
        Self { genes, score }
    }
}
