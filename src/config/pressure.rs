use super::traits::ConfigSection;
use crate::error::GenpolyError;
use crate::types::GeneRange;
use serde::{Deserialize, Serialize};

/// Gene ranges and run length for the gas-pressure example driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressureConfig {
    /// Generations for a single (non-sweep) run
    pub generations: usize,
    pub plasma: GeneRange,
    pub n2o: GeneRange,
    pub temperature: GeneRange,
    pub volume: GeneRange,
    pub sweep: Option<SweepConfig>,
}

/// Staged training over a moving volume window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub start: f64,
    pub end: f64,
    pub step: f64,
    /// Width of the volume window at each stage
    pub width: f64,
    /// Generations trained per stage
    pub generations: usize,
}

impl Default for PressureConfig {
    fn default() -> Self {
        Self {
            generations: 500,
            plasma: GeneRange::new(1.0, 1000.0),
            n2o: GeneRange::new(1.0, 1000.0),
            temperature: GeneRange::new(23.0, 1000.0),
            volume: GeneRange::new(1000.0, 1000.0),
            sweep: None,
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: 200.0,
            end: 20000.0,
            step: 200.0,
            width: 100.0,
            generations: 500,
        }
    }
}

impl PressureConfig {
    /// Ranges in gene order: plasma, n2o, temperature, volume
    pub fn ranges(&self) -> Vec<GeneRange> {
        vec![self.plasma, self.n2o, self.temperature, self.volume]
    }
}

impl SweepConfig {
    /// Volume windows visited by the sweep, lowest first
    pub fn windows(&self) -> Vec<GeneRange> {
        let mut windows = Vec::new();
        let mut low = self.start;
        while low < self.end {
            windows.push(GeneRange::new(low, low + self.width));
            low += self.step;
        }
        windows
    }
}

impl ConfigSection for PressureConfig {
    fn section_name() -> &'static str {
        "pressure"
    }

    fn validate(&self) -> Result<(), GenpolyError> {
        let section = Self::section_name();
        for range in self.ranges() {
            range.validate()?;
        }
        // The scoring function divides by n2o and volume
        if self.n2o.min <= 0.0 || self.volume.min <= 0.0 {
            return Err(GenpolyError::Configuration(format!(
                "{0}.n2o and {0}.volume must stay strictly positive",
                section
            )));
        }
        if let Some(sweep) = &self.sweep {
            if !(sweep.step > 0.0) || sweep.start + sweep.step <= sweep.start {
                return Err(GenpolyError::Configuration(format!(
                    "{}.sweep.step must be positive",
                    section
                )));
            }
            if !(sweep.start > 0.0) || !(sweep.width >= 0.0) || !sweep.end.is_finite() {
                return Err(GenpolyError::Configuration(format!(
                    "{}.sweep needs a positive start, finite end and non-negative width",
                    section
                )));
            }
        }
        Ok(())
    }
}
