//! Gas-mixture model used by the `genpoly` driver.
//!
//! Genes are `[plasma, n2o, temperature, volume]`: moles of each gas, the
//! temperature in kelvin and the container volume.

use float_ord::FloatOrd;
use std::fmt;

/// Ideal gas constant used by the model
pub const GAS_CONSTANT: f64 = 8.31;

/// Reference pressure, half of one atmosphere in kPa
pub const REFERENCE_KPA: f64 = 0.5 * 101.75;

pub const PLASMA: usize = 0;
pub const N2O: usize = 1;
pub const TEMPERATURE: usize = 2;
pub const VOLUME: usize = 3;

/// Ideal-gas pressure in kPa
pub fn pressure(moles: f64, temp: f64, volume: f64) -> f64 {
    moles * temp * GAS_CONSTANT / volume
}

/// Burnable moles per unit volume. Limited by the pressure-derived burn
/// ratio, half the plasma, and the available n2o, whichever is smallest.
pub fn burn_rate(genes: &[f64]) -> f64 {
    let plasma = genes[PLASMA];
    let n2o = genes[N2O];
    let temperature = genes[TEMPERATURE];
    let volume = genes[VOLUME];

    let kpa = pressure(plasma + n2o, temperature, volume);
    let pressure_factor = kpa.clamp(1.0, 1000.0) / REFERENCE_KPA;
    let mix_factor = (plasma / n2o).max(1.0);
    let burn_ratio = 1.0 / (pressure_factor * mix_factor);

    burn_ratio.min(plasma / 2.0).min(n2o) / volume
}

/// [`burn_rate`] as an optimizer score
pub fn burn_score(genes: &[f64]) -> FloatOrd<f64> {
    FloatOrd(burn_rate(genes))
}

/// Human-readable summary of a best-fit vector
#[derive(Debug, Clone, PartialEq)]
pub struct PressureReport {
    pub genes: Vec<f64>,
    pub moles_per_volume: f64,
    pub total_moles: f64,
    pub operating_pressure: f64,
}

impl PressureReport {
    pub fn new(genes: &[f64]) -> Self {
        let moles_per_volume = burn_rate(genes);
        Self {
            genes: genes.to_vec(),
            moles_per_volume,
            total_moles: moles_per_volume * genes[VOLUME],
            operating_pressure: pressure(
                genes[PLASMA] + genes[N2O],
                genes[TEMPERATURE],
                genes[VOLUME],
            ),
        }
    }
}

impl fmt::Display for PressureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Moles of Plasma/N2O, Temp K, Volume: {:?}", self.genes)?;
        writeln!(f, "Moles per volume: {}", self.moles_per_volume)?;
        writeln!(f, "Total Moles: {}", self.total_moles)?;
        write!(f, "Operating Pressure: {:.2}", self.operating_pressure)
    }
}
