//! Example consumers of the optimizer. Nothing in the engine depends on these.

pub mod pressure;

pub use pressure::{burn_score, pressure, PressureReport};
