//! genpoly
//! ===
//!
//! A generic real-valued genetic algorithm. The caller supplies a scoring
//! function over a fixed-length vector of genes and the legal range of each
//! gene; [`GeneticOptimizer`] searches for the vector with the highest score.
//!
//! Every generation breeds one child per ordered pair of parents (uniform
//! crossover, rare full rerolls, frequent proportional nudges), scores the
//! children, keeps the best `ancestors` of them and remembers the best child
//! ever seen. Training may be resumed in stages.
//!
//! ```no_run
//! use float_ord::FloatOrd;
//! use genpoly::{EvolutionConfig, GeneRange, GeneticOptimizer};
//!
//! let score = |genes: &[f64]| FloatOrd(-(genes[0] - 5.0).powi(2));
//! let mut optimizer = GeneticOptimizer::from_config(
//!     score,
//!     vec![GeneRange::new(0.0, 10.0)],
//!     EvolutionConfig::default(),
//! )?;
//! let best = optimizer.train(Some(200))?;
//! println!("best: {:?}", best);
//! # Ok::<(), genpoly::GenpolyError>(())
//! ```

pub mod config;
pub mod domain;
pub mod engines;
pub mod error;
pub mod types;

pub use config::{AppConfig, ConfigManager, EvolutionConfig};
pub use engines::generation::{GeneSpace, GeneticOptimizer, Objective, ProgressCallback};
pub use error::{GenpolyError, Result};
pub use types::{GeneRange, Individual, Population, Scored};
