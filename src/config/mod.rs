pub mod evolution;
pub mod manager;
pub mod pressure;
pub mod traits;

pub use evolution::EvolutionConfig;
pub use manager::{AppConfig, ConfigManager};
pub use pressure::{PressureConfig, SweepConfig};
pub use traits::ConfigSection;
