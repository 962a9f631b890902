use super::{evolution::EvolutionConfig, pressure::PressureConfig, traits::ConfigSection};
use crate::error::GenpolyError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Prefix for environment overrides, e.g. `GENPOLY__EVOLUTION__ANCESTORS=8`
pub const ENV_PREFIX: &str = "GENPOLY";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub pressure: PressureConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), GenpolyError> {
        self.evolution.validate()?;
        self.pressure.validate()?;
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"))
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Reads a `.json` file as JSON, anything else as TOML.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GenpolyError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            GenpolyError::Configuration(format!(
                "Failed to read config {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: AppConfig = if is_json(path) {
            serde_json::from_str(&contents)?
        } else {
            toml::from_str(&contents)?
        };
        config.validate()?;

        log::debug!("Loaded configuration from {}", path.display());
        self.replace(config);
        Ok(())
    }

    /// Merges an optional config file with `GENPOLY__SECTION__KEY` environment
    /// overrides. Missing keys fall back to defaults.
    pub fn load_layered(&self, path: Option<&Path>) -> Result<(), GenpolyError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        self.replace(config);
        Ok(())
    }

    /// Writes JSON for a `.json` path, TOML otherwise.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GenpolyError> {
        let path = path.as_ref();
        let contents = if is_json(path) {
            serde_json::to_string_pretty(&self.get())?
        } else {
            toml::to_string_pretty(&self.get())?
        };
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Applies `f` and keeps the result only if it still validates.
    pub fn update<F>(&self, f: F) -> Result<(), GenpolyError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.get();
        f(&mut candidate);
        candidate.validate()?;
        self.replace(candidate);
        Ok(())
    }

    fn replace(&self, config: AppConfig) {
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
    }
}
