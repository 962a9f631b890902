use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenpolyError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Degenerate population: expected at least {expected} children, got {actual}")]
    DegeneratePopulation { expected: usize, actual: usize },

    #[error("No generation has been trained yet")]
    Untrained,

    /// Raised by the caller's scoring function, passed through untouched.
    #[error(transparent)]
    Scoring(anyhow::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Config source error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GenpolyError>;
