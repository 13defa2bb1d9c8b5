use config::{Config, Environment};
use thiserror::Error;

/// Port the server binds to when `PORT` is unset or unusable.
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read environment configuration: {0}")]
    Environment(#[from] config::ConfigError),
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// `PORT` is coerced to an integer explicitly: unset falls back to
    /// [`DEFAULT_PORT`] quietly, an unparsable value falls back with a warning.
    pub fn load() -> Result<Self, ConfigError> {
        let cfg = Config::builder()
            .add_source(Environment::default())
            .build()?;
        Ok(Self::from_config(&cfg))
    }

    fn from_config(cfg: &Config) -> Self {
        let port = match cfg.get::<u16>("port") {
            Ok(port) => port,
            Err(config::ConfigError::NotFound(_)) => DEFAULT_PORT,
            Err(e) => {
                tracing::warn!("invalid PORT value ({e}); falling back to {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        };

        Self { port }
    }
}
