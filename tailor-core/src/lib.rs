pub mod app_config;
pub mod telemetry;

pub use app_config::{AppConfig, LoggingConfig, StoreConfig};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Telemetry setup failed: {0}")]
    Telemetry(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
