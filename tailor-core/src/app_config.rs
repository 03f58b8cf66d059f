use serde::Deserialize;
use std::env;

use crate::CoreResult;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Storefront settings used when pricing option selections
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    pub channel_code: String,
    #[serde(default = "default_currency")]
    pub currency_code: String,
}

fn default_currency() -> String { "USD".to_string() }

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String { "tailor_order=info,tailor_catalog=info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_filter() }
    }
}

impl AppConfig {
    /// Load from `config/default`, the run-mode file, `config/local` and `TAILOR__*` env vars
    pub fn load() -> CoreResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Optional per-environment overrides
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, never checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `TAILOR__STORE__CHANNEL_CODE=EU_WEB` sets `store.channel_code`
            .add_source(config::Environment::with_prefix("TAILOR").separator("__"));

        let config = Self::from_builder(builder)?;
        tracing::info!(
            channel = %config.store.channel_code,
            currency = %config.store.currency_code,
            "Loaded tailor configuration (run mode {})",
            run_mode
        );
        Ok(config)
    }

    /// Build from an already assembled source list (used by tests and embedders)
    pub fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> CoreResult<Self> {
        let settings = builder.build()?;
        Ok(settings.try_deserialize()?)
    }
}
