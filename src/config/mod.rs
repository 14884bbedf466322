//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DIALOG_FOUNDRY` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use dialog_foundry::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Training in {}", config.bot.template_dir.display());
//! ```

mod bot;
mod error;
mod segmenter;

pub use bot::BotConfig;
pub use error::{ConfigError, ValidationError};
pub use segmenter::SegmenterConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Bot runtime configuration (template dir, train/serve commands)
    #[serde(default)]
    pub bot: BotConfig,

    /// Segmentation scheduler configuration
    #[serde(default)]
    pub segmenter: SegmenterConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DIALOG_FOUNDRY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DIALOG_FOUNDRY__BOT__TEMPLATE_DIR=/srv/bot` -> `bot.template_dir`
    /// - `DIALOG_FOUNDRY__SEGMENTER__INTERVAL_SECS=10` -> `segmenter.interval_secs`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DIALOG_FOUNDRY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.bot.validate()?;
        self.segmenter.validate()?;
        Ok(())
    }
}
