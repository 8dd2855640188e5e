use config::{Config, ConfigError, Environment, File, FileFormat};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ScalpingSettings {
    /// Fractional loss at which the position is cut, e.g. 0.10
    pub loss_limit: Decimal,
    /// Fractional profit above which the position is sold
    pub scalp_threshold: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub strategy: ScalpingSettings,
}

impl Settings {
    /// Defaults, then `../config/{RUN_MODE}` if present, then `SCALP_*` env overrides.
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Self::with_defaults()?
            .add_source(File::with_name(&format!("../config/{}", run_mode)).required(false))
            .add_source(
                Environment::with_prefix("SCALP")
                    .prefix_separator("_")
                    .separator("__"),
            );

        builder.build()?.try_deserialize()
    }

    /// Build from an inline TOML document layered over the defaults.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Self::with_defaults()?
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn with_defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("strategy.loss_limit", "0.10")?
            .set_default("strategy.scalp_threshold", "0.15")
    }
}

/// Serializes tests that touch `RUN_MODE` or `SCALP_*` variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
