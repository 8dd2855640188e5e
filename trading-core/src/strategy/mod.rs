pub mod base;
pub mod errors;
pub mod scalping;

pub use base::Strategy;
pub use errors::StrategyError;
pub use scalping::ScalpingStrategy;

use crate::config::ScalpingSettings;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StrategyInfo {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Strategies that `create_strategy` knows how to build
pub fn list_strategies() -> Vec<StrategyInfo> {
    vec![StrategyInfo {
        id: ScalpingStrategy::ID.to_string(),
        name: ScalpingStrategy::NAME.to_string(),
        description: ScalpingStrategy::DESCRIPTION.to_string(),
    }]
}

pub fn create_strategy(
    strategy_id: &str,
    settings: &ScalpingSettings,
) -> Result<Box<dyn Strategy>, StrategyError> {
    match strategy_id {
        ScalpingStrategy::ID => Ok(Box::new(ScalpingStrategy::from_settings(settings))),
        unknown => Err(StrategyError::UnknownStrategy(unknown.to_string())),
    }
}
