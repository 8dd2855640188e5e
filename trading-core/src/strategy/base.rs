use super::StrategyError;
use std::collections::HashMap;
use trading_common::{Order, Tick};

pub trait Strategy: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;

    /// Consume one tick and decide whether to trade. At most one order per call.
    fn handle_tick(&mut self, tick: &Tick) -> Result<Option<Order>, StrategyError>;

    /// Reconfigure from string parameters, e.g. loaded from a form or file.
    fn initialize(&mut self, params: HashMap<String, String>) -> Result<(), StrategyError>;

    /// Drop run state, keeping configuration
    fn reset(&mut self);
}
