// trading-core/src/strategy/scalping.rs

use super::{Strategy, StrategyError};
use crate::config::{ScalpingSettings, Settings};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;
use tracing::{debug, info, warn};
use trading_common::{Order, Tick};

/// Ticks a non-decreasing run must reach before a rising tick buys.
const BUY_RUN_LENGTH: u64 = 4;

/// Each per-tick move is rounded to this many places before it is accumulated.
const PROFIT_SCALE: u32 = 2;

/// Buys after a run of rising ticks, sells on a loss limit or once profit
/// passes the scalp threshold.
///
/// One instance tracks one symbol-session. Run state is cleared in place
/// whenever an order is emitted; thresholds never change except through
/// [`Strategy::initialize`].
#[derive(Debug, Clone)]
pub struct ScalpingStrategy {
    loss_limit: Decimal,
    scalp_threshold: Decimal,
    prior_tick: Option<Tick>,
    tick_count: u64,
    total_profit: Decimal,
}

impl ScalpingStrategy {
    pub const ID: &'static str = "scalping";
    pub const NAME: &'static str = "Scalping";
    pub const DESCRIPTION: &'static str =
        "Buys on the fourth tick of a rising run, sells at the loss limit or above the scalp threshold";

    pub fn new(loss_limit: Decimal, scalp_threshold: Decimal) -> Self {
        Self {
            loss_limit,
            scalp_threshold,
            prior_tick: None,
            tick_count: 0,
            total_profit: Decimal::ZERO,
        }
    }

    pub fn from_settings(settings: &ScalpingSettings) -> Self {
        Self::new(settings.loss_limit, settings.scalp_threshold)
    }

    /// Build from [`Settings::new`], i.e. the config file and `SCALP_*` env layers.
    pub fn from_config() -> Result<Self, StrategyError> {
        let settings = Settings::new()?;
        Ok(Self::from_settings(&settings.strategy))
    }

    pub fn loss_limit(&self) -> Decimal {
        self.loss_limit
    }

    pub fn scalp_threshold(&self) -> Decimal {
        self.scalp_threshold
    }

    pub fn prior_tick(&self) -> Option<&Tick> {
        self.prior_tick.as_ref()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn total_profit(&self) -> Decimal {
        self.total_profit
    }

    /// Forget the baseline and the run length. Accumulated profit survives.
    fn restart_run(&mut self) {
        self.prior_tick = None;
        self.tick_count = 0;
    }

    fn emit(&mut self, order: Order, reason: &str) -> Option<Order> {
        info!(
            "Scalping {} signal ({}): {} after {} ticks, total profit {}",
            order.side, reason, order, self.tick_count, self.total_profit
        );
        self.reset();
        Some(order)
    }
}

/// Fractional move from `prior` to `price`, rounded half-to-even.
fn fractional_move(prior: Decimal, price: Decimal) -> Decimal {
    if prior.is_zero() {
        warn!("Cannot measure a move from a zero baseline price, counting it as flat");
        return Decimal::ZERO;
    }

    match (price - prior).checked_div(prior) {
        Some(change) => change.round_dp(PROFIT_SCALE),
        None => {
            warn!("Move from {} to {} overflows, counting it as flat", prior, price);
            Decimal::ZERO
        }
    }
}

fn parse_param(params: &HashMap<String, String>, key: &str) -> Result<Option<Decimal>, StrategyError> {
    params
        .get(key)
        .map(|raw| {
            Decimal::from_str(raw.trim()).map_err(|e| {
                StrategyError::InvalidArgument(format!("Invalid {} '{}': {}", key, raw, e))
            })
        })
        .transpose()
}

impl Strategy for ScalpingStrategy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn handle_tick(&mut self, tick: &Tick) -> Result<Option<Order>, StrategyError> {
        tick.validate()?;

        self.tick_count += 1;

        // The first tick of a run is measured against itself.
        let (prior_price, same_symbol) = {
            let prior = self.prior_tick.get_or_insert_with(|| tick.clone());
            (prior.price, prior.symbol == tick.symbol)
        };

        let profit = fractional_move(prior_price, tick.price);
        // saturates instead of panicking near Decimal::MAX
        self.total_profit = self.total_profit.saturating_add(profit);

        debug!(
            "Tick {} {} (prior {}): move {}, total {}, run {}",
            tick.symbol, tick.price, prior_price, profit, self.total_profit, self.tick_count
        );

        if prior_price < tick.price && self.tick_count >= BUY_RUN_LENGTH {
            return Ok(self.emit(Order::buy(tick.symbol.clone()), "rising run"));
        }

        if self.total_profit < Decimal::ZERO && self.total_profit.abs() >= self.loss_limit.abs() {
            return Ok(self.emit(Order::sell(tick.symbol.clone()), "loss limit"));
        }

        if self.total_profit > self.scalp_threshold {
            return Ok(self.emit(Order::sell(tick.symbol.clone()), "take profit"));
        }

        if !same_symbol {
            // Undo this call so the tracked run is unaffected.
            self.tick_count -= 1;
            self.total_profit = self.total_profit.saturating_sub(profit);
            debug!(
                "Ignoring {} tick while tracking {:?}",
                tick.symbol,
                self.prior_tick.as_ref().map(|t| t.symbol.as_str())
            );
            return Ok(None);
        }

        if prior_price > tick.price {
            self.restart_run();
            // the decreasing tick is the first tick of the new run
            self.tick_count += 1;
        }

        self.prior_tick = Some(tick.clone());

        Ok(None)
    }

    fn initialize(&mut self, params: HashMap<String, String>) -> Result<(), StrategyError> {
        let loss_limit = parse_param(&params, "loss_limit")?;
        let scalp_threshold = parse_param(&params, "scalp_threshold")?;

        if let Some(loss_limit) = loss_limit {
            self.loss_limit = loss_limit;
        }
        if let Some(scalp_threshold) = scalp_threshold {
            self.scalp_threshold = scalp_threshold;
        }

        info!(
            "Scalping strategy initialized: loss_limit={}, scalp_threshold={}",
            self.loss_limit, self.scalp_threshold
        );

        self.reset();
        Ok(())
    }

    fn reset(&mut self) {
        self.restart_run();
        self.total_profit = Decimal::ZERO;
    }
}
