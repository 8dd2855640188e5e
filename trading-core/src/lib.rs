//! Tick-by-tick scalping strategy engine.
//!
//! Feed [`trading_common::Tick`] values into a [`strategy::ScalpingStrategy`]
//! and hand any returned [`trading_common::Order`] to the execution side.
//! One engine per symbol-session; the caller owns it exclusively.

pub mod config;
pub mod strategy;

pub use crate::config::{ScalpingSettings, Settings};
pub use strategy::{create_strategy, list_strategies, ScalpingStrategy, Strategy, StrategyError, StrategyInfo};
