// =================================================================
// data/types.rs - Tick and Order value types
// =================================================================

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Fixed lot traded by every emitted order, whatever the tick quantity.
pub const ORDER_QUANTITY: u32 = 100;

/// Error types for market data values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// A single observed price update for one symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tick {
    /// Trading symbol, e.g. "AAPL"
    pub symbol: String,

    /// Last traded price, never negative
    pub price: Decimal,

    /// Traded quantity, always positive
    pub quantity: u32,
}

impl Tick {
    /// Build a tick, rejecting values a tick source should never produce.
    pub fn new(symbol: impl Into<String>, price: Decimal, quantity: u32) -> Result<Self, DataError> {
        let tick = Self {
            symbol: symbol.into(),
            price,
            quantity,
        };
        tick.validate()?;
        Ok(tick)
    }

    /// Check the field ranges. Ticks that arrive through serde skip `new`,
    /// so consumers call this before acting on them.
    pub fn validate(&self) -> Result<(), DataError> {
        if self.symbol.trim().is_empty() {
            return Err(DataError::InvalidArgument("Tick symbol cannot be empty".to_string()));
        }

        if self.price < Decimal::ZERO {
            return Err(DataError::InvalidArgument(format!(
                "Tick price for {} must not be negative, got {}",
                self.symbol, self.price
            )));
        }

        if self.quantity == 0 {
            return Err(DataError::InvalidArgument(format!(
                "Tick quantity for {} must be positive",
                self.symbol
            )));
        }

        Ok(())
    }
}

/// Order direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "BUY"),
            OrderSide::Sell => write!(f, "SELL"),
        }
    }
}

/// Market order handed to the execution side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub side: OrderSide,
    pub quantity: u32,
    pub symbol: String,
}

impl Order {
    pub fn buy(symbol: impl Into<String>) -> Self {
        Self {
            side: OrderSide::Buy,
            quantity: ORDER_QUANTITY,
            symbol: symbol.into(),
        }
    }

    pub fn sell(symbol: impl Into<String>) -> Self {
        Self {
            side: OrderSide::Sell,
            quantity: ORDER_QUANTITY,
            symbol: symbol.into(),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.side, self.quantity, self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_tick_validation() {
        assert!(Tick::new("AAPL", dec!(543.5), 100).is_ok());
        assert!(Tick::new("AAPL", Decimal::ZERO, 1).is_ok());

        assert!(matches!(
            Tick::new("", dec!(543.5), 100),
            Err(DataError::InvalidArgument(_))
        ));
        assert!(matches!(
            Tick::new("   ", dec!(543.5), 100),
            Err(DataError::InvalidArgument(_))
        ));
        assert!(matches!(
            Tick::new("AAPL", dec!(-0.01), 100),
            Err(DataError::InvalidArgument(_))
        ));
        assert!(matches!(
            Tick::new("AAPL", dec!(543.5), 0),
            Err(DataError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse_tick_message() {
        let msg = r#"{ "symbol": "GOOG", "price": "544.10", "quantity": 200 }"#;

        let tick: Tick = serde_json::from_str(msg).unwrap();

        assert_eq!(tick.symbol, "GOOG");
        assert_eq!(tick.price, dec!(544.10));
        assert_eq!(tick.quantity, 200);
        assert!(tick.validate().is_ok());
    }

    #[test]
    fn test_deserialized_tick_still_needs_validation() {
        let msg = r#"{ "symbol": "GOOG", "price": "-1", "quantity": 200 }"#;

        let tick: Tick = serde_json::from_str(msg).unwrap();

        assert!(tick.validate().is_err());
    }

    #[test]
    fn test_order_wire_format() {
        let order = Order::sell("AAPL");
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["side"], "SELL");
        assert_eq!(json["quantity"], 100);
        assert_eq!(json["symbol"], "AAPL");
        assert_eq!(order.to_string(), "SELL 100 AAPL");
    }

    #[test]
    fn test_orders_use_fixed_lot() {
        assert_eq!(Order::buy("AAPL").quantity, ORDER_QUANTITY);
        assert_eq!(Order::sell("AAPL").quantity, ORDER_QUANTITY);
        assert_eq!(Order::buy("AAPL").side, OrderSide::Buy);
    }
}
