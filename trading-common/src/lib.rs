pub mod data;

pub use data::types::{DataError, Order, OrderSide, Tick, ORDER_QUANTITY};
