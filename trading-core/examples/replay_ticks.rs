//! Replays a fixed tick sequence through the scalping strategy and logs
//! every order it emits.
//!
//! ```text
//! RUST_LOG=trading_core=debug cargo run -p trading-core --example replay_ticks
//! ```

use dotenv::dotenv;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trading_common::Tick;
use trading_core::{create_strategy, list_strategies, Settings, Strategy};

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::new()?;
    for info in list_strategies() {
        info!("Available strategy {}: {}", info.id, info.description);
    }

    let mut strategy = create_strategy("scalping", &settings.strategy)?;
    info!(
        "Running {} with loss_limit={} scalp_threshold={}",
        strategy.name(),
        settings.strategy.loss_limit,
        settings.strategy.scalp_threshold
    );

    let session: [(&str, Decimal, u32); 12] = [
        ("AAPL", dec!(543.5), 100),
        ("AAPL", dec!(543.7), 100),
        ("GOOG", dec!(544.1), 200),
        ("AAPL", dec!(544.1), 200),
        ("AAPL", dec!(544.2), 100),
        ("AAPL", dec!(540.1), 100),
        ("AAPL", dec!(530.1), 100),
        ("AAPL", dec!(500.1), 100),
        ("AAPL", dec!(488.0), 200),
        ("AAPL", dec!(489.5), 100),
        ("AAPL", dec!(587.1), 100),
        ("AAPL", dec!(743.2), 200),
    ];

    let mut orders = Vec::new();
    for (symbol, price, quantity) in session {
        let tick = Tick::new(symbol, price, quantity)?;
        if let Some(order) = strategy.handle_tick(&tick)? {
            info!("Order for execution: {}", order);
            orders.push(order);
        }
    }

    println!("\nOrders emitted: {}", orders.len());
    for order in orders {
        println!("{}", order);
    }

    Ok(())
}
