//! Demo wiring for the auto-buy core.
//!
//! Runs one auto-buy cycle against the bundled random price simulation and
//! prints the resulting fills. Set `RUST_LOG=info` to watch the cycle.

use anyhow::Result;
use autobuy::model::trigger_spec::TriggerSpec;
use autobuy_core::execution::PaperExecutionService;
use autobuy_core::feed::PriceFeed;
use autobuy_core::strategy::TradingStrategy;
use log::info;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let execution = Arc::new(PaperExecutionService::new());
    let feed = Arc::new(PriceFeed::new().with_tick_interval(Duration::from_millis(100)));
    let strategy = TradingStrategy::new(execution.clone(), feed);

    let requests = vec![
        TriggerSpec::new("IBM", 100.0, 12),
        TriggerSpec::new("GOOGL", 100.0, 24),
    ];

    let triggers = strategy.auto_buy(&requests).await?;
    for trigger in &triggers {
        info!(
            "{}: trigger level {:.2}, executed: {}",
            trigger.get_security(),
            trigger.get_trigger_level(),
            trigger.is_executed()
        );
    }

    println!("{}", serde_json::to_string_pretty(&execution.fills())?);
    Ok(())
}
