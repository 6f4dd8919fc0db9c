//! Auto-buy orchestration.
//!
//! Watches security prices for a caller and executes buy orders
//! automatically the first time each watched price reaches its trigger
//! level.

use crate::feed::random::RandomTickSource;
use crate::feed::{FeedError, PriceFeed};
use crate::trigger::BuyTrigger;
use autobuy::model::trigger_spec::TriggerSpec;
use autobuy::traits::execution::ExecutionService;
use autobuy::traits::price_listener::PriceListener;
use autobuy::traits::tick_source::TickSource;
use log::info;
use std::sync::Arc;
use std::time::Duration;

/// Runs auto-buy cycles: one [`BuyTrigger`] per requested security, wired to
/// a shared execution service and subscribed to a price feed for the
/// duration of one bounded feed run.
pub struct TradingStrategy {
    execution: Arc<dyn ExecutionService>,
    feed: Arc<PriceFeed>,
}

impl TradingStrategy {
    /// Creates a strategy around an execution service and a feed.
    ///
    /// The feed may be reused across cycles; every cycle subscribes its own
    /// triggers and removes them again before returning.
    pub fn new(execution: Arc<dyn ExecutionService>, feed: Arc<PriceFeed>) -> Self {
        Self { execution, feed }
    }

    /// Runs one auto-buy cycle against the default bounded simulation.
    ///
    /// Does not return until the feed run has fully completed, so every buy
    /// that qualified has been issued by then. The returned triggers expose
    /// which ones fired via [`BuyTrigger::is_executed`].
    pub async fn auto_buy(
        &self,
        specs: &[TriggerSpec],
    ) -> Result<Vec<Arc<BuyTrigger>>, FeedError> {
        self.auto_buy_from(specs, RandomTickSource::default(), None)
            .await
    }

    /// Runs one auto-buy cycle against a caller-supplied tick source,
    /// optionally bounding the wait.
    ///
    /// With `deadline = None` the wait is unbounded, matching
    /// [`TradingStrategy::auto_buy`]. On expiry the run is aborted and
    /// [`FeedError::Timeout`] returned; the cycle's triggers are
    /// unsubscribed either way.
    ///
    /// # Arguments
    ///
    /// * `specs` - One trigger per entry; duplicate securities are allowed
    ///   and produce independent triggers.
    /// * `source` - The ticks to distribute for this cycle.
    /// * `deadline` - Optional bound on the wait for run completion.
    pub async fn auto_buy_from<S>(
        &self,
        specs: &[TriggerSpec],
        source: S,
        deadline: Option<Duration>,
    ) -> Result<Vec<Arc<BuyTrigger>>, FeedError>
    where
        S: TickSource + 'static,
    {
        let triggers: Vec<Arc<BuyTrigger>> = specs
            .iter()
            .map(|spec| Arc::new(BuyTrigger::from_spec(spec, Arc::clone(&self.execution))))
            .collect();

        let listeners: Vec<Arc<dyn PriceListener>> = triggers
            .iter()
            .map(|trigger| Arc::clone(trigger) as Arc<dyn PriceListener>)
            .collect();

        for listener in &listeners {
            self.feed.subscribe(Arc::clone(listener));
        }

        let handle = Arc::clone(&self.feed).start(source);
        let outcome = match deadline {
            Some(limit) => handle.join_timeout(limit).await,
            None => handle.join().await,
        };

        // Deregister whether the run completed or not; a timed-out cycle
        // must not leak its listeners into the next one.
        for listener in &listeners {
            self.feed.unsubscribe(listener);
        }

        outcome?;

        let fired = triggers.iter().filter(|t| t.is_executed()).count();
        info!(
            "auto-buy cycle complete: {fired}/{} triggers fired",
            triggers.len()
        );

        Ok(triggers)
    }
}
