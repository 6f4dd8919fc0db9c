//! One-shot conditional buy triggers.

use autobuy::model::market_data::PriceUpdate;
use autobuy::model::trigger_spec::TriggerSpec;
use autobuy::traits::execution::{ExecutionError, ExecutionService};
use autobuy::traits::price_listener::PriceListener;
use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;


/// A pending conditional buy order.
///
/// Watches one security and issues a single buy the first time a qualifying
/// price arrives. The one-shot is claimed with an atomic compare-and-set, so
/// at most one buy is ever issued even when qualifying updates race in from
/// concurrent tasks.
pub struct BuyTrigger {
    security: String,
    trigger_level: f64,
    quantity: u32,
    executed: AtomicBool,
    execution: Arc<dyn ExecutionService>,
}

impl BuyTrigger {
    /// Creates a trigger watching `security` for a price at or below
    /// `trigger_level`.
    ///
    /// # Arguments
    ///
    /// * `security` - The identifier to watch (matched exactly).
    /// * `trigger_level` - The upper bound price that qualifies a buy.
    /// * `quantity` - The quantity passed to the execution service.
    /// * `execution` - The collaborator that executes the buy.
    pub fn new(
        security: impl Into<String>,
        trigger_level: f64,
        quantity: u32,
        execution: Arc<dyn ExecutionService>,
    ) -> Self {
        Self {
            security: security.into(),
            trigger_level,
            quantity,
            executed: AtomicBool::new(false),
            execution,
        }
    }

    /// Creates a trigger from a specification.
    pub fn from_spec(spec: &TriggerSpec, execution: Arc<dyn ExecutionService>) -> Self {
        Self::new(
            spec.get_security(),
            spec.get_trigger_level(),
            spec.get_quantity(),
            execution,
        )
    }

    pub fn get_security(&self) -> &str {
        &self.security
    }

    pub fn get_trigger_level(&self) -> f64 {
        self.trigger_level
    }

    pub fn get_quantity(&self) -> u32 {
        self.quantity
    }

    /// Whether the trigger has already issued its buy. Never reverts to
    /// false once set.
    pub fn is_executed(&self) -> bool {
        self.executed.load(Ordering::Acquire)
    }
}

impl PriceListener for BuyTrigger {
    fn on_price_update(&self, update: &PriceUpdate) -> Result<(), ExecutionError> {
        if self.is_executed() {
            return Ok(());
        }
        if update.get_security() != self.security {
            return Ok(());
        }
        if update.get_price() > self.trigger_level {
            return Ok(());
        }

        // Claim the one-shot before issuing the order; the loser of a race
        // between concurrent qualifying updates backs off here. A failed buy
        // still consumes the claim: this core never retries.
        if self
            .executed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Ok(());
        }

        debug!(
            "trigger fired: buy {} x{} @ {:.2} (level {:.2})",
            self.security,
            self.quantity,
            update.get_price(),
            self.trigger_level
        );
        self.execution
            .buy(&self.security, update.get_price(), self.quantity)
    }
}
