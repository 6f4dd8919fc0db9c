//! Execution collaborators.

use autobuy::model::execution::Fill;
use autobuy::traits::execution::{ExecutionError, ExecutionService};
use chrono::Utc;
use log::info;
use std::sync::Mutex;
use uuid::Uuid;


/// An execution service that fills every buy on paper.
///
/// Accepts every order, assigns it an ID and records the resulting [`Fill`]
/// for later inspection. Thread-safe: the feed may invoke it from its
/// distribution task while the demo inspects fills afterwards.
pub struct PaperExecutionService {
    fills: Mutex<Vec<Fill>>,
}

impl PaperExecutionService {
    pub fn new() -> Self {
        Self {
            fills: Mutex::new(Vec::new()),
        }
    }

    /// Fills recorded so far, in execution order.
    pub fn fills(&self) -> Vec<Fill> {
        self.fills.lock().unwrap().clone()
    }
}

impl Default for PaperExecutionService {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutionService for PaperExecutionService {
    fn buy(&self, security: &str, price: f64, quantity: u32) -> Result<(), ExecutionError> {
        let fill = Fill::new(
            Uuid::new_v4().to_string(),
            security,
            price,
            quantity,
            Utc::now().timestamp_millis(),
        );
        info!(
            "BUY {} x{} @ {:.2} (order {})",
            security, quantity, price, fill.order_id
        );
        self.fills.lock().unwrap().push(fill);
        Ok(())
    }
}
