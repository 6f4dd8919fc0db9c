use thiserror::Error;

/// Errors raised by an execution venue while processing an order.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The venue refused the order.
    #[error("order rejected: {0}")]
    Rejected(String),
    /// The venue could not be reached.
    #[error("execution venue unavailable: {0}")]
    Unavailable(String),
}

/// The order-execution collaborator.
///
/// Treated as an opaque, thread-safe capability: it may block and it may
/// fail, and callers hold no locks while invoking it.
pub trait ExecutionService: Send + Sync {
    /// Submits a buy order for immediate execution.
    ///
    /// # Arguments
    ///
    /// * `security` - The identifier of the security to buy.
    /// * `price` - The price the buy was triggered at.
    /// * `quantity` - The quantity to purchase.
    ///
    /// # Returns
    ///
    /// * `Result<(), ExecutionError>` - Err if the venue failed to accept the order.
    fn buy(&self, security: &str, price: f64, quantity: u32) -> Result<(), ExecutionError>;
}

impl ExecutionService for Box<dyn ExecutionService> {
    fn buy(&self, security: &str, price: f64, quantity: u32) -> Result<(), ExecutionError> {
        (**self).buy(security, price, quantity)
    }
}
