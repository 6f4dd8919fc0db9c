use crate::model::market_data::PriceUpdate;
use crate::traits::execution::ExecutionError;

/// A capability for receiving price updates from a feed.
///
/// The feed may dispatch to the same listener from concurrent tasks, so
/// implementations own their synchronization; the contract takes `&self`.
pub trait PriceListener: Send + Sync {
    /// Called when the feed publishes a new price.
    ///
    /// A failure raised by a downstream collaborator (e.g. an execution
    /// venue) is returned rather than handled here; the feed's distribution
    /// step decides what to do with it.
    ///
    /// # Arguments
    ///
    /// * `update` - The published price update.
    ///
    /// # Returns
    ///
    /// * `Result<(), ExecutionError>` - Err if a downstream collaborator failed.
    fn on_price_update(&self, update: &PriceUpdate) -> Result<(), ExecutionError>;
}

impl PriceListener for Box<dyn PriceListener> {
    fn on_price_update(&self, update: &PriceUpdate) -> Result<(), ExecutionError> {
        (**self).on_price_update(update)
    }
}
