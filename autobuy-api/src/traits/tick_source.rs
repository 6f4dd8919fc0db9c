//! Defines the `TickSource` trait for bounded price generation.
//!
//! This module specifies the contract the feed pulls its ticks from. It
//! allows the system to abstract over different generators (random
//! simulation, scripted sequences in tests) while keeping the feed's
//! distribution loop identical.

use crate::model::market_data::PriceUpdate;

/// A bounded source of price updates.
///
/// # Examples
///
/// ```
/// use autobuy::model::market_data::PriceUpdate;
/// use autobuy::traits::tick_source::TickSource;
///
/// struct OneShot(Option<PriceUpdate>);
///
/// impl TickSource for OneShot {
///     fn next_tick(&mut self) -> Option<PriceUpdate> {
///         self.0.take()
///     }
/// }
/// ```
pub trait TickSource: Send {
    /// Returns the next price update to distribute.
    ///
    /// This method is polled by the feed's run loop. It should return
    /// `Some(update)` for each tick and `None` once the bounded run is
    /// exhausted, which ends the run.
    ///
    /// # Returns
    ///
    /// * `Option<PriceUpdate>` - The next update, or None when done.
    fn next_tick(&mut self) -> Option<PriceUpdate>;
}
