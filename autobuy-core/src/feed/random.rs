//! The default bounded price simulation.
//!
//! Generates synthetic random quotes for a fixed list of securities, for
//! demo runs and tests that do not care about the exact sequence.

use autobuy::model::market_data::PriceUpdate;
use autobuy::traits::tick_source::TickSource;
use rand::Rng;

/// Number of ticks a default simulation produces.
pub const DEFAULT_TICKS: u32 = 10;

/// Candidate securities quoted by the simulation.
const SECURITIES: &[&str] = &["NVDA", "IBM", "HP", "AMD", "GOOGL"];

/// A bounded source of random price updates.
///
/// Each tick quotes one security picked from a fixed candidate list at a
/// price drawn uniformly from (1.00, 200.00].
pub struct RandomTickSource {
    remaining: u32,
}

impl RandomTickSource {
    /// Creates a source that produces exactly `ticks` updates.
    pub fn new(ticks: u32) -> Self {
        Self { remaining: ticks }
    }
}

impl Default for RandomTickSource {
    fn default() -> Self {
        Self::new(DEFAULT_TICKS)
    }
}

impl TickSource for RandomTickSource {
    fn next_tick(&mut self) -> Option<PriceUpdate> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let mut rng = rand::thread_rng();
        let security = SECURITIES[rng.gen_range(0..SECURITIES.len())];
        // Uniform over (1.00, 200.00]; gen_range is half-open at the top.
        let price = 200.0 - rng.gen_range(0.0..199.0);
        Some(PriceUpdate::new(security, price))
    }
}
