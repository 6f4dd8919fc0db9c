//! Trigger specifications consumed by the auto-buy orchestration.

use serde::{Deserialize, Serialize};

/// A request to watch one security and buy a fixed quantity the first time
/// its price reaches the trigger level or below.
///
/// This core performs no validation of the fields; the producing
/// collaborator is responsible for non-empty identifiers and positive
/// quantities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerSpec {
    /// The identifier of the security to watch (matched exactly,
    /// case-sensitive).
    pub security: String,
    /// The upper bound price that qualifies a buy.
    pub trigger_level: f64,
    /// The quantity to purchase when the trigger fires.
    pub quantity: u32,
}

impl TriggerSpec {
    /// Creates a new TriggerSpec.
    ///
    /// # Arguments
    ///
    /// * `security` - The identifier of the security to watch.
    /// * `trigger_level` - The upper bound price that qualifies a buy.
    /// * `quantity` - The quantity to purchase when the trigger fires.
    pub fn new(security: impl Into<String>, trigger_level: f64, quantity: u32) -> Self {
        Self {
            security: security.into(),
            trigger_level,
            quantity,
        }
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
}
