//! Market data models.
//!
//! A `PriceUpdate` is the unit of data the feed distributes: one security
//! identifier paired with one observed price.

use serde::{Deserialize, Serialize};

/// Represents a single update to the price of a security.
///
/// Created fresh for every tick and discarded after distribution; carries no
/// identity beyond its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceUpdate {
    /// The identifier of the security being quoted.
    pub security: String,
    /// The observed price.
    pub price: f64,
}

impl PriceUpdate {
    /// Creates a new PriceUpdate.
    pub fn new(security: impl Into<String>, price: f64) -> Self {
        Self {
            security: security.into(),
            price,
        }
    }

    pub fn get_security(&self) -> &str {
        &self.security
    }

    pub fn get_price(&self) -> f64 {
        self.price
    }
}
