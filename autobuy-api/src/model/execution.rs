use serde::{Deserialize, Serialize};

/// Represents one accepted buy recorded by an execution service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fill {
    /// The ID assigned to the order.
    pub order_id: String,
    /// The security that was bought.
    pub security: String,
    /// The price the order was filled at.
    pub price: f64,
    /// The quantity bought.
    pub quantity: u32,
    /// Timestamp of the fill (unix millis).
    pub timestamp: i64,
}

impl Fill {
    pub fn new(
        order_id: impl Into<String>,
        security: impl Into<String>,
        price: f64,
        quantity: u32,
        timestamp: i64,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            security: security.into(),
            price,
            quantity,
            timestamp,
        }
    }
}
