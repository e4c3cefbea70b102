use crate::domain::OrderId;

/// Startup settings for [`ShopSystem`](super::ShopSystem).
#[derive(Debug, Clone)]
pub struct SystemConfig {
    /// Mailbox capacity of each store actor.
    pub buffer_size: usize,
    /// Id handed to the first order created.
    pub first_order_id: OrderId,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            first_order_id: 1,
        }
    }
}
