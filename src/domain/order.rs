use crate::actor_framework::Entity;
use super::{OrderId, ProductId, UserId};

/// Represents a customer order.
///
/// `product_ids` keeps insertion order and may repeat an id.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub product_ids: Vec<ProductId>,
}

impl Order {
    pub fn new(id: OrderId, user_id: UserId, product_ids: Vec<ProductId>) -> Self {
        Self {
            id,
            user_id,
            product_ids,
        }
    }

    /// Number of product entries, duplicates included.
    pub fn product_count(&self) -> usize {
        self.product_ids.len()
    }
}

impl Entity for Order {
    type Id = OrderId;
    const KIND: &'static str = "order";

    fn id(&self) -> &OrderId {
        &self.id
    }
}
