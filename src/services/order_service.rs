use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};
use crate::domain::{Order, OrderId, ProductId, UserId};
use crate::error::OrderError;
use crate::repository::{InMemoryOrderRepository, RemovableRepository};

/// Order use cases: create, look up, count products, remove.
///
/// Order ids come from a sequence owned by the service. Clones share the
/// sequence, and allocation is a single atomic fetch-and-increment, so ids stay
/// unique however many clones create orders at once. The sequence lives only in
/// memory and starts over on restart. It is wider than [`OrderId`] so it never
/// wraps; once it passes `OrderId::MAX` every create fails.
#[derive(Clone)]
pub struct OrderService<O = InMemoryOrderRepository> {
    orders: O,
    sequence: Arc<AtomicU64>,
}

impl<O: RemovableRepository<Order>> OrderService<O> {
    pub fn new(orders: O, first_order_id: OrderId) -> Self {
        Self {
            orders,
            sequence: Arc::new(AtomicU64::new(u64::from(first_order_id))),
        }
    }

    /// # Errors
    /// [`OrderError::SequenceExhausted`] once every [`OrderId`] has been used.
    #[instrument(skip(self, product_ids), fields(products = product_ids.len()))]
    pub async fn create_order(
        &self,
        user_id: UserId,
        product_ids: Vec<ProductId>,
    ) -> Result<OrderId, OrderError> {
        let next = self.sequence.fetch_add(1, Ordering::SeqCst);
        let id = OrderId::try_from(next).map_err(|_| {
            error!("Order id sequence exhausted");
            OrderError::SequenceExhausted
        })?;
        self.orders.save(Order::new(id, user_id, product_ids)).await?;
        info!(order_id = id, "Order created");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: OrderId) -> Result<Option<Order>, OrderError> {
        debug!("Sending request");
        Ok(self.orders.find_by_id(order_id).await?)
    }

    /// Number of product entries in the order, duplicates included.
    ///
    /// # Errors
    /// [`OrderError::NotFound`] when no order has this id.
    #[instrument(skip(self))]
    pub async fn get_product_count(&self, order_id: OrderId) -> Result<usize, OrderError> {
        match self.orders.find_by_id(order_id).await? {
            Some(order) => Ok(order.product_count()),
            None => {
                debug!("Order not found");
                Err(OrderError::NotFound(order_id))
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_order(&self, order_id: OrderId) -> Result<(), OrderError> {
        self.orders.remove(order_id).await?;
        info!("Order removed");
        Ok(())
    }
}
