//! Storage seams used by the services.
//!
//! Services only see these traits. The in-memory adapters are the store
//! actor handles; another backend only has to implement the same traits.

use std::future::Future;
use crate::actor_framework::{Entity, FrameworkError, StoreClient};
use crate::domain::{Cart, Order, OrderId, Product};

/// Key->entity storage with insert-or-overwrite semantics.
pub trait Repository<T: Entity>: Send + Sync {
    /// Stores `entity` under its id, replacing any previous record.
    fn save(&self, entity: T) -> impl Future<Output = Result<(), FrameworkError>> + Send;

    /// Returns the stored record, or `None` when nothing is stored under `id`.
    fn find_by_id(&self, id: T::Id) -> impl Future<Output = Result<Option<T>, FrameworkError>> + Send;
}

/// A [`Repository`] that also supports deletion.
pub trait RemovableRepository<T: Entity>: Repository<T> {
    /// Deletes the record if present. Missing ids are ignored.
    fn remove(&self, id: T::Id) -> impl Future<Output = Result<(), FrameworkError>> + Send;
}

pub type InMemoryProductRepository = StoreClient<Product>;
pub type InMemoryOrderRepository = StoreClient<Order>;
pub type InMemoryCartRepository = StoreClient<Cart>;

impl<T: Entity> Repository<T> for StoreClient<T> {
    async fn save(&self, entity: T) -> Result<(), FrameworkError> {
        StoreClient::save(self, entity).await
    }

    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        StoreClient::find_by_id(self, id).await
    }
}

// Only orders are ever deleted.
impl RemovableRepository<Order> for StoreClient<Order> {
    async fn remove(&self, id: OrderId) -> Result<(), FrameworkError> {
        StoreClient::remove(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::StoreActor;
    use crate::domain::CartItem;

    #[tokio::test]
    async fn test_order_round_trip() {
        let (actor, repo): (_, InMemoryOrderRepository) = StoreActor::new(8);
        tokio::spawn(actor.run());

        let order = Order::new(4, 9, vec![1, 1, 2]);
        Repository::save(&repo, order.clone()).await.unwrap();
        assert_eq!(Repository::find_by_id(&repo, 4).await.unwrap(), Some(order));

        RemovableRepository::remove(&repo, 4).await.unwrap();
        assert_eq!(Repository::find_by_id(&repo, 4).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_cart_round_trip_keyed_by_user() {
        let (actor, repo): (_, InMemoryCartRepository) = StoreActor::new(8);
        tokio::spawn(actor.run());

        let cart = Cart {
            user_id: 3,
            items: vec![CartItem { product_id: 10, quantity: 2 }],
        };
        Repository::save(&repo, cart.clone()).await.unwrap();
        assert_eq!(Repository::find_by_id(&repo, 3).await.unwrap(), Some(cart));
        assert_eq!(Repository::find_by_id(&repo, 4).await.unwrap(), None);
    }
}
