//! # Mock Framework
//!
//! Utilities for testing services against a scripted store.
//!
//! Use [`create_mock_store`] to get a store handle and the receiver its
//! requests land on. Then use helpers like [`expect_find`] or [`expect_save`]
//! to assert each request and choose the reply.

use tokio::sync::mpsc;
use crate::actor_framework::{Entity, Response, StoreClient, StoreRequest};

/// Creates a store handle whose mailbox is owned by the test.
///
/// No actor runs behind it. The test answers each request itself, which makes
/// failures (a dropped reply, a closed mailbox) easy to reproduce.
pub fn create_mock_store<T: Entity>(buffer_size: usize) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Save request
pub async fn expect_save<T: Entity>(receiver: &mut mpsc::Receiver<StoreRequest<T>>) -> Option<(T, Response<()>)> {
    match receiver.recv().await {
        Some(StoreRequest::Save { entity, respond_to }) => Some((entity, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a FindById request
pub async fn expect_find<T: Entity>(receiver: &mut mpsc::Receiver<StoreRequest<T>>) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(StoreRequest::FindById { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Remove request
pub async fn expect_remove<T: Entity>(receiver: &mut mpsc::Receiver<StoreRequest<T>>) -> Option<(T::Id, Response<()>)> {
    match receiver.recv().await {
        Some(StoreRequest::Remove { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;

    #[tokio::test]
    async fn test_mock_store() {
        let (client, mut receiver) = create_mock_store::<Product>(10);

        let find_task = tokio::spawn(async move { client.find_by_id(3).await });

        let (id, responder) = expect_find(&mut receiver).await.expect("Expected FindById request");
        assert_eq!(id, 3);
        responder.send(Ok(Some(Product::new(3, "Lamp", 12.0)))).unwrap();

        let result = find_task.await.unwrap();
        assert_eq!(result, Ok(Some(Product::new(3, "Lamp", 12.0))));
    }
}
