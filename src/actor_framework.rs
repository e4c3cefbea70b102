use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any domain entity must implement to be stored by a [`StoreActor`].
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Short name used in log fields.
    const KIND: &'static str;

    /// Get the key the entity is stored under
    fn id(&self) -> &Self::Id;
}

/// Failures talking to a store actor. Absence of a record is never an error.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum StoreRequest<T: Entity> {
    Save {
        entity: T,
        respond_to: Response<()>,
    },
    FindById {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Remove {
        id: T::Id,
        respond_to: Response<()>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Owns the key->entity map for one entity type. Requests are handled one at
/// a time, so the map never needs a lock.
pub struct StoreActor<T: Entity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: HashMap<T::Id, T>,
}

impl<T: Entity> StoreActor<T> {
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        (actor, StoreClient::new(sender))
    }

    /// Runs until every [`StoreClient`] for this store has been dropped.
    #[instrument(name = "store", fields(kind = T::KIND), skip(self))]
    pub async fn run(mut self) {
        info!("Store starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Save { entity, respond_to } => {
                    self.handle_save(entity, respond_to);
                }
                StoreRequest::FindById { id, respond_to } => {
                    self.handle_find(id, respond_to);
                }
                StoreRequest::Remove { id, respond_to } => {
                    self.handle_remove(id, respond_to);
                }
            }
        }
        info!(records = self.store.len(), "Store stopped");
    }

    #[instrument(fields(id = %entity.id()), skip(self, entity, respond_to))]
    fn handle_save(&mut self, entity: T, respond_to: Response<()>) {
        let replaced = self.store.insert(entity.id().clone(), entity).is_some();
        debug!(replaced, "Record saved");
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(fields(id = %id), skip(self, respond_to))]
    fn handle_find(&self, id: T::Id, respond_to: Response<Option<T>>) {
        let item = self.store.get(&id).cloned();
        if item.is_none() {
            debug!("Record not found");
        }
        let _ = respond_to.send(Ok(item));
    }

    #[instrument(fields(id = %id), skip(self, respond_to))]
    fn handle_remove(&mut self, id: T::Id, respond_to: Response<()>) {
        // Removing a missing key is not an error.
        if self.store.remove(&id).is_some() {
            debug!("Record removed");
        }
        let _ = respond_to.send(Ok(()));
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// Shared handle to a [`StoreActor`]. Clones all talk to the same map.
pub struct StoreClient<T: Entity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

// Derive would demand `T: Clone` on the sender too; only the channel is cloned.
impl<T: Entity> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Entity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn save(&self, entity: T) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Save { entity, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::FindById { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn remove(&self, id: T::Id) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Remove { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
