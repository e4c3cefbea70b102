use thiserror::Error;
use crate::actor_framework::FrameworkError;
use crate::domain::OrderId;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found")]
    NotFound(OrderId),
    #[error("Order id sequence exhausted")]
    SequenceExhausted,
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(#[from] FrameworkError),
}

/// Errors that can occur during product lookups.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(#[from] FrameworkError),
}

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(#[from] FrameworkError),
}

/// Anything a controller cannot turn into an output line.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}
