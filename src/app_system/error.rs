use thiserror::Error;

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(#[from] tokio::task::JoinError),
}
