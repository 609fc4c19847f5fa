use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    JsonParse(#[from] serde_json::Error),
    #[error("save '{0}' not found")]
    NameNotFound(String),
    #[error("save '{0}' already exists")]
    DuplicateName(String),
    #[error("no save with id {0}")]
    IdNotFound(Uuid)
}
