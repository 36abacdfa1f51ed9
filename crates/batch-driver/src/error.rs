use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("invalid params: {0}")]
    InvalidParams(String),

    #[error("invalid pool params: {0}")]
    InvalidPoolParams(#[from] amm_types::Error),

    #[error("bank transfer failed: {0}")]
    BankTransfer(String),

    #[error("storage entry not found: {0}")]
    StorageNotFound(String),

    #[error("storage conflict: {0}")]
    StorageConflict(String)
}

pub type BatchResult<T> = std::result::Result<T, BatchError>;
