use crate::types::QuoteId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: QuoteId },

    #[error("no quotes available")]
    NoItemsAvailable,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result alias used throughout the core crate.
pub type CoreResult<T> = Result<T, CoreError>;
