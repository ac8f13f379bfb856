use thiserror::Error;

use crate::common::PlayerId;

/// Errors for db stuff.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Player {0} not found")]
    PlayerNotFound(PlayerId),

    #[error("Player {0} has already chosen a faction")]
    PlayerAlreadyExists(PlayerId),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("Transaction error: {0}")]
    Transaction(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
