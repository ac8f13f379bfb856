use thiserror::Error;

/// Errors for app logic (use cases, commands).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not save your progress ({0}). Please try again later.")]
    PersistenceWriteFailed(String),
}
