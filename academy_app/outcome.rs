use serde::Serialize;
use std::fmt::Display;
use tracing::{error, warn};

use academy_types::errors::ApplicationError;

/// Boolean-plus-message answer given to bot and web clients.
/// `message` is meant for humans: callers branch on `success` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionOutcome {
    pub success: bool,
    pub message: String,
}

impl ActionOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Turns a use-case result into an outcome, logging failures once.
    pub fn from_result<T: Display>(result: Result<T, ApplicationError>) -> Self {
        match result {
            Ok(value) => Self::ok(value.to_string()),
            Err(err) if err.is_rejection() => {
                warn!(error = %err, "request rejected");
                Self::failed(err.to_string())
            }
            Err(err) => {
                error!(error = %err, "request failed");
                Self::failed(err.to_string())
            }
        }
    }
}
