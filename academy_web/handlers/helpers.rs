use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt::Display;

use academy_app::outcome::ActionOutcome;
use academy_types::errors::ApplicationError;

/// Status code for a failed request: rejections are the client's fault.
pub fn error_status(err: &ApplicationError) -> StatusCode {
    if err.is_rejection() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Renders a command result as `{"success", "message"}` with a matching status.
pub fn outcome_response<T: Display>(result: Result<T, ApplicationError>) -> Response {
    let status = match &result {
        Ok(_) => StatusCode::OK,
        Err(err) => error_status(err),
    };
    (status, Json(ActionOutcome::from_result(result))).into_response()
}

pub fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(ActionOutcome::failed(message))).into_response()
}
