use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use academy_app::{cqrs::queries::GetCityOverview, queries_handlers::GetCityOverviewHandler};
use academy_types::{
    common::PlayerId,
    errors::{ApplicationError, DbError},
};

use crate::{handlers::error_status, http::AppState};

/// `GET /api/player/{user_id}`: what the city screen renders.
pub async fn player_city(
    State(state): State<AppState>,
    Path(player_id): Path<PlayerId>,
) -> Response {
    let result = state
        .app_bus
        .query(GetCityOverview { player_id }, GetCityOverviewHandler::new())
        .await;

    match result {
        Ok(overview) => Json(overview).into_response(),
        Err(ApplicationError::Db(DbError::PlayerNotFound(_))) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "Player not found" })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, player_id, "failed to load city");
            (error_status(&err), Json(json!({ "detail": err.to_string() }))).into_response()
        }
    }
}
