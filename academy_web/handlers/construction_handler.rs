use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::Response,
};
use serde::Deserialize;

use academy_app::{
    command_handlers::{StartConstructionCommandHandler, StartUpgradeCommandHandler},
    cqrs::commands::{StartConstruction, StartUpgrade},
};
use academy_types::common::PlayerId;

use crate::{
    handlers::{bad_request, outcome_response},
    http::AppState,
};

#[derive(Debug, Deserialize)]
pub struct BuildRequest {
    pub user_id: Option<PlayerId>,
    pub building_id: Option<String>,
    pub cell_index: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct UpgradeRequest {
    pub user_id: Option<PlayerId>,
    pub building_id: Option<String>,
    pub target_level: Option<u8>,
}

/// `POST /api/build`: starts building on the requested cell.
pub async fn build(
    State(state): State<AppState>,
    payload: Result<Json<BuildRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = payload else {
        return bad_request("Invalid request body");
    };
    let (Some(player_id), Some(building_id), Some(cell_index)) =
        (req.user_id, req.building_id, req.cell_index)
    else {
        return bad_request("Missing user_id, building_id, or cell_index");
    };

    let result = state
        .app_bus
        .execute(
            StartConstruction {
                player_id,
                building_id,
                cell_index: Some(cell_index),
            },
            StartConstructionCommandHandler::new(),
        )
        .await;

    outcome_response(result)
}

/// `POST /api/upgrade`: raises an owned building to `target_level`.
pub async fn upgrade(
    State(state): State<AppState>,
    payload: Result<Json<UpgradeRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = payload else {
        return bad_request("Invalid request body");
    };
    let (Some(player_id), Some(building_id), Some(target_level)) =
        (req.user_id, req.building_id, req.target_level)
    else {
        return bad_request("Missing user_id, building_id, or target_level");
    };

    let result = state
        .app_bus
        .execute(
            StartUpgrade {
                player_id,
                building_id,
                target_level,
            },
            StartUpgradeCommandHandler::new(),
        )
        .await;

    outcome_response(result)
}
