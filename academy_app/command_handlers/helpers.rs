use std::sync::Arc;
use tracing::{error, info};

use academy_game::models::construction::{ConstructionPlan, ConstructionResult};
use academy_types::{
    common::PlayerId,
    errors::{AppError, ApplicationError, DbError, GameError},
};

use crate::repository::PlayerRepository;

/// Storage failures on a write become `PersistenceWriteFailed`; rule and
/// lookup errors pass through untouched.
pub(crate) fn write_failure(err: ApplicationError) -> ApplicationError {
    let reason = match err {
        ApplicationError::Db(DbError::Database(e)) => e.to_string(),
        ApplicationError::Db(DbError::Transaction(reason)) => reason,
        ApplicationError::Db(DbError::Json(e)) => e.to_string(),
        ApplicationError::Infrastructure(reason) => reason,
        other => return other,
    };
    error!(%reason, "write failed");
    ApplicationError::App(AppError::PersistenceWriteFailed(reason))
}

/// Commits a validated construction with exactly one write: instant plans
/// complete right away, the others claim the construction slot.
pub(crate) async fn commit_construction(
    repo: &Arc<dyn PlayerRepository + '_>,
    player_id: PlayerId,
    plan: &ConstructionPlan,
) -> Result<ConstructionResult, ApplicationError> {
    if plan.is_instant() {
        repo.finish_construction(player_id, plan.building, plan.target_level, plan.cell_index)
            .await
            .map_err(write_failure)?;
    } else {
        let claimed = repo
            .set_construction_if_idle(player_id, &plan.to_record())
            .await
            .map_err(write_failure)?;
        if !claimed {
            return Err(GameError::ConstructionBusy.into());
        }
    }

    let result = plan.result();
    info!(
        building = %plan.building,
        level = plan.target_level,
        completed = result.is_completed(),
        "construction committed"
    );
    Ok(result)
}
